//! The four quick-stat cards across the top of the dashboard.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};

use watertrack_core::Snapshot;

use crate::theme::{palette, styles};

/// Format a whole-dollar amount with thousands separators: `$123,456`.
pub fn format_currency(amount: u32) -> String {
    format!("${}", group_thousands(amount))
}

/// Insert `,` between every group of three digits.
pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub struct SummaryCards<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> SummaryCards<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }
}

impl Widget for SummaryCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [revenue, orders, inventory, customers] = Layout::horizontal([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .areas(area);

        let s = self.snapshot;
        stat_card(
            "Total Revenue",
            format_currency(s.total_revenue),
            "+20.1% from last month",
            revenue,
            buf,
        );
        stat_card(
            "Active Orders",
            format!("+{}", s.active_orders),
            "+201 since last hour",
            orders,
            buf,
        );
        inventory_card(s.inventory_status, inventory, buf);
        stat_card(
            "Active Customers",
            format!("+{}", s.active_customers),
            "+180 new customers this week",
            customers,
            buf,
        );
    }
}

fn stat_card(title: &str, value: String, caption: &str, area: Rect, buf: &mut Buffer) {
    let block = styles::card_block(title, false);
    let lines = vec![
        Line::from(Span::styled(value, styles::title())),
        Line::from(Span::styled(caption, styles::text_muted())),
    ];
    Paragraph::new(lines).block(block).render(area, buf);
}

fn inventory_card(percent: u8, area: Rect, buf: &mut Buffer) {
    let block = styles::card_block("Inventory Status", false);
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let value = Line::from(Span::styled(format!("{}%", percent), styles::title()));
    buf.set_line(inner.x, inner.y, &value, inner.width);

    if inner.height >= 2 {
        let gauge_area = Rect::new(inner.x, inner.y + 1, inner.width, 1);
        Gauge::default()
            .percent(u16::from(percent.min(100)))
            .label("")
            .gauge_style(ratatui::style::Style::default().fg(palette::ACCENT))
            .render(gauge_area, buf);
    }
}
