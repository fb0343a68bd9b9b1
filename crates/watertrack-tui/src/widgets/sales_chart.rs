//! Sales Performance line chart: monthly revenue against month label.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, Widget},
};

use watertrack_core::MonthlyRevenue;

use crate::theme::{palette, styles};

use super::summary_cards::group_thousands;

pub struct SalesChart<'a> {
    data: &'a [MonthlyRevenue],
}

impl<'a> SalesChart<'a> {
    pub fn new(data: &'a [MonthlyRevenue]) -> Self {
        Self { data }
    }
}

/// Upper bound for the revenue axis: the peak rounded up to the next 10k.
fn y_upper_bound(data: &[MonthlyRevenue]) -> f64 {
    let peak = data.iter().map(|m| m.revenue).max().unwrap_or(0);
    let rounded = peak.div_ceil(10_000).max(1) * 10_000;
    f64::from(rounded)
}

/// Month labels for the x axis at the given chart width.
///
/// Axis labels are spread evenly across the bounds, so a subset only lines up
/// with its points when the step divides the last index. Picks the smallest
/// such step whose labels fit at roughly five columns each; with twelve
/// months that is every month or just the first and last.
fn x_axis_labels(data: &[MonthlyRevenue], width: u16) -> Vec<&str> {
    let last = data.len().saturating_sub(1);
    let fits = usize::from(width) / 5;
    let step = (1..=last.max(1))
        .find(|step| last % step == 0 && last / step < fits)
        .unwrap_or(last.max(1));
    data.iter().step_by(step).map(|m| m.month.as_str()).collect()
}

impl Widget for SalesChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block("Sales Performance", false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let description = Line::from(Span::styled(
            "Monthly revenue for the past year",
            styles::text_muted(),
        ));
        buf.set_line(inner.x, inner.y, &description, inner.width);

        if inner.height < 4 {
            return;
        }
        let chart_area = Rect::new(inner.x, inner.y + 1, inner.width, inner.height - 1);

        let points: Vec<(f64, f64)> = self
            .data
            .iter()
            .enumerate()
            .map(|(i, m)| (i as f64, f64::from(m.revenue)))
            .collect();

        let x_max = self.data.len().saturating_sub(1).max(1) as f64;
        let y_max = y_upper_bound(self.data);

        let x_labels: Vec<Span> = x_axis_labels(self.data, chart_area.width)
            .into_iter()
            .map(|month| Span::styled(month, styles::text_muted()))
            .collect();

        let y_labels = vec![
            Span::styled("0", styles::text_muted()),
            Span::styled(group_thousands((y_max / 2.0) as u32), styles::text_muted()),
            Span::styled(group_thousands(y_max as u32), styles::text_muted()),
        ];

        let dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(palette::CHART_LINE))
            .data(&points);

        Chart::new(vec![dataset])
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(palette::CHART_AXIS))
                    .bounds([0.0, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(palette::CHART_AXIS))
                    .bounds([0.0, y_max])
                    .labels(y_labels),
            )
            .render(chart_area, buf);
    }
}
