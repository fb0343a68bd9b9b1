//! Inventory, Orders, Customers and Deliveries panels.
//!
//! These panels have no data behind them; each shows a card with a heading,
//! a subtitle and a short body.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use watertrack_app::ActivePanel;

use crate::theme::styles;

/// Heading, subtitle and body of a placeholder panel. `None` for panels
/// that render real content.
pub fn placeholder_text(
    panel: ActivePanel,
) -> Option<(&'static str, &'static str, &'static str)> {
    match panel {
        ActivePanel::Inventory => Some((
            "Inventory Management",
            "Manage your water bottle inventory",
            "This is where you would manage your inventory. You can add, remove, or update stock levels here.",
        )),
        ActivePanel::Orders => Some((
            "Order Management",
            "View and manage customer orders",
            "This is where you would manage orders. You can view, update, or process customer orders here.",
        )),
        ActivePanel::Customers => Some((
            "Customer Management",
            "Manage your customer database",
            "This is where you would manage your customers. You can add, update, or view customer information here.",
        )),
        ActivePanel::Deliveries => Some((
            "Delivery Management",
            "Track and manage deliveries",
            "This is where you would manage deliveries. You can schedule, track, or update delivery information here.",
        )),
        ActivePanel::Dashboard | ActivePanel::Products => None,
    }
}

pub struct PlaceholderPanel {
    panel: ActivePanel,
}

impl PlaceholderPanel {
    pub fn new(panel: ActivePanel) -> Self {
        Self { panel }
    }
}

impl Widget for PlaceholderPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some((heading, subtitle, body)) = placeholder_text(self.panel) else {
            return;
        };

        let lines = vec![
            Line::from(Span::styled(subtitle, styles::text_secondary())),
            Line::raw(""),
            Line::from(Span::styled(body, styles::text_primary())),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(styles::card_block(heading, false))
            .render(area, buf);
    }
}
