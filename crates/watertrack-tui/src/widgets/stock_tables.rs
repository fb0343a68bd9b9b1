//! Stock Balance and Filling Stock History tables.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    widgets::{Cell, Row, Table, Widget},
};

use watertrack_core::{FillEvent, Product};

use super::summary_cards::group_thousands;
use crate::theme::styles;

fn header_row<'a>(titles: &[&'a str]) -> Row<'a> {
    Row::new(titles.iter().map(|t| Cell::from(*t))).style(styles::accent_bold())
}

/// Product name and current stock, one row per product.
pub struct StockBalanceTable<'a> {
    products: &'a [Product],
}

impl<'a> StockBalanceTable<'a> {
    pub fn new(products: &'a [Product]) -> Self {
        Self { products }
    }
}

impl Widget for StockBalanceTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.products.iter().map(|p| {
            Row::new(vec![
                Cell::from(p.name.clone()),
                Cell::from(group_thousands(p.stock)),
            ])
            .style(styles::text_primary())
        });

        Table::new(rows, [Constraint::Percentage(60), Constraint::Percentage(40)])
            .header(header_row(&["Product", "Current Stock"]))
            .block(styles::card_block("Stock Balance", false))
            .render(area, buf);
    }
}

/// Past filling operations in snapshot order.
pub struct FillHistoryTable<'a> {
    history: &'a [FillEvent],
}

impl<'a> FillHistoryTable<'a> {
    pub fn new(history: &'a [FillEvent]) -> Self {
        Self { history }
    }
}

impl Widget for FillHistoryTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.history.iter().map(|event| {
            Row::new(vec![
                Cell::from(event.date.format("%Y-%m-%d").to_string()),
                Cell::from(event.product.clone()),
                Cell::from(group_thousands(event.quantity)),
            ])
            .style(styles::text_primary())
        });

        Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Percentage(50),
                Constraint::Min(8),
            ],
        )
        .header(header_row(&["Date", "Product", "Quantity"]))
        .block(styles::card_block("Filling Stock History", false))
        .render(area, buf);
    }
}
