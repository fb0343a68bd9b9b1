//! Custom widget components

mod activity;
mod header;
mod placeholder;
mod product_forms;
mod sales_chart;
mod sidebar;
mod status_bar;
mod stock_tables;
mod summary_cards;

pub use activity::{ActivityCard, AlertsCard};
pub use header::{format_age, MainHeader, AVATAR_INITIALS};
pub use placeholder::{placeholder_text, PlaceholderPanel};
pub use product_forms::{ProductForm, SELECT_PRODUCT_PROMPT};
pub use sales_chart::SalesChart;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
pub use stock_tables::{FillHistoryTable, StockBalanceTable};
pub use summary_cards::{format_currency, group_thousands, SummaryCards};
