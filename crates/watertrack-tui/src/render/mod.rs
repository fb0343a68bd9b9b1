//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use chrono::{DateTime, Local};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use watertrack_app::state::{AppState, UiMode};
use watertrack_app::{ActivePanel, FormKind};

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: the same state always yields the same
/// frame, apart from the refresh age shown in the header.
pub fn view(frame: &mut Frame, state: &AppState) {
    view_at(frame, state, Local::now());
}

/// Render with an explicit clock, so the header's refresh age is fixed.
pub fn view_at(frame: &mut Frame, state: &AppState, now: DateTime<Local>) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(widgets::Sidebar::new(&state.route, icons), areas.sidebar);

    let title = state.route.title();
    let age = (now - state.last_refreshed).to_std().unwrap_or_default();
    frame.render_widget(widgets::MainHeader::new(&title, age, icons), areas.header);

    match state.route.panel() {
        Some(ActivePanel::Dashboard) => render_dashboard(frame, areas.content, state, icons),
        Some(ActivePanel::Products) => render_products(frame, areas.content, state),
        Some(panel) => frame.render_widget(widgets::PlaceholderPanel::new(panel), areas.content),
        // Unknown route: empty main region
        None => {}
    }

    frame.render_widget(
        widgets::StatusBar::new(state.ui_mode, &state.route),
        areas.status,
    );
}

fn render_dashboard(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    state: &AppState,
    icons: IconSet,
) {
    let snapshot = &state.snapshot;
    let areas = layout::dashboard(area);

    frame.render_widget(widgets::SummaryCards::new(snapshot), areas.cards);
    frame.render_widget(
        widgets::ActivityCard::new(&snapshot.recent_activity, icons),
        areas.activity,
    );
    frame.render_widget(
        widgets::AlertsCard::new(&snapshot.alerts, icons),
        areas.alerts,
    );
    frame.render_widget(widgets::SalesChart::new(&snapshot.sales_data), areas.chart);
}

fn render_products(frame: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
    let snapshot = &state.snapshot;
    let areas = layout::products(area);
    let editing = state.ui_mode == UiMode::FormInput;

    frame.render_widget(
        widgets::ProductForm::new(FormKind::NewProduct, &state.forms, snapshot)
            .editing(editing),
        areas.add_form,
    );
    frame.render_widget(
        widgets::ProductForm::new(FormKind::FillStock, &state.forms, snapshot)
            .editing(editing),
        areas.fill_form,
    );
    frame.render_widget(
        widgets::StockBalanceTable::new(&snapshot.products),
        areas.balance,
    );
    frame.render_widget(
        widgets::FillHistoryTable::new(&snapshot.filling_history),
        areas.history,
    );
}
