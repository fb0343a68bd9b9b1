//! Full-screen rendering tests

use super::view_at;
use crate::layout;
use crate::test_utils::{create_test_state, TestTerminal};
use watertrack_app::state::{AppState, UiMode};
use watertrack_app::{ActivePanel, FormField, PanelRoute};

/// Text that appears only when the given panel is visible
fn marker(panel: ActivePanel) -> &'static str {
    match panel {
        ActivePanel::Dashboard => "Sales Performance",
        ActivePanel::Products => "Add New Product",
        ActivePanel::Inventory => "Inventory Management",
        ActivePanel::Orders => "Order Management",
        ActivePanel::Customers => "Customer Management",
        ActivePanel::Deliveries => "Delivery Management",
    }
}

fn render_screen(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view_at(frame, state, state.last_refreshed));
    term
}

fn state_on(route: impl Into<PanelRoute>) -> AppState {
    let mut state = create_test_state();
    state.select_route(route.into());
    state
}

#[test]
fn test_each_panel_renders_only_its_own_content() {
    for panel in ActivePanel::ALL {
        let term = render_screen(&state_on(panel));

        assert!(
            term.buffer_contains(marker(panel)),
            "{} should be visible",
            marker(panel)
        );
        for other in ActivePanel::ALL.into_iter().filter(|p| *p != panel) {
            assert!(
                !term.buffer_contains(marker(other)),
                "{} leaked onto {}",
                marker(other),
                panel
            );
        }
    }
}

#[test]
fn test_chrome_is_always_present() {
    for panel in ActivePanel::ALL {
        let term = render_screen(&state_on(panel));
        assert!(term.buffer_contains("WaterTrack"));
        assert!(term.buffer_contains(panel.label()));
        assert!(term.buffer_contains("just now"));
    }
}

#[test]
fn test_dashboard_shows_snapshot_values() {
    let term = render_screen(&create_test_state());

    assert!(term.buffer_contains("Total Revenue"));
    assert!(term.buffer_contains("$123,456"));
    assert!(term.buffer_contains("+789"));
    assert!(term.buffer_contains("85%"));
    assert!(term.buffer_contains("+2500"));
    assert!(term.buffer_contains("Recent Activity"));
    assert!(term.buffer_contains("5L bottle stock below 10% threshold"));
}

#[test]
fn test_products_panel_shows_forms_and_tables() {
    let term = render_screen(&state_on(ActivePanel::Products));

    assert!(term.buffer_contains("Fill Stock"));
    assert!(term.buffer_contains("Stock Balance"));
    assert!(term.buffer_contains("Filling Stock History"));
    assert!(term.buffer_contains("2023-05-02"));
}

#[test]
fn test_unknown_route_renders_empty_content() {
    let state = state_on(PanelRoute::from_id("reports"));
    let term = render_screen(&state);

    let areas = layout::create(term.area());
    let content = term.region_text(areas.content);
    assert!(content.chars().all(char::is_whitespace));

    assert!(term.buffer_contains("Reports"));
    assert!(term.buffer_contains("WaterTrack"));
}

#[test]
fn test_switching_away_and_back_renders_identically() {
    let mut state = state_on(ActivePanel::Products);
    let first = render_screen(&state).content();

    state.select_route(ActivePanel::Orders.into());
    let other = render_screen(&state).content();
    assert_ne!(first, other);

    state.select_route(ActivePanel::Products.into());
    let again = render_screen(&state).content();
    assert_eq!(first, again);
}

#[test]
fn test_form_mode_changes_hints() {
    let mut state = state_on(ActivePanel::Products);
    state.ui_mode = UiMode::FormInput;
    state.forms.focus = FormField::FillQuantity;
    state.forms.set_field(FormField::FillQuantity, "42");

    let term = render_screen(&state);
    assert!(term.buffer_contains("submit"));
    assert!(term.buffer_contains("42"));
}
