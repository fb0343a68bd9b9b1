//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};

use crate::config::Settings;
use crate::forms::FormState;
use crate::panel::PanelRoute;
use watertrack_core::{Snapshot, SnapshotSource};

/// Current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Panel navigation
    #[default]
    Normal,

    /// Typing into the products panel forms
    FormInput,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,

    pub ui_mode: UiMode,

    /// Visible panel
    pub route: PanelRoute,

    /// Latest mock snapshot, replaced wholesale on refresh
    pub snapshot: Snapshot,

    /// When `snapshot` was produced
    pub last_refreshed: DateTime<Local>,

    /// Number of snapshots applied since startup (initial one excluded)
    pub refresh_count: u64,

    pub forms: FormState,

    pub settings: Settings,
}

impl AppState {
    /// Create state around an already-fetched snapshot.
    pub fn new(snapshot: Snapshot, settings: Settings) -> Self {
        let route = PanelRoute::from_id(settings.ui.initial_panel.clone());
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            route,
            snapshot,
            last_refreshed: Local::now(),
            refresh_count: 0,
            forms: FormState::new(),
            settings,
        }
    }

    /// Create state with the initial snapshot fetched synchronously from `source`.
    pub fn with_source(source: &dyn SnapshotSource, settings: Settings) -> Self {
        Self::new(source.fetch(), settings)
    }

    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
        self.last_refreshed = Local::now();
        self.refresh_count += 1;
    }

    pub fn select_route(&mut self, route: PanelRoute) {
        if !route.is(crate::panel::ActivePanel::Products) {
            self.ui_mode = UiMode::Normal;
        }
        self.route = route;
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::ActivePanel;
    use watertrack_core::test_utils::{sample_snapshot, FixedSource};

    #[test]
    fn test_initial_snapshot_fetched_once() {
        let source = FixedSource::new(sample_snapshot());
        let state = AppState::with_source(&source, Settings::default());
        assert_eq!(source.calls(), 1);
        assert_eq!(state.snapshot.total_revenue, 123_456);
        assert_eq!(state.route, PanelRoute::Panel(ActivePanel::Dashboard));
    }

    #[test]
    fn test_initial_panel_from_settings() {
        let mut settings = Settings::default();
        settings.ui.initial_panel = "orders".to_string();
        let state = AppState::new(sample_snapshot(), settings);
        assert_eq!(state.route, PanelRoute::Panel(ActivePanel::Orders));
    }

    #[test]
    fn test_apply_snapshot_replaces_wholesale() {
        let mut state = AppState::new(sample_snapshot(), Settings::default());
        let mut next = sample_snapshot();
        next.total_revenue = 50_000;
        next.products.clear();
        state.apply_snapshot(next.clone());
        assert_eq!(state.snapshot, next);
        assert_eq!(state.refresh_count, 1);
    }

    #[test]
    fn test_leaving_products_exits_form_mode() {
        let mut state = AppState::new(sample_snapshot(), Settings::default());
        state.select_route(ActivePanel::Products.into());
        state.ui_mode = UiMode::FormInput;
        state.select_route(ActivePanel::Orders.into());
        assert_eq!(state.ui_mode, UiMode::Normal);
    }
}
