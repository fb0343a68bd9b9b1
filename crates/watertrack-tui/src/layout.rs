//! Screen layout definitions for the TUI
//!
//! The screen is a fixed-width sidebar on the left and a main column with a
//! header, the panel content, and a one-line key hint bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the navigation sidebar, borders included
pub const SIDEBAR_WIDTH: u16 = 22;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub sidebar: Rect,

    /// Page title, notification bell and avatar
    pub header: Rect,

    /// Active panel content
    pub content: Rect,

    /// Key hints
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)]).areas(area);

    let [header, content, status] = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(3),    // Panel content
        Constraint::Length(1), // Key hints
    ])
    .areas(main);

    ScreenAreas {
        sidebar,
        header,
        content,
        status,
    }
}

/// Dashboard panel regions
#[derive(Debug, Clone, Copy)]
pub struct DashboardAreas {
    pub cards: Rect,
    pub activity: Rect,
    pub alerts: Rect,
    pub chart: Rect,
}

pub fn dashboard(area: Rect) -> DashboardAreas {
    let [cards, lists, chart] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(7),
        Constraint::Min(6),
    ])
    .areas(area);

    let [activity, alerts] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(lists);

    DashboardAreas {
        cards,
        activity,
        alerts,
        chart,
    }
}

/// Products panel regions
#[derive(Debug, Clone, Copy)]
pub struct ProductsAreas {
    pub add_form: Rect,
    pub fill_form: Rect,
    pub balance: Rect,
    pub history: Rect,
}

pub fn products(area: Rect) -> ProductsAreas {
    let [forms, balance, history] = Layout::vertical([
        Constraint::Length(8),
        Constraint::Min(5),
        Constraint::Min(5),
    ])
    .areas(area);

    let [add_form, fill_form] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(forms);

    ProductsAreas {
        add_form,
        fill_form,
        balance,
        history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard() {
        let layout = create(Rect::new(0, 0, 120, 40));

        assert_eq!(layout.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.sidebar.height, 40);
        assert_eq!(layout.header.x, SIDEBAR_WIDTH);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.content.height, 36); // 40 - 3 - 1
    }

    #[test]
    fn test_dashboard_splits_lists_evenly() {
        let areas = dashboard(Rect::new(0, 0, 100, 30));
        assert_eq!(areas.activity.width, 50);
        assert_eq!(areas.alerts.width, 50);
        assert_eq!(areas.cards.height, 5);
        assert_eq!(areas.chart.y, 12);
    }

    #[test]
    fn test_small_area_does_not_panic() {
        let _ = create(Rect::new(0, 0, 10, 3));
        let _ = dashboard(Rect::new(0, 0, 5, 2));
        let _ = products(Rect::new(0, 0, 5, 2));
    }
}
