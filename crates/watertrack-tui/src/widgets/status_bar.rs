//! One-line key hint bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use watertrack_app::{ActivePanel, PanelRoute, UiMode};

use crate::theme::{palette, styles};

pub struct StatusBar<'a> {
    mode: UiMode,
    route: &'a PanelRoute,
}

impl<'a> StatusBar<'a> {
    pub fn new(mode: UiMode, route: &'a PanelRoute) -> Self {
        Self { mode, route }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.mode {
            UiMode::FormInput => vec![
                ("Tab", "next field"),
                ("\u{2190}/\u{2192}", "product"),
                ("Enter", "submit"),
                ("Ctrl+U", "clear"),
                ("Esc", "done"),
            ],
            UiMode::Normal => {
                let mut hints = vec![("1-6", "panel"), ("j/k", "next/prev")];
                if self.route.is(ActivePanel::Products) {
                    hints.push(("Tab", "edit forms"));
                }
                hints.push(("q", "quit"));
                hints
            }
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::DEEPEST_BG));

        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled(key, styles::accent_bold()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_normal_mode_hints() {
        let route = PanelRoute::default();
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(UiMode::Normal, &route), term.area());

        assert!(term.line_contains(0, "quit"));
        assert!(!term.line_contains(0, "edit forms"));
    }

    #[test]
    fn test_products_panel_offers_form_editing() {
        let route = PanelRoute::from(ActivePanel::Products);
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(UiMode::Normal, &route), term.area());
        assert!(term.line_contains(0, "edit forms"));
    }

    #[test]
    fn test_form_mode_hints() {
        let route = PanelRoute::from(ActivePanel::Products);
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(UiMode::FormInput, &route), term.area());

        assert!(term.line_contains(0, "submit"));
        assert!(!term.line_contains(0, "quit"));
    }
}
