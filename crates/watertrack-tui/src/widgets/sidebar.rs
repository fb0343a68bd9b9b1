//! Navigation sidebar: brand title and the six panel entries.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use watertrack_app::{ActivePanel, PanelRoute};

use crate::theme::{icons::IconSet, styles};

pub struct Sidebar<'a> {
    route: &'a PanelRoute,
    icons: IconSet,
}

impl<'a> Sidebar<'a> {
    pub fn new(route: &'a PanelRoute, icons: IconSet) -> Self {
        Self { route, icons }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let brand = Line::from(vec![
            Span::styled(format!("{} ", self.icons.droplet()), styles::accent()),
            Span::styled("WaterTrack", styles::accent_bold()),
        ]);
        buf.set_line(inner.x + 1, inner.y, &brand, inner.width.saturating_sub(1));

        // Entries start two rows below the brand
        for (i, panel) in ActivePanel::ALL.iter().enumerate() {
            let y = inner.y + 2 + i as u16;
            if y >= inner.bottom() {
                break;
            }

            let active = self.route.is(*panel);
            let style = if active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };

            let row = Rect::new(inner.x, y, inner.width, 1);
            if active {
                buf.set_style(row, style);
            }

            let line = Line::from(vec![
                Span::styled(format!(" {} ", i + 1), styles::text_muted().patch(style)),
                Span::styled(format!("{} ", self.icons.panel(*panel)), style),
                Span::styled(panel.label(), style),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }

    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use watertrack_app::config::IconMode;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    #[test]
    fn test_sidebar_lists_all_panels() {
        let mut term = TestTerminal::with_size(22, 12);
        let route = PanelRoute::default();
        term.render_widget(Sidebar::new(&route, icons()), term.area());

        assert!(term.buffer_contains("WaterTrack"));
        for panel in ActivePanel::ALL {
            assert!(term.buffer_contains(panel.label()));
        }
    }

    #[test]
    fn test_active_entry_is_highlighted() {
        let mut term = TestTerminal::with_size(22, 12);
        let route = PanelRoute::Panel(ActivePanel::Orders);
        term.render_widget(Sidebar::new(&route, icons()), term.area());

        // Orders is the fourth entry: border + brand + gap + 3 rows
        let y = 1 + 2 + 3;
        assert!(term.line_contains(y, "Orders"));
        assert_eq!(term.buffer()[(2, y)].bg, crate::theme::palette::ACCENT);
    }

    #[test]
    fn test_unknown_route_highlights_nothing() {
        let mut term = TestTerminal::with_size(22, 12);
        let route = PanelRoute::Unknown("reports".to_string());
        term.render_widget(Sidebar::new(&route, icons()), term.area());

        for y in 3..9 {
            assert_ne!(term.buffer()[(2, y)].bg, crate::theme::palette::ACCENT);
        }
    }
}
