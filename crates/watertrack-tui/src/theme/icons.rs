//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: rich Nerd Font glyphs (requires Nerd Font installed)

use watertrack_app::config::IconMode;
use watertrack_app::ActivePanel;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Sidebar icon for a panel.
    pub fn panel(&self, panel: ActivePanel) -> &'static str {
        match (self.mode, panel) {
            (IconMode::NerdFonts, ActivePanel::Dashboard) => "\u{f015}", // nf-fa-home
            (IconMode::NerdFonts, ActivePanel::Products) => "\u{f187}",  // nf-fa-archive
            (IconMode::NerdFonts, ActivePanel::Inventory) => "\u{f1b2}", // nf-fa-cube
            (IconMode::NerdFonts, ActivePanel::Orders) => "\u{f07a}",    // nf-fa-shopping_cart
            (IconMode::NerdFonts, ActivePanel::Customers) => "\u{f0c0}", // nf-fa-users
            (IconMode::NerdFonts, ActivePanel::Deliveries) => "\u{f0d1}", // nf-fa-truck
            (IconMode::Unicode, ActivePanel::Dashboard) => "\u{2302}",   // ⌂
            (IconMode::Unicode, ActivePanel::Products) => "\u{25a4}",    // ▤
            (IconMode::Unicode, ActivePanel::Inventory) => "\u{25a6}",   // ▦
            (IconMode::Unicode, ActivePanel::Orders) => "\u{2261}",      // ≡
            (IconMode::Unicode, ActivePanel::Customers) => "\u{263a}",   // ☺
            (IconMode::Unicode, ActivePanel::Deliveries) => "\u{21c4}",  // ⇄
        }
    }

    pub fn bell(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0f3}", // nf-fa-bell
            IconMode::Unicode => "\u{266a}",   // ♪
        }
    }

    pub fn droplet(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f043}", // nf-fa-tint
            IconMode::Unicode => "\u{25c9}",   // ◉
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }

    pub fn refresh(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f021}", // nf-fa-refresh
            IconMode::Unicode => "\u{21bb}",   // ↻
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_icons_are_single_width_safe() {
        let icons = IconSet::new(IconMode::Unicode);
        for panel in ActivePanel::ALL {
            assert!(!icons.panel(panel).is_empty());
        }
        assert_eq!(icons.dot(), "\u{25cf}");
    }

    #[test]
    fn test_nerd_font_icons_differ_from_unicode() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.bell(), nerd.bell());
        assert_ne!(
            unicode.panel(ActivePanel::Orders),
            nerd.panel(ActivePanel::Orders)
        );
    }
}
