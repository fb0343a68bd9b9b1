//! Color palette.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status markers ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;
pub const STATUS_GRAY: Color = Color::Gray;

// --- Chart ---
pub const CHART_LINE: Color = Color::Rgb(136, 132, 216); // #8884d8
pub const CHART_AXIS: Color = Color::DarkGray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_line_is_rgb() {
        match CHART_LINE {
            Color::Rgb(_, _, _) => {}
            _ => panic!("CHART_LINE should be RGB"),
        }
    }
}
