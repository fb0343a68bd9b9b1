//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders};
use watertrack_core::{ActivityKind, AlertSeverity};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn title() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

/// "Black on Cyan" - used for the active sidebar entry
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Markers ---

/// Marker color for a recent-activity entry.
pub fn activity_marker(kind: &ActivityKind) -> Style {
    let color = match kind {
        ActivityKind::NewOrder => palette::STATUS_GREEN,
        ActivityKind::DeliveryComplete => palette::STATUS_BLUE,
        ActivityKind::LowStock => palette::STATUS_YELLOW,
        ActivityKind::Other(_) => palette::STATUS_GRAY,
    };
    Style::default().fg(color)
}

/// Marker color for an alert.
pub fn alert_marker(severity: &AlertSeverity) -> Style {
    let color = match severity {
        AlertSeverity::Critical => palette::STATUS_RED,
        AlertSeverity::Warning => palette::STATUS_YELLOW,
        AlertSeverity::Info => palette::STATUS_BLUE,
        AlertSeverity::Other(_) => palette::STATUS_GRAY,
    };
    Style::default().fg(color)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}

/// Glass block with a bold title.
pub fn card_block(text: &str, focused: bool) -> Block<'static> {
    glass_block(focused).title(Span::styled(format!(" {} ", text), title()))
}
