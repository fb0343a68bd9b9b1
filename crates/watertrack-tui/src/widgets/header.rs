//! Header bar widget
//!
//! Page title on the left; refresh age, notification bell and avatar on the
//! right.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{icons::IconSet, styles};

/// Initials shown in the avatar
pub const AVATAR_INITIALS: &str = "JD";

pub struct MainHeader<'a> {
    title: &'a str,
    refreshed_ago: Duration,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(title: &'a str, refreshed_ago: Duration, icons: IconSet) -> Self {
        Self {
            title,
            refreshed_ago,
            icons,
        }
    }
}

/// Human-readable age of the last refresh.
pub fn format_age(age: Duration) -> String {
    let secs = age.as_secs();
    match secs {
        0 => "just now".to_string(),
        1..=59 => format!("{}s ago", secs),
        _ => format!("{}m ago", secs / 60),
    }
}

/// Terminal column width, clamped to `u16::MAX`.
fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(Span::styled(self.title, styles::title()));
        buf.set_line(inner.x + 1, inner.y, &title, inner.width.saturating_sub(1));

        let right = Line::from(vec![
            Span::styled(
                format!("{} {}", self.icons.refresh(), format_age(self.refreshed_ago)),
                styles::text_muted(),
            ),
            Span::raw("  "),
            Span::styled(self.icons.bell(), styles::text_secondary()),
            Span::raw("  "),
            Span::styled(format!("({})", AVATAR_INITIALS), styles::accent_bold()),
            Span::raw(" "),
        ]);

        let right_width = right
            .spans
            .iter()
            .map(|s| display_width(&s.content))
            .fold(0u16, u16::saturating_add);
        let title_width = display_width(self.title).saturating_add(2);

        // Drop the right-hand chrome rather than overlap the title
        if title_width.saturating_add(right_width) <= inner.width {
            let x = inner.right() - right_width;
            buf.set_line(x, inner.y, &right, right_width);
        }
    }
}
