//! Recent Activity and Alerts cards.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use watertrack_core::{ActivityEvent, Alert};

use crate::theme::{icons::IconSet, styles};

pub struct ActivityCard<'a> {
    events: &'a [ActivityEvent],
    icons: IconSet,
}

impl<'a> ActivityCard<'a> {
    pub fn new(events: &'a [ActivityEvent], icons: IconSet) -> Self {
        Self { events, icons }
    }
}

impl Widget for ActivityCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Latest updates from the last 24 hours",
                styles::text_muted(),
            )),
            Line::default(),
        ];
        lines.extend(self.events.iter().map(|event| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", self.icons.dot()),
                    styles::activity_marker(&event.kind),
                ),
                Span::styled(event.message.as_str(), styles::text_primary()),
            ])
        }));

        Paragraph::new(lines)
            .block(styles::card_block("Recent Activity", false))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

pub struct AlertsCard<'a> {
    alerts: &'a [Alert],
    icons: IconSet,
}

impl<'a> AlertsCard<'a> {
    pub fn new(alerts: &'a [Alert], icons: IconSet) -> Self {
        Self { alerts, icons }
    }
}

impl Widget for AlertsCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Issues that need your attention",
                styles::text_muted(),
            )),
            Line::default(),
        ];
        lines.extend(self.alerts.iter().map(|alert| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", self.icons.alert()),
                    styles::alert_marker(&alert.severity),
                ),
                Span::styled(alert.message.as_str(), styles::text_primary()),
            ])
        }));

        Paragraph::new(lines)
            .block(styles::card_block("Alerts", false))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
