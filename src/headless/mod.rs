//! Headless mode - NDJSON event output instead of the TUI
//!
//! One JSON object per line on stdout, each tagged with an `event` field:
//!
//! ```json
//! {"event":"panel_selected","panel":"dashboard","known":true,"timestamp":1704700001000}
//! {"event":"snapshot_refreshed","refresh_count":1,"snapshot":{"totalRevenue":91234,...},"timestamp":1704700006000}
//! {"event":"product_submitted","draft":{"name":"Test","initialStock":50.0},"timestamp":1704700007000}
//! ```
//!
//! Commands are read line by line from stdin; see [`runner::parse_command`].

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;
use tracing::error;

use watertrack_app::{FillStockDraft, FormSubmission, NewProductDraft, PanelRoute};
use watertrack_core::Snapshot;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A snapshot was applied; `refresh_count` is 0 for the initial one
    SnapshotRefreshed {
        refresh_count: u64,
        snapshot: Snapshot,
        timestamp: i64,
    },

    /// The visible panel changed
    PanelSelected {
        panel: String,
        known: bool,
        timestamp: i64,
    },

    ProductSubmitted {
        draft: NewProductDraft,
        timestamp: i64,
    },

    StockFillSubmitted {
        draft: FillStockDraft,
        timestamp: i64,
    },

    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Serialize as one NDJSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn snapshot_refreshed(snapshot: &Snapshot, refresh_count: u64) -> Self {
        Self::SnapshotRefreshed {
            refresh_count,
            snapshot: snapshot.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn panel_selected(route: &PanelRoute) -> Self {
        Self::PanelSelected {
            panel: route.id().to_string(),
            known: route.panel().is_some(),
            timestamp: Self::now(),
        }
    }

    pub fn submission(submission: &FormSubmission) -> Self {
        match submission {
            FormSubmission::NewProduct(draft) => Self::ProductSubmitted {
                draft: draft.clone(),
                timestamp: Self::now(),
            },
            FormSubmission::FillStock(draft) => Self::StockFillSubmitted {
                draft: draft.clone(),
                timestamp: Self::now(),
            },
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }
}
