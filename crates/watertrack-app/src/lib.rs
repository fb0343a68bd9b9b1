//! watertrack-app - Application state and orchestration for WaterTrack
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! dashboard: messages, the update function, panel routing, form drafts, the
//! snapshot refresh timer, configuration loading, and the Engine shared by
//! the TUI and headless runners.

pub mod config;
pub mod engine;
pub mod forms;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod panel;
pub mod process;
pub mod refresh;
pub mod signals;
pub mod state;
pub mod submission;

// Re-export primary types
pub use engine::Engine;
pub use forms::{coerce_number, FillStockDraft, FormField, FormKind, FormState, NewProductDraft};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use panel::{ActivePanel, PanelRoute};
pub use refresh::RefreshTimer;
pub use state::{AppPhase, AppState, UiMode};
pub use submission::{FormSubmission, SubmissionSink, TracingSink};
