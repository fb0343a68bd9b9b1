//! WaterTrack
//!
//! Terminal dashboard for a water-delivery business. The TUI lives in
//! `watertrack-tui`; this crate adds the headless NDJSON runner used for
//! scripted end-to-end checks.

pub mod headless;

pub use headless::runner::run_headless;
pub use watertrack_tui::run;
