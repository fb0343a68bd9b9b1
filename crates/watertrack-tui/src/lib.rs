//! watertrack-tui - Terminal UI for WaterTrack
//!
//! Creates an Engine from watertrack-app and adds terminal rendering, key
//! polling and the dashboard widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
