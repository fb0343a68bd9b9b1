//! Configuration file parsing for WaterTrack
//!
//! Supports:
//! - `.watertrack/config.toml` - Refresh and UI settings

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings, CONFIG_FILENAME, WATERTRACK_DIR};
pub use types::*;
