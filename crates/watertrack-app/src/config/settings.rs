//! Settings parser for .watertrack/config.toml

use super::types::Settings;
use std::path::Path;
use watertrack_core::prelude::*;

pub const CONFIG_FILENAME: &str = "config.toml";
pub const WATERTRACK_DIR: &str = ".watertrack";

/// Load settings from .watertrack/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(WATERTRACK_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create the default config file in .watertrack/ if it is missing
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let dir = project_path.join(WATERTRACK_DIR);

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create .watertrack dir: {}", e)))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, generate_default_config())
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

fn generate_default_config() -> String {
    r#"# WaterTrack Configuration

[refresh]
interval_ms = 5000      # Mock data refresh period (minimum 250)

[ui]
icons = "unicode"       # "unicode" or "nerd_fonts"
initial_panel = "dashboard"
"#
    .to_string()
}
