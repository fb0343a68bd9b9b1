//! Configuration types

use serde::{Deserialize, Serialize};

/// Default snapshot refresh interval in milliseconds.
pub const DEFAULT_REFRESH_MS: u64 = 5_000;

/// Intervals below this are clamped up to it.
pub const MIN_REFRESH_MS: u64 = 250;

/// Global settings from `.watertrack/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub refresh: RefreshSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Snapshot refresh settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RefreshSettings {
    /// Milliseconds between mock snapshot refreshes
    #[serde(default = "default_refresh_ms")]
    pub interval_ms: u64,
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            interval_ms: default_refresh_ms(),
        }
    }
}

impl RefreshSettings {
    /// The refresh period with the minimum applied.
    pub fn interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.interval_ms.max(MIN_REFRESH_MS))
    }
}

fn default_refresh_ms() -> u64 {
    DEFAULT_REFRESH_MS
}

/// Icon rendering mode.
///
/// Controls whether the TUI uses Nerd Font glyphs (requires a patched font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs, requires a Nerd Font installed in the terminal
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Panel shown at startup; any identifier is accepted
    #[serde(default = "default_initial_panel")]
    pub initial_panel: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            initial_panel: default_initial_panel(),
        }
    }
}

fn default_initial_panel() -> String {
    "dashboard".to_string()
}
