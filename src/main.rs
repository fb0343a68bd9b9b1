//! WaterTrack - terminal dashboard for a water-delivery business
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{error, info};

use watertrack_app::config::{self, IconMode, Settings};
use watertrack_core::Error;

/// WaterTrack - terminal dashboard for a water-delivery business
#[derive(Parser, Debug)]
#[command(name = "watertrack")]
#[command(about = "Terminal dashboard for a water-delivery business", long_about = None)]
struct Args {
    /// Run in headless mode (NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Panel to open on start (dashboard, products, inventory, orders, customers, deliveries)
    #[arg(long, value_name = "ID")]
    panel: Option<String>,

    /// Snapshot refresh interval in milliseconds
    #[arg(long, value_name = "MS")]
    refresh_ms: Option<u64>,

    /// Icon style
    #[arg(long, value_enum)]
    icons: Option<IconsArg>,

    /// Write a default .watertrack/config.toml in the current directory and exit
    #[arg(long)]
    init_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum IconsArg {
    Unicode,
    NerdFonts,
}

impl From<IconsArg> for IconMode {
    fn from(arg: IconsArg) -> Self {
        match arg {
            IconsArg::Unicode => IconMode::Unicode,
            IconsArg::NerdFonts => IconMode::NerdFonts,
        }
    }
}

impl Args {
    /// Apply command-line overrides on top of the loaded settings
    fn apply(&self, settings: &mut Settings) {
        if let Some(panel) = &self.panel {
            settings.ui.initial_panel = panel.clone();
        }
        if let Some(ms) = self.refresh_ms {
            settings.refresh.interval_ms = ms;
        }
        if let Some(icons) = self.icons {
            settings.ui.icons = icons.into();
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    color_eyre::install()?;

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if args.init_config {
        config::init_config_dir(&cwd)?;
        println!(
            "Wrote {}",
            cwd.join(config::WATERTRACK_DIR)
                .join(config::CONFIG_FILENAME)
                .display()
        );
        return Ok(());
    }

    // Log to file; the TUI owns stdout and headless mode writes NDJSON there
    if let Err(e) = watertrack_core::logging::init() {
        if e.is_fatal() {
            return Err(e.into());
        }
        eprintln!("warning: {}; continuing without a log file", e);
    }

    let mut settings = config::load_settings(&cwd);
    args.apply(&mut settings);
    info!(
        "Settings: panel={}, refresh={:?}, icons={}",
        settings.ui.initial_panel,
        settings.refresh.interval(),
        settings.ui.icons
    );

    let result: Result<(), Error> = if args.headless {
        watertrack::run_headless(settings).await
    } else {
        watertrack::run(settings)
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("WaterTrack exiting");
    Ok(result?)
}
