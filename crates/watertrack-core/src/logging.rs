//! Logging configuration using tracing

use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable controlling the log filter.
pub const LOG_ENV_VAR: &str = "WATERTRACK_LOG";

const LOG_FILE_NAME: &str = "watertrack.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/watertrack/logs/` since the terminal
/// itself belongs to the dashboard. Log level is controlled by the
/// `WATERTRACK_LOG` environment variable.
///
/// # Examples
/// ```bash
/// WATERTRACK_LOG=debug cargo run
/// WATERTRACK_LOG=trace cargo run -- --headless
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir).map_err(|e| {
        Error::logging(format!("cannot create {}: {}", log_dir.display(), e))
    })?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, warn for everything else
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::new("watertrack=info,watertrack_app=info,watertrack_tui=info,warn")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))?;

    log_startup_banner(&log_dir);

    Ok(())
}

/// The one startup banner per run. Callers of [`init`] must not log another.
fn log_startup_banner(log_dir: &Path) {
    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("WaterTrack starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("watertrack").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CaptureWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_startup_banner_logged_once() {
        let writer = CaptureWriter::default();
        let make_writer = writer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || make_writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            log_startup_banner(Path::new("/tmp/watertrack/logs"));
        });

        let output = String::from_utf8(writer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("WaterTrack starting").count(), 1);
        assert!(output.contains("Log directory: /tmp/watertrack/logs"));
    }

    #[test]
    fn test_log_directory_is_watertrack_logs() {
        let dir = get_log_directory();
        assert!(dir.ends_with("watertrack/logs"));
    }
}
