//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use watertrack_app::config::Settings;
use watertrack_app::{Engine, TracingSink};
use tracing::{error, info};
use watertrack_core::prelude::{Result, ResultExt};
use watertrack_core::{MockDataSource, SnapshotSource};

use super::{event, render, terminal};

/// Run the dashboard in the terminal until the user quits.
///
/// Must be called from inside a tokio runtime; the engine spawns its refresh
/// timer and signal handler there.
pub fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let source: Arc<dyn SnapshotSource> = Arc::new(MockDataSource::new());
    let mut engine = Engine::new(settings, source, Box::new(TracingSink));

    let mut term = ratatui::init();

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    if let Err(ref e) = result {
        error!("TUI loop failed: {}", e);
    }
    result
}

fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Refresh snapshots and signal-handler messages
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll().context("Failed to read terminal event")? {
            engine.process_message(message);
        }
    }

    info!(
        "Leaving dashboard after {} snapshot refreshes",
        engine.state.refresh_count
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_is_a_plain_function() {
        // Runs inside the caller's runtime; no future to await
        let entry: fn(Settings) -> Result<()> = run;
        let _ = entry;
    }
}
