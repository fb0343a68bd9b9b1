//! Headless mode runner - main event loop without TUI
//!
//! Drives the same Engine as the TUI. Messages come from the refresh timer,
//! the signal handler and a blocking stdin reader; state changes are reported
//! as NDJSON events.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info, warn};

use watertrack_app::config::Settings;
use watertrack_app::{
    Engine, FormField, FormKind, FormSubmission, Message, PanelRoute, SubmissionSink,
};
use watertrack_core::prelude::Result;
use watertrack_core::{MockDataSource, SnapshotSource};

use super::HeadlessEvent;

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("WaterTrack starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let source: Arc<dyn SnapshotSource> = Arc::new(MockDataSource::new());
    let sink: Box<dyn SubmissionSink> =
        Box::new(|submission: &FormSubmission| HeadlessEvent::submission(submission).emit());
    let mut engine = Engine::new(settings, source, sink);

    HeadlessEvent::panel_selected(&engine.state.route).emit();
    HeadlessEvent::snapshot_refreshed(&engine.state.snapshot, engine.state.refresh_count).emit();

    let stdin_tx = engine.msg_sender();
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(stdin_tx);
    });

    let result = headless_event_loop(&mut engine).await;

    engine.shutdown();

    info!("WaterTrack headless mode exiting");
    result
}

/// What the loop compares before and after each message
struct Observed {
    route: PanelRoute,
    refresh_count: u64,
}

impl Observed {
    fn of(engine: &Engine) -> Self {
        Self {
            route: engine.state.route.clone(),
            refresh_count: engine.state.refresh_count,
        }
    }
}

async fn headless_event_loop(engine: &mut Engine) -> Result<()> {
    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        match engine.msg_rx.recv().await {
            Some(msg) => {
                let before = Observed::of(engine);
                engine.process_message(msg);
                emit_post_message_events(engine, &before);
            }
            None => {
                info!("Message channel closed");
                break;
            }
        }
    }

    Ok(())
}

/// Emit events for state that changed while processing one message
fn emit_post_message_events(engine: &Engine, before: &Observed) {
    let state = &engine.state;

    if state.route != before.route {
        HeadlessEvent::panel_selected(&state.route).emit();
    }

    if state.refresh_count != before.refresh_count {
        HeadlessEvent::snapshot_refreshed(&state.snapshot, state.refresh_count).emit();
    }
}

/// Parse one stdin line into a message.
///
/// Returns `None` for blank lines and for anything that is not a command.
pub fn parse_command(line: &str) -> Option<Message> {
    let line = line.trim();
    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    };

    let set = |field: FormField| {
        Some(Message::SetFormField {
            field,
            text: arg.to_string(),
        })
    };

    match command {
        "select" if !arg.is_empty() => Some(Message::SelectPanelById(arg.to_string())),
        "name" => set(FormField::ProductName),
        "stock" => set(FormField::InitialStock),
        "product" => set(FormField::FillProduct),
        "quantity" => set(FormField::FillQuantity),
        "submit-product" => Some(Message::SubmitForm(FormKind::NewProduct)),
        "submit-fill" => Some(Message::SubmitForm(FormKind::FillStock)),
        "q" | "quit" => Some(Message::Quit),
        _ => None,
    }
}

/// Read stdin commands and forward them to the message channel (blocking)
fn spawn_stdin_reader_blocking(msg_tx: mpsc::Sender<Message>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match parse_command(trimmed) {
                    Some(msg) => {
                        let quit = matches!(msg, Message::Quit);
                        if msg_tx.blocking_send(msg).is_err() {
                            break;
                        }
                        if quit {
                            info!("Stdin: quit requested");
                            break;
                        }
                    }
                    None => {
                        warn!("Unknown stdin command: {}", trimmed);
                        HeadlessEvent::error(format!("Unknown command: {}", trimmed), false)
                            .emit();
                    }
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                HeadlessEvent::error(format!("Failed to read stdin: {}", e), false).emit();
                break;
            }
        }
    }

    info!("Stdin reader exiting");
}
