//! Engine - shared orchestration state for TUI and headless runners
//!
//! Owns the TEA state, the message channel, the snapshot refresh timer and the
//! submission sink. Both runners drive it the same way:
//! receive from `msg_rx`, call [`Engine::process_message`], render or emit.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::refresh::RefreshTimer;
use crate::signals;
use crate::state::AppState;
use crate::submission::SubmissionSink;
use watertrack_core::SnapshotSource;

/// Capacity of the unified message channel.
pub const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for WaterTrack.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, stdin reader).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    refresh: RefreshTimer,

    sink: Box<dyn SubmissionSink>,

    /// Set by `shutdown()`; later messages are dropped
    torn_down: bool,
}

impl Engine {
    /// Create a new Engine.
    ///
    /// - Fetches the initial snapshot synchronously
    /// - Creates the message channel (capacity 256)
    /// - Starts the refresh timer
    /// - Spawns the signal handler
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(
        settings: Settings,
        source: Arc<dyn SnapshotSource>,
        sink: Box<dyn SubmissionSink>,
    ) -> Self {
        let refresh_interval = settings.refresh.interval();
        let state = AppState::with_source(source.as_ref(), settings);

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        let refresh = RefreshTimer::start(source, refresh_interval, msg_tx.clone());

        signals::spawn_signal_handler(msg_tx.clone());

        info!("Engine started on panel '{}'", state.route.id());

        Self {
            state,
            msg_tx,
            msg_rx,
            refresh,
            sink,
            torn_down: false,
        }
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        if self.torn_down {
            debug!("Engine shut down, dropping {:?}", msg);
            return;
        }
        process::process_message(&mut self.state, msg, self.sink.as_mut());
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which drains everything before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn is_shut_down(&self) -> bool {
        self.torn_down
    }

    /// Stop the refresh timer. Messages arriving afterwards are ignored.
    pub fn shutdown(&mut self) {
        if self.torn_down {
            return;
        }
        self.refresh.stop();
        self.torn_down = true;
        info!("Engine shut down");
    }
}
