//! Periodic snapshot refresh.
//!
//! [`RefreshTimer`] owns a background task that fetches a new snapshot from a
//! [`SnapshotSource`] every interval and sends it to the TEA loop as
//! [`Message::SnapshotRefreshed`]. The first tick fires one full interval
//! after start; the initial snapshot is fetched synchronously by the caller.
//!
//! The task ends when:
//! - [`RefreshTimer::stop`] is called (shutdown channel + abort), or
//! - the timer is dropped (abort), or
//! - the message channel is closed (engine shutting down).

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::message::Message;
use watertrack_core::SnapshotSource;

/// Handle to the running refresh task.
#[derive(Debug)]
pub struct RefreshTimer {
    shutdown_tx: watch::Sender<bool>,
    handle: Option<JoinHandle<()>>,
    interval: Duration,
}

impl RefreshTimer {
    /// Spawn the refresh task. Must be called inside a tokio runtime.
    pub fn start(
        source: Arc<dyn SnapshotSource>,
        interval: Duration,
        msg_tx: mpsc::Sender<Message>,
    ) -> Self {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let snapshot = source.fetch();
                        if msg_tx
                            .send(Message::SnapshotRefreshed(Box::new(snapshot)))
                            .await
                            .is_err()
                        {
                            // Channel closed - engine is shutting down.
                            debug!("Refresh channel closed, stopping timer");
                            break;
                        }
                    }

                    _ = shutdown_rx.changed() => {
                        if *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }
        });

        info!("Snapshot refresh every {:?}", interval);

        Self {
            shutdown_tx,
            handle: Some(handle),
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the task. No message is sent after this returns.
    pub fn stop(&mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("Snapshot refresh stopped");
        }
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use watertrack_core::test_utils::{sample_snapshot, FixedSource};

    const PERIOD: Duration = Duration::from_millis(5_000);

    fn setup() -> (Arc<FixedSource>, mpsc::Sender<Message>, mpsc::Receiver<Message>) {
        let source = Arc::new(FixedSource::new(sample_snapshot()));
        let (tx, rx) = mpsc::channel(16);
        (source, tx, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_before_first_interval() {
        let (source, tx, mut rx) = setup();
        let _timer = RefreshTimer::start(source.clone(), PERIOD, tx);

        tokio::time::sleep(PERIOD - Duration::from_millis(1)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_every_interval() {
        let (source, tx, mut rx) = setup();
        let _timer = RefreshTimer::start(source.clone(), PERIOD, tx);

        for _ in 0..3 {
            let msg = rx.recv().await.unwrap();
            assert!(matches!(msg, Message::SnapshotRefreshed(_)));
        }
        assert_eq!(source.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_pending_tick() {
        let (source, tx, mut rx) = setup();
        let mut timer = RefreshTimer::start(source.clone(), PERIOD, tx);

        tokio::time::sleep(PERIOD / 2).await;
        timer.stop();
        assert!(!timer.is_running());

        tokio::time::sleep(PERIOD * 3).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_task() {
        let (source, tx, mut rx) = setup();
        let timer = RefreshTimer::start(source.clone(), PERIOD, tx);
        drop(timer);

        tokio::time::sleep(PERIOD * 2).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_channel_ends_task() {
        let (source, tx, rx) = setup();
        let timer = RefreshTimer::start(source, PERIOD, tx);
        drop(rx);

        tokio::time::sleep(PERIOD + Duration::from_millis(10)).await;
        tokio::task::yield_now().await;
        assert!(!timer.is_running());
    }
}
