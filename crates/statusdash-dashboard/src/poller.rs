//! Background snapshot poller and the single-slot handoff to the UI loop
//!
//! The poller never queues: the slot holds at most one unconsumed snapshot,
//! and a snapshot offered while the slot is full is dropped. The UI loop
//! therefore always sees the oldest unconsumed snapshot next.

use crate::source::SnapshotFetcher;
use statusdash_core::Snapshot;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, error::TryRecvError, error::TrySendError};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, warn};

/// Outcome of offering a snapshot to the handoff slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// The slot was empty and now holds the snapshot
    Delivered,
    /// The slot was full; the offered snapshot was discarded
    Dropped,
    /// The receiving side is gone
    Closed,
}

/// Producer half of the handoff slot
#[derive(Debug, Clone)]
pub struct HandoffSender {
    tx: mpsc::Sender<Snapshot>,
}

/// Consumer half of the handoff slot
#[derive(Debug)]
pub struct HandoffReceiver {
    rx: mpsc::Receiver<Snapshot>,
}

/// Create a capacity-1 handoff slot
pub fn handoff() -> (HandoffSender, HandoffReceiver) {
    let (tx, rx) = mpsc::channel(1);
    (HandoffSender { tx }, HandoffReceiver { rx })
}

impl HandoffSender {
    /// Offer a snapshot without blocking
    pub fn offer(&self, snapshot: Snapshot) -> Offer {
        match self.tx.try_send(snapshot) {
            Ok(()) => Offer::Delivered,
            Err(TrySendError::Full(_)) => Offer::Dropped,
            Err(TrySendError::Closed(_)) => Offer::Closed,
        }
    }
}

impl HandoffReceiver {
    /// Wait for the next snapshot; `None` once every sender is gone
    pub async fn recv(&mut self) -> Option<Snapshot> {
        self.rx.recv().await
    }

    /// Take the pending snapshot, if any
    pub fn try_recv(&mut self) -> Option<Snapshot> {
        match self.rx.try_recv() {
            Ok(snapshot) => Some(snapshot),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

/// Spawn the periodic poller.
///
/// The first fetch happens one `period` after start; the caller is expected
/// to have fetched the initial snapshot itself. Fetch failures are logged and
/// skipped. The task ends when the receiver is dropped or the handle aborted.
pub fn spawn_poller(
    fetcher: Arc<dyn SnapshotFetcher>,
    period: Duration,
    sender: HandoffSender,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let fetcher = Arc::clone(&fetcher);
            let result = match tokio::task::spawn_blocking(move || fetcher.fetch()).await {
                Ok(result) => result,
                Err(e) => {
                    warn!(error = %e, "snapshot fetch task failed");
                    continue;
                }
            };

            let snapshot = match result {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    warn!(error = %e, "snapshot poll failed");
                    continue;
                }
            };

            match sender.offer(snapshot) {
                Offer::Delivered => debug!("snapshot handed to dashboard"),
                Offer::Dropped => debug!("dashboard busy, dropping snapshot"),
                Offer::Closed => {
                    debug!("dashboard gone, stopping poller");
                    break;
                }
            }
        }
    })
}
