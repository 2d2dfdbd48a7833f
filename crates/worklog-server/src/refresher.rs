//! Recurring feed refresh task.
//!
//! One owned background task drives the fetch cycle: the first tick fires
//! immediately (the startup fetch), then every `refresh_secs`. Each tick
//! runs as its own spawned task so a hung request delays only its own
//! cycle, never the timer. Overlapping cycles are safe: snapshots replace
//! wholesale and history merges are idempotent.

use crate::state::AppState;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Cancellation handle for the refresh task.
pub struct RefresherHandle {
    stop_tx: mpsc::Sender<()>,
}

impl RefresherHandle {
    /// Stop the refresh loop. In-flight fetches finish on their own.
    pub async fn stop(&self) {
        let _ = self.stop_tx.send(()).await;
    }
}

/// Spawn the recurring refresh task.
pub fn spawn(state: Arc<AppState>) -> RefresherHandle {
    let (stop_tx, mut stop_rx) = mpsc::channel::<()>(1);
    let interval = Duration::from_secs(state.config.refresh_secs.max(1));

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let state = state.clone();
                    tokio::spawn(async move {
                        refresh_once(&state).await;
                    });
                }
                _ = stop_rx.recv() => {
                    debug!(target: "worklog::feed", "Stopping feed refresher");
                    break;
                }
            }
        }
    });

    RefresherHandle { stop_tx }
}

/// Run one refresh cycle, logging the outcome. Failures abandon the cycle
/// and keep the last good state; the next tick retries on its own.
pub async fn refresh_once(state: &AppState) {
    match state.refresh().await {
        Ok((fetched, appended)) => {
            info!(
                target: "worklog::feed",
                "Refreshed feed: {} record(s) in snapshot, {} new in history",
                fetched,
                appended
            );
        }
        Err(e) => {
            warn!(
                target: "worklog::feed",
                "Feed refresh failed, keeping last good state: {}",
                e
            );
        }
    }
}
