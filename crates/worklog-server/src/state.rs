//! Shared application state.

use crate::config::Config;
use std::sync::{Arc, RwLock};
use worklog_core::{FeedFetcher, HistoryStore, KvStore};
use worklog_types::WorkItem;

/// Shared application state.
///
/// The snapshot is the most recent successful feed fetch, replaced
/// wholesale on every refresh; history accumulates across fetches behind
/// the dedup key.
pub struct AppState {
    pub config: Config,
    pub fetcher: FeedFetcher,
    pub history: Arc<HistoryStore>,
    pub relay: reqwest::Client,
    snapshot: RwLock<Vec<WorkItem>>,
}

impl AppState {
    pub fn new(config: Config) -> worklog_core::Result<Self> {
        let kv = Arc::new(KvStore::open(&config.db_path)?);
        let history = Arc::new(HistoryStore::open(kv, config.reset_on_start)?);
        let fetcher = FeedFetcher::new(config.feed_url.clone());

        Ok(Self {
            config,
            fetcher,
            history,
            relay: reqwest::Client::new(),
            snapshot: RwLock::new(Vec::new()),
        })
    }

    /// One full refresh cycle: fetch, merge into history, replace the
    /// snapshot. On fetch failure nothing changes; the previous snapshot
    /// and history stay as they were.
    ///
    /// Returns `(fetched, appended)` counts.
    pub async fn refresh(&self) -> worklog_core::Result<(usize, usize)> {
        let snapshot = self.fetcher.fetch_snapshot().await?;
        let fetched = snapshot.len();
        let appended = self.history.merge(&snapshot)?;
        *self.snapshot.write().unwrap() = snapshot;
        Ok((fetched, appended))
    }

    /// A copy of the current snapshot.
    pub fn snapshot(&self) -> Vec<WorkItem> {
        self.snapshot.read().unwrap().clone()
    }

    /// Replace the snapshot directly (tests and diagnostics).
    pub fn set_snapshot(&self, items: Vec<WorkItem>) {
        *self.snapshot.write().unwrap() = items;
    }
}
