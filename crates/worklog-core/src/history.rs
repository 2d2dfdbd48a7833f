//! Cumulative, deduplicated history of observed work items.
//!
//! Every item the feed has ever reported lands here at most once, keyed by
//! `(date, employee_name, work)`. First observation wins: a later record
//! with the same key is dropped even if its status changed. The whole
//! store persists as one JSON-array blob through the KV collaborator.

use crate::{KvStore, Result};
use std::collections::HashSet;
use std::sync::{Arc, RwLock};
use worklog_types::{IdentityKey, WorkItem};

/// Fixed KV key the history blob is stored under.
pub const HISTORY_KEY: &str = "worklog.history";

/// Append-only deduplicating accumulation of work items.
pub struct HistoryStore {
    kv: Arc<KvStore>,
    items: RwLock<Vec<WorkItem>>,
}

impl HistoryStore {
    /// Open the store, loading any persisted history.
    ///
    /// With `reset_on_start` the persisted blob is cleared first and the
    /// store begins empty ("fresh start"). Defaults to on in the server
    /// config.
    pub fn open(kv: Arc<KvStore>, reset_on_start: bool) -> Result<Self> {
        if reset_on_start {
            kv.remove(HISTORY_KEY)?;
            tracing::info!(target: "worklog::history", "Cleared persisted history (reset_on_start)");
        }

        let items: Vec<WorkItem> = match kv.get(HISTORY_KEY)? {
            Some(blob) => serde_json::from_str(&blob)?,
            None => Vec::new(),
        };

        tracing::debug!(target: "worklog::history", "Loaded {} history item(s)", items.len());
        Ok(Self {
            kv,
            items: RwLock::new(items),
        })
    }

    /// Merge a snapshot into history.
    ///
    /// Items whose identity key is already present are skipped; the rest
    /// are appended in snapshot order. Returns the number appended. The
    /// store persists only when something was appended.
    pub fn merge(&self, snapshot: &[WorkItem]) -> Result<usize> {
        let mut items = self.items.write().unwrap();
        let mut seen: HashSet<IdentityKey> = items.iter().map(|i| i.identity_key()).collect();

        let mut appended = 0;
        for item in snapshot {
            if seen.insert(item.identity_key()) {
                items.push(item.clone());
                appended += 1;
            }
        }

        if appended > 0 {
            self.save(&items)?;
            tracing::debug!(
                target: "worklog::history",
                "Merged snapshot: {} new item(s), {} total",
                appended,
                items.len()
            );
        }

        Ok(appended)
    }

    fn save(&self, items: &[WorkItem]) -> Result<()> {
        let blob = serde_json::to_string(items)?;
        self.kv.set(HISTORY_KEY, &blob)
    }

    /// A copy of the full history in insertion order.
    pub fn items(&self) -> Vec<WorkItem> {
        self.items.read().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.items.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().unwrap().is_empty()
    }

    /// Drop all history, in memory and persisted. Idempotent.
    pub fn clear(&self) -> Result<()> {
        self.items.write().unwrap().clear();
        self.kv.remove(HISTORY_KEY)
    }
}
