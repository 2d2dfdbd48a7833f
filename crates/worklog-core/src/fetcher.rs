//! Feed retrieval.

use crate::{parser, Result};
use worklog_types::WorkItem;

/// Fetches the delimited feed from its fixed URL and parses it into a
/// snapshot. One fetch, one snapshot; retry policy lives with the caller's
/// timer (each tick is an independent attempt, no backoff).
pub struct FeedFetcher {
    http: reqwest::Client,
    url: String,
}

impl FeedFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Fetch the feed and parse it into a fresh snapshot.
    ///
    /// A transport error or non-2xx status fails the whole attempt; no
    /// partial snapshot is ever produced.
    pub async fn fetch_snapshot(&self) -> Result<Vec<WorkItem>> {
        let body = self
            .http
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let snapshot = parser::parse_feed(&body);
        tracing::debug!(
            target: "worklog::feed",
            "Fetched feed: {} byte(s), {} record(s)",
            body.len(),
            snapshot.len()
        );
        Ok(snapshot)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
