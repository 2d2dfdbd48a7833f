//! Ingestion and reconciliation engine for the Worklog feed.
//!
//! Parses the delimited feed into typed records, merges them into a
//! deduplicated persisted history, and derives the display views.

mod dates;
mod error;
mod fetcher;
mod history;
mod kv;
mod parser;
mod stats;
mod view;

pub use dates::{current_month_key, format_mmddyy, month_key, parse_mmddyy, today_mmddyy};
pub use error::WorklogError;
pub use fetcher::FeedFetcher;
pub use history::{HistoryStore, HISTORY_KEY};
pub use kv::KvStore;
pub use parser::{parse_feed, parse_line};
pub use stats::{person_slice, status_counts, summarize};
pub use view::{select, PENDING_DISPLAY_CAP};

/// Result type for Worklog operations.
pub type Result<T> = std::result::Result<T, WorklogError>;
