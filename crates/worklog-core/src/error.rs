//! Error types for Worklog.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorklogError {
    #[error("Feed fetch failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
