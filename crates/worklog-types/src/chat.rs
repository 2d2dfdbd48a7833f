//! Chat relay types.
//!
//! The relay is a stateless forwarder: one user message goes out as a JSON
//! POST, one reply (or a synthetic error reply) comes back. No threading,
//! no retries.

use serde::{Deserialize, Serialize};

/// Payload forwarded to the remote relay endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayRequest {
    /// Message text.
    pub message: String,
    /// Client timestamp (ms since Unix epoch).
    pub timestamp: u64,
    /// Who is sending.
    pub sender: String,
}

/// Reply surfaced to the UI after a relay attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// Unique reply identifier.
    pub id: String,
    /// Always "bot" for relay replies, including synthetic error ones.
    pub sender: String,
    /// Reply text (relay body, or a fallback error message).
    pub message: String,
    /// Reply timestamp (ms since Unix epoch).
    pub timestamp: u64,
    /// Set when the relay failed; the UI shows this as a toast.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl ChatReply {
    /// A successful bot reply.
    pub fn bot(message: String) -> Self {
        Self {
            id: format!("bot-{}", uuid::Uuid::new_v4()),
            sender: "bot".to_string(),
            message,
            timestamp: now_ms(),
            notice: None,
        }
    }

    /// A synthetic bot-authored reply for a failed relay attempt.
    pub fn relay_error(notice: String) -> Self {
        Self {
            id: format!("bot-{}", uuid::Uuid::new_v4()),
            sender: "bot".to_string(),
            message: "Sorry, I couldn't reach the assistant. Please try again.".to_string(),
            timestamp: now_ms(),
            notice: Some(notice),
        }
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
