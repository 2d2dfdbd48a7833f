//! Chat relay route.
//!
//! Stateless forwarder to the configured relay endpoint. One attempt per
//! send; any transport failure or non-2xx status becomes a synthetic
//! bot-authored reply with a `notice` for the UI, never an error status.

use crate::state::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;
use worklog_types::{ChatReply, RelayRequest};

pub async fn relay(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RelayRequest>,
) -> Json<ChatReply> {
    let attempt = state
        .relay
        .post(&state.config.relay_url)
        .json(&req)
        .send()
        .await;

    let reply = match attempt {
        Ok(resp) if resp.status().is_success() => {
            let body = resp.text().await.unwrap_or_default();
            ChatReply::bot(body)
        }
        Ok(resp) => {
            tracing::warn!(
                target: "worklog::chat",
                "Relay returned status {}",
                resp.status()
            );
            ChatReply::relay_error(format!("Relay returned status {}", resp.status()))
        }
        Err(e) => {
            tracing::warn!(target: "worklog::chat", "Relay request failed: {}", e);
            ChatReply::relay_error("Could not reach the chat relay".to_string())
        }
    };

    Json(reply)
}
