//! View and history routes.

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use worklog_types::{DateFilter, StatsSummary, ViewMode, WorkItem};

#[derive(Deserialize)]
pub struct ViewQuery {
    #[serde(default)]
    pub mode: Option<String>,
    /// Month key (`YYYY-MM`) for the monthly view; defaults to the
    /// current month.
    #[serde(default)]
    pub month: Option<String>,
    /// Optional day (`MM-DD-YY`) narrowing within the month.
    #[serde(default)]
    pub day: Option<String>,
}

#[derive(Serialize)]
pub struct ViewResponse {
    /// The mode actually applied; absent when the query fell back to the
    /// raw snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ViewMode>,
    pub items: Vec<WorkItem>,
    pub stats: StatsSummary,
}

pub async fn view(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ViewQuery>,
) -> Json<ViewResponse> {
    // An unrecognized mode string degrades to the unfiltered snapshot.
    let mode = query
        .mode
        .as_deref()
        .and_then(|m| m.parse::<ViewMode>().ok());

    let filter = DateFilter {
        month: query
            .month
            .unwrap_or_else(worklog_core::current_month_key),
        day: query.day,
    };

    let snapshot = state.snapshot();
    let history = state.history.items();
    let items = worklog_core::select(mode, &snapshot, &history, &filter);
    let stats = worklog_core::summarize(&items, &history, &state.config.tracked_people);

    tracing::debug!(
        target: "worklog::api",
        "View {:?}: {} item(s)",
        mode,
        items.len()
    );

    Json(ViewResponse { mode, items, stats })
}

#[derive(Serialize)]
pub struct SnapshotResponse {
    pub items: Vec<WorkItem>,
}

pub async fn snapshot(State(state): State<Arc<AppState>>) -> Json<SnapshotResponse> {
    Json(SnapshotResponse {
        items: state.snapshot(),
    })
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub total: usize,
    pub items: Vec<WorkItem>,
}

pub async fn history(State(state): State<Arc<AppState>>) -> Json<HistoryResponse> {
    let items = state.history.items();
    Json(HistoryResponse {
        total: items.len(),
        items,
    })
}

#[derive(Serialize)]
pub struct RefreshResponse {
    pub fetched: usize,
    pub appended: usize,
}

/// User-triggered refresh. May overlap a timer tick; that is safe because
/// merges are idempotent and snapshots replace wholesale.
pub async fn refresh(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RefreshResponse>, (StatusCode, String)> {
    match state.refresh().await {
        Ok((fetched, appended)) => Ok(Json(RefreshResponse { fetched, appended })),
        Err(e) => {
            tracing::warn!(target: "worklog::feed", "Manual refresh failed: {}", e);
            Err((StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}
