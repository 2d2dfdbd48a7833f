//! Worklog server library - HTTP server over the feed ingestion engine.
//!
//! Routes, state, config, and the refresh task live here rather than in
//! main.rs to enable integration testing.

pub mod config;
pub mod logging;
pub mod refresher;
pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use state::AppState;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the full application router.
pub fn router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/view", get(routes::views::view))
        .route("/snapshot", get(routes::views::snapshot))
        .route("/history", get(routes::views::history))
        .route("/refresh", post(routes::views::refresh))
        .route("/chat", post(routes::chat::relay))
        .route("/health", get(routes::health));

    Router::new()
        .nest("/api", api_routes)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
