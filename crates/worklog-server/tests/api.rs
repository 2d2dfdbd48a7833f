//! API integration tests over the full router.
//!
//! These run against real state backed by a temp database; the feed and
//! relay URLs point at an unroutable port so nothing leaves the process.

use axum::http::StatusCode;
use axum_test::TestServer;
use std::sync::Arc;
use worklog_server::{config::Config, state::AppState};
use worklog_types::{WorkItem, WorkStatus};

fn test_state(dir: &tempfile::TempDir) -> Arc<AppState> {
    let config = Config {
        db_path: dir.path().join("worklog.db"),
        feed_url: "http://127.0.0.1:9/feed.csv".to_string(),
        relay_url: "http://127.0.0.1:9/chat".to_string(),
        reset_on_start: false,
        ..Config::default()
    };
    Arc::new(AppState::new(config).expect("state"))
}

fn test_server(state: Arc<AppState>) -> TestServer {
    TestServer::new(worklog_server::router(state)).expect("test server")
}

fn item(date: &str, name: &str, work: &str, status: WorkStatus) -> WorkItem {
    WorkItem {
        date: date.to_string(),
        employee_name: name.to_string(),
        work: work.to_string(),
        status,
        observed_at: chrono::Utc::now(),
    }
}

#[tokio::test]
async fn test_health() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(test_state(&dir));

    let response = server.get("/api/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_pending_view_is_capped_with_stats() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir);

    let mut history = Vec::new();
    for i in 0..60 {
        history.push(item(
            "01-15-24",
            "Abdullah",
            &format!("job {}", i),
            WorkStatus::Pending,
        ));
    }
    history.push(item("01-15-24", "Abdullah", "done job", WorkStatus::Finished));
    state.history.merge(&history).unwrap();

    let server = test_server(state);
    let response = server.get("/api/view").add_query_param("mode", "pending").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["items"].as_array().unwrap().len(), 50);
    assert_eq!(body["stats"]["counts"]["pending"], 50);
    assert_eq!(body["stats"]["counts"]["total"], 50);

    // Completed counts follow full history, not the pending display set.
    let people = body["stats"]["people"].as_array().unwrap();
    assert_eq!(people[0]["name"], "Abdullah");
    assert_eq!(people[0]["completed"], 1);
}

#[tokio::test]
async fn test_unknown_mode_falls_back_to_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir);

    state.set_snapshot(vec![item("01-15-24", "Hamza", "Oil change", WorkStatus::Working)]);
    state
        .history
        .merge(&[
            item("01-15-24", "Abdullah", "Fix pump", WorkStatus::Pending),
            item("01-16-24", "Zain", "Inspect belt", WorkStatus::Pending),
        ])
        .unwrap();

    let server = test_server(state);
    let response = server.get("/api/view").add_query_param("mode", "calendar").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert!(body.get("mode").is_none() || body["mode"].is_null());
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["employeeName"], "Hamza");
}

#[tokio::test]
async fn test_monthly_view_narrowed_to_day() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir);

    state
        .history
        .merge(&[
            item("01-15-24", "Abdullah", "Fix pump", WorkStatus::Finished),
            item("01-20-24", "Hamza", "Oil change", WorkStatus::Pending),
            item("02-01-24", "Zain", "Inspect belt", WorkStatus::Working),
        ])
        .unwrap();

    let server = test_server(state);
    let response = server
        .get("/api/view")
        .add_query_param("mode", "monthly")
        .add_query_param("month", "2024-01")
        .add_query_param("day", "01-15-24")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["date"], "01-15-24");
}

#[tokio::test]
async fn test_history_endpoint_reports_total() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir);

    state
        .history
        .merge(&[
            item("01-15-24", "Abdullah", "Fix pump", WorkStatus::Pending),
            item("01-15-24", "Abdullah", "Fix pump", WorkStatus::Finished),
        ])
        .unwrap();

    let server = test_server(state);
    let response = server.get("/api/history").await;
    let body: serde_json::Value = response.json();

    // The second item was a status-only change, dropped by the dedup key.
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_refresh_fails_without_touching_state() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir);

    state.set_snapshot(vec![item("01-15-24", "Hamza", "Oil change", WorkStatus::Working)]);

    let server = test_server(state.clone());
    let response = server.post("/api/refresh").await;
    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);

    // Prior snapshot survives the failed cycle.
    assert_eq!(state.snapshot().len(), 1);
}
