use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::services::get_metrics;
use crate::startup::AppState;

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to the Teachers API" }))
}

/// Liveness probe. Answers even when storage is down.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    // Whether a store was attached at startup, not whether it answers now.
    let database = if state.directory.is_available() {
        "configured"
    } else {
        "not_configured"
    };

    Json(json!({
        "status": "ok",
        "service": "teacher-service",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database
    }))
}

/// Readiness probe. Fails while the database does not answer a ping.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.directory.check_health().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ready" }))),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable", "error": e.to_string() })),
        ),
    }
}

pub async fn metrics() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
