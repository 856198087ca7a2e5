use crate::handlers::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

/// Health check endpoint
/// Returns 200 OK if the service is running
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "kasha-site",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// Readiness check endpoint
/// The catalog is loaded before the listener binds, so readiness only
/// reports what is available.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "service": "kasha-site",
            "eventTypes": state.estimator.catalog().event_types.len(),
            "aiEnabled": state.assistant.is_enabled(),
        })),
    )
}
