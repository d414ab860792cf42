use axum::Json;
use axum::response::IntoResponse;
use serde_json::json;

/// Unauthenticated liveness probe.
pub async fn health() -> axum::response::Response {
    Json(json!({ "status": "ok" })).into_response()
}
