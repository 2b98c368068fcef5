use axum::{Json, response::IntoResponse};
use serde_json::json;

/// Liveness check
///
/// GET /health
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
