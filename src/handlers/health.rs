use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. Database failures are reported in the body; the endpoint
/// itself always answers 200 so that probes see a live process.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.health_check().await {
        Ok(()) => Json(json!({
            "status": "healthy",
            "message": "API is running",
            "database": "connected"
        })),
        Err(e) => Json(json!({
            "status": "unhealthy",
            "message": "API is running",
            "database": "disconnected",
            "error": e.to_string()
        })),
    }
}
