use axum::{response::IntoResponse, Json};
use serde_json::json;

pub async fn read_root() -> impl IntoResponse {
    Json(json!({ "message": "Hello from Finance Tracker API!" }))
}
