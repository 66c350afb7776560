use crate::dtos::{RecordCreatedResponse, RecordListResponse};
use crate::error::AppError;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use futures::stream::TryStreamExt;
use mongodb::bson;
use mongodb::options::FindOptions;

const MAX_LIST_RECORDS: i64 = 100;

pub async fn create_record(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    let record = bson::to_document(&payload)
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("Expected a JSON object: {}", e)))?;

    let result = state
        .db
        .records()
        .insert_one(record, None)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert test record: {}", e);
            AppError::from(e)
        })?;

    let id = match result.inserted_id.as_object_id() {
        Some(oid) => oid.to_hex(),
        None => result.inserted_id.to_string(),
    };

    tracing::info!(record_id = %id, "Test record created");

    Ok(Json(RecordCreatedResponse {
        message: "Test record created".to_string(),
        id,
    }))
}

pub async fn list_records(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let find_options = FindOptions::builder().limit(MAX_LIST_RECORDS).build();

    let mut cursor = state
        .db
        .records()
        .find(None, find_options)
        .await
        .map_err(|e| {
            tracing::error!("Failed to query test records: {}", e);
            AppError::from(e)
        })?;

    let mut data = Vec::new();
    while let Some(mut record) = cursor.try_next().await.map_err(AppError::from)? {
        // ObjectId is not a flat JSON type; coerce to its hex string for transport.
        if let Ok(id) = record.get_object_id("_id") {
            record.insert("_id", id.to_hex());
        }
        data.push(serde_json::to_value(&record).map_err(|e| {
            AppError::InternalError(anyhow::anyhow!("Failed to serialize record: {}", e))
        })?);
    }

    Ok(Json(RecordListResponse { data }))
}
