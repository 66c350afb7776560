use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordCreatedResponse {
    pub message: String,
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordListResponse {
    pub data: Vec<serde_json::Value>,
}
