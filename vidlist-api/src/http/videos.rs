//! Video record listing and appending

use axum::{extract::State, Json};
use serde::Serialize;
use vidlist_core::VideoRecord;

use crate::http::{AppResult, AppState};

/// Append acknowledgement body
#[derive(Debug, Serialize)]
pub struct AddVideoResponse {
    pub message: String,
}

/// List all stored records in insertion order.
pub async fn list_videos(State(state): State<AppState>) -> Json<Vec<VideoRecord>> {
    Json(state.store.list())
}

/// Append a client-supplied record to the in-memory list.
pub async fn add_video(
    State(state): State<AppState>,
    Json(record): Json<VideoRecord>,
) -> AppResult<Json<AddVideoResponse>> {
    tracing::debug!("Adding video record: id={} platform={}", record.id, record.platform);

    let count = state.store.append(record);
    tracing::debug!("Store now holds {count} videos");

    Ok(Json(AddVideoResponse {
        message: "Video added successfully".to_string(),
    }))
}
