//! Title resolution endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use vidlist_core::{extract, models::TitleRequest, Platform};

use crate::http::{AppResult, AppState};

/// Title resolution response body
#[derive(Debug, Serialize)]
pub struct TitleResponse {
    pub title: String,
}

/// Resolve a video title from a URL and platform tag.
///
/// The platform tag travels as a string and is validated here, so an
/// unknown platform maps to the generic 400 instead of a framework 422.
pub async fn get_video_title(
    State(state): State<AppState>,
    Json(request): Json<TitleRequest>,
) -> AppResult<Json<TitleResponse>> {
    tracing::info!("Title request: platform={} url={}", request.platform, request.url);

    let platform = Platform::parse(&request.platform)?;
    let video_id = extract::extract_video_id(&request.url, platform)?;

    tracing::debug!("Extracted video id: {video_id}");

    let title = state.resolver.resolve(platform, &video_id).await?;

    Ok(Json(TitleResponse { title }))
}
