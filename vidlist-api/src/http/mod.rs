// Module: http
// HTTP/JSON REST API

pub mod error;
pub mod health;
pub mod title;
pub mod videos;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use vidlist_core::{TitleResolver, VideoStore};

pub use error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<VideoStore>,
    pub resolver: Arc<TitleResolver>,
}

/// Create the HTTP router with all routes
pub fn create_router(store: Arc<VideoStore>, resolver: Arc<TitleResolver>) -> Router {
    let state = AppState { store, resolver };

    let router = Router::new()
        // Health check endpoint (for monitoring probes)
        .merge(health::create_health_router())
        // Title resolution
        .route("/get-video-title", post(title::get_video_title))
        // Record listing and appending
        .route("/videos", get(videos::list_videos))
        .route("/videos", post(videos::add_video));

    // Apply layers before state
    let router = router
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Apply state to all routes (must be last)
    router.with_state(state)
}
