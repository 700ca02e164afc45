// HTTP error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for HTTP handlers
pub type AppResult<T> = Result<T, AppError>;

/// Application error with HTTP status code
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for AppError {}

/// Error response JSON structure
#[derive(Debug, Serialize, Deserialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            detail: self.message,
        });

        (self.status, body).into_response()
    }
}

/// Convert vidlist_core errors to HTTP errors
impl From<vidlist_core::Error> for AppError {
    fn from(err: vidlist_core::Error) -> Self {
        use vidlist_core::Error;

        match err {
            Error::InvalidUrl(msg) => AppError::bad_request(msg),
            Error::TitleUnavailable(msg) => AppError::bad_request(msg),
            Error::FetchFailed(msg) => AppError::bad_request(msg),
            Error::CouldNotExtractTitle => {
                AppError::bad_request(Error::CouldNotExtractTitle.to_string())
            }
            Error::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                AppError::internal_server_error(msg)
            }
        }
    }
}
