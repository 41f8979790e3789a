//! HTTP-facing error type.
//!
//! Route handlers return `Result<T, AppError>`. Server-side failures are
//! logged before responding.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Referenced catalog item or resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed client input
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Template rendering failed
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Render(_) => {
                tracing::error!(error = %self, "Request error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
