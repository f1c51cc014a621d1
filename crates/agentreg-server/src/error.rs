//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It
//! implements `axum::response::IntoResponse` and always renders the body as
//! `{"detail": <message>}`.

use std::any::Any;

use agentreg_storage::StorageError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Message returned for failures whose cause must not leak to clients.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Body of every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    pub detail: String,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required field was missing or empty (400).
    #[error("{0}")]
    BadRequest(String),

    /// The JSON body could not be decoded. Keeps the extractor's status.
    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },

    /// SQLite reported an error (500). The message is passed through.
    #[error(transparent)]
    Storage(StorageError),

    /// The database never opened; the server is running degraded (500).
    #[error("{0}")]
    Unavailable(String),

    /// Anything unexpected (500). Carries no detail.
    #[error("{}", INTERNAL_ERROR_MESSAGE)]
    Internal,
}

impl ApiError {
    /// Logs a storage failure under `context` and wraps it.
    pub fn storage(context: &str, err: StorageError) -> Self {
        tracing::error!(error = %err, "{}", context);
        ApiError::Storage(err)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody { status, .. } => *status,
            ApiError::Storage(_) | ApiError::Unavailable(_) | ApiError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiErrorDetail {
            detail: self.to_string(),
        };
        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Response for a handler panic caught by `CatchPanicLayer`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let reason = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(reason = %reason, "unhandled exception");
    ApiError::Internal.into_response()
}
