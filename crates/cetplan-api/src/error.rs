//! # Application Error
//!
//! Maps domain errors to structured HTTP responses. Store and auth
//! failures arrive already classified; nothing here is fatal, and every
//! response leaves the client in a retryable state.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use cetplan_auth::AuthError;
use cetplan_store::StoreError;

/// Application-level error type that maps to HTTP responses.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// No authenticated session.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// A store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The identity boundary failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Store(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            // The store and identity services are upstream dependencies.
            AppError::Store(_) | AppError::Auth(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = serde_json::json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        });
        (status, axum::Json(body)).into_response()
    }
}
