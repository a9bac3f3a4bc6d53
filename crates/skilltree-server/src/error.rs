//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It
//! implements `axum::response::IntoResponse` to produce structured JSON error
//! responses with appropriate HTTP status codes. Every user-visible failure
//! flows through this one channel, so clients (and tests) can assert on
//! exactly one notification per failed request.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Structured error detail in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Entity not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let detail = ApiErrorDetail {
            code: code.to_string(),
            message: match &self {
                ApiError::NotFound(msg)
                | ApiError::BadRequest(msg)
                | ApiError::InternalError(msg) => msg.clone(),
            },
        };

        let body = serde_json::json!({
            "success": false,
            "error": detail,
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<skilltree_core::CoreError> for ApiError {
    fn from(err: skilltree_core::CoreError) -> Self {
        use skilltree_core::CoreError;
        match &err {
            CoreError::NodeNotFound { .. } | CoreError::EdgeNotFound { .. } => {
                ApiError::NotFound(err.to_string())
            }
            CoreError::MalformedDocument { .. }
            | CoreError::SelfLoop { .. }
            | CoreError::MissingEndpoint { .. }
            | CoreError::DuplicateNode { .. }
            | CoreError::DuplicateEdge { .. }
            | CoreError::EmptyLabel => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<skilltree_storage::StorageError> for ApiError {
    fn from(err: skilltree_storage::StorageError) -> Self {
        use skilltree_storage::StorageError;
        match &err {
            StorageError::TreeNotFound(_) => ApiError::NotFound(err.to_string()),
            StorageError::InvalidTreeName(_) => ApiError::BadRequest(err.to_string()),
            StorageError::Io(_) | StorageError::Serialization(_) => {
                ApiError::InternalError(err.to_string())
            }
        }
    }
}
