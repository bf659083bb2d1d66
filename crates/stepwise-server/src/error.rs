use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use stepwise_core::api::ErrorResponse;
use stepwise_core::errors::CompletionError;
use stepwise_store::StoreError;

/// Errors surfaced by the HTTP handlers. Every variant renders the uniform
/// `{ "error": string }` envelope.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Upstream(String),
    Internal(String),
}

impl From<CompletionError> for ApiError {
    fn from(e: CompletionError) -> Self {
        ApiError::Upstream(e.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Upstream(msg) => {
                tracing::error!(error = %msg, "completion API call failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
