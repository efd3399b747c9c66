//! HTTP error mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::usecase::{
    ClearMessagesError, DeleteOwnMessagesError, ListMessagesError, PostMessageError,
};

/// Caller-visible request failures.
///
/// Authentication failures are 401 and never retried automatically;
/// validation failures are 400 and require a corrected resubmit; store
/// failures are 500. Cache and channel-delivery failures never reach this
/// type, they degrade inside the use case layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication required")]
    AuthenticationRequired,

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<PostMessageError> for ApiError {
    fn from(e: PostMessageError) -> Self {
        match e {
            PostMessageError::Validation(e) => ApiError::InvalidPayload(e.to_string()),
            PostMessageError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ListMessagesError> for ApiError {
    fn from(e: ListMessagesError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<ClearMessagesError> for ApiError {
    fn from(e: ClearMessagesError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<DeleteOwnMessagesError> for ApiError {
    fn from(e: DeleteOwnMessagesError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
