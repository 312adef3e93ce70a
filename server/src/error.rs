//! Mapping from storage errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use todo_store::StoreError;
use tracing::warn;

/// Body of delete acknowledgements and of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusMessage {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusMessage {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: "failed".to_string(),
            message: Some(message.into()),
        }
    }
}

/// Handler error. Wraps a `StoreError` and renders it as JSON.
#[derive(Debug)]
pub struct ApiError(pub StoreError);

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self.0 {
            StoreError::InvalidArgument(_) => StatusCode::NOT_ACCEPTABLE,
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self.0 {
            StoreError::InvalidArgument(msg) => {
                warn!(reason = %msg, "rejected request");
                StatusMessage::failed(msg.as_str())
            }
            StoreError::NotFound(id) => {
                warn!(id, "todo not found");
                StatusMessage::failed("data not found")
            }
            // Logged by the store; the driver detail stays server-side.
            StoreError::Storage(_) => StatusMessage::failed("internal server error"),
        };
        (status, Json(body)).into_response()
    }
}
