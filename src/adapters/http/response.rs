//! JSON envelopes and error mapping shared by the forum endpoints.
//!
//! Successful responses use `{ "status": "success", "data": … }`. Client
//! errors use `{ "status": "fail", "message": … }` and server errors use
//! `{ "status": "error", "message": … }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::ForumError;

const INTERNAL_ERROR_MESSAGE: &str = "an internal server error occurred";

// ════════════════════════════════════════════════════════════════════════════
// Envelopes
// ════════════════════════════════════════════════════════════════════════════

/// Successful response body.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn with_data(data: T) -> Self {
        Self {
            status: "success",
            data: Some(data),
        }
    }
}

impl SuccessResponse<()> {
    pub fn empty() -> Self {
        Self {
            status: "success",
            data: None,
        }
    }
}

/// Failed response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl ErrorResponse {
    /// Client error (4xx).
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: "fail",
            message: message.into(),
        }
    }

    /// Server error (5xx).
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}

/// Builds a `{ status: "fail" }` response with the given status code.
pub fn fail_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::fail(message))).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════

/// How use-case errors are rendered.
///
/// With `verbose` set, server errors carry the underlying message instead of
/// the generic one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorPolicy {
    pub verbose: bool,
}

impl ErrorPolicy {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Maps a use-case error to an HTTP response.
    pub fn respond(&self, error: ForumError) -> Response {
        let status = status_for(&error);
        if status.is_server_error() {
            tracing::error!(code = %error.code(), "request failed: {}", error);
            let message = if self.verbose {
                error.message()
            } else {
                INTERNAL_ERROR_MESSAGE.to_string()
            };
            return (status, Json(ErrorResponse::error(message))).into_response();
        }

        fail_response(status, error.message())
    }
}

/// Status code for a use-case error.
pub fn status_for(error: &ForumError) -> StatusCode {
    match error {
        ForumError::Validation(_) => StatusCode::BAD_REQUEST,
        ForumError::NotFound { .. } => StatusCode::NOT_FOUND,
        ForumError::Forbidden(_) => StatusCode::FORBIDDEN,
        ForumError::NotImplemented(_) | ForumError::Infrastructure(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
