//! Typed error handling for the service
//!
//! Every failure a guard chain or terminal handler can report falls into
//! one of three categories:
//!
//! - [`ApiError::Validation`]: a request field is missing or malformed (400)
//! - [`ApiError::NotFound`]: a referenced id is absent from its store (404)
//! - [`ApiError::StateConflict`]: the operation is disallowed by the
//!   resource's current state (400)
//!
//! `ApiError` implements [`IntoResponse`], so handlers return
//! `Result<_, ApiError>` and axum renders the `{"error": message}` body
//! with the matching status code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The error type shared by all guards and handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A request field failed a validation predicate
    Validation { message: String },

    /// A referenced id does not exist in its resource store
    NotFound { resource: &'static str, id: String },

    /// The resource's current state forbids the operation
    StateConflict { message: String },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        ApiError::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn state_conflict(message: impl Into<String>) -> Self {
        ApiError::StateConflict {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::StateConflict { .. } => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::StateConflict { .. } => "STATE_CONFLICT",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation { message } => write!(f, "{}", message),
            ApiError::NotFound { resource, id } => {
                write!(f, "{} id does not exist: {}", resource, id)
            }
            ApiError::StateConflict { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Error response body: `{"error": message}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// A specialized Result type for handler and guard outcomes
pub type ApiResult<T> = Result<T, ApiError>;
