//! API error type
//!
//! Every handler returns `Result<_, ApiError>`; the error renders itself as a
//! JSON body of the form `{"detail": "...", "code": "..."}`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Machine-readable error codes sent alongside the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    InvalidInput,
    MethodNotAllowed,
}

/// Failures surfaced to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// No record with this id exists in the collection
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    /// The request body could not be decoded
    #[error("{message}")]
    InvalidInput { status: StatusCode, message: String },

    /// A PUT body carried an id different from the one in the path
    #[error("body id '{body}' does not match path id '{path}'")]
    IdMismatch { path: String, body: String },

    /// No route matches the request path
    #[error("no route for {0}")]
    UnknownRoute(String),

    /// The path exists but does not accept this method
    #[error("method {method} not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },
}

/// Wire shape of an error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    pub code: ErrorCode,
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } | Self::UnknownRoute(_) => StatusCode::NOT_FOUND,
            Self::InvalidInput { status, .. } => *status,
            Self::IdMismatch { .. } => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { .. } | Self::UnknownRoute(_) => ErrorCode::NotFound,
            Self::InvalidInput { .. } | Self::IdMismatch { .. } => ErrorCode::InvalidInput,
            Self::MethodNotAllowed { .. } => ErrorCode::MethodNotAllowed,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        tracing::warn!("JSON parse error: {}", message);
        Self::InvalidInput {
            status: rejection.status(),
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
            code: self.code(),
        };
        (self.status(), Json(body)).into_response()
    }
}
