//! Application error type and its HTTP translation.
//!
//! Every error is terminal for the current request and renders as a
//! `text/plain` body with a matching status code.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

/// Errors produced while registering, resolving, or proxying a link.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing client input.
    #[error("{0}")]
    InvalidInput(String),

    /// A stored target no longer passes the `http(s)://` check.
    #[error("invalid target")]
    InvalidTarget,

    /// No link exists for the requested code.
    #[error("not found")]
    NotFound,

    /// The upstream could not be reached (connect, TLS, timeout, redirect loop).
    #[error("upstream fetch failed: {0}")]
    UpstreamFailure(String),

    /// The upstream answered with a non-2xx status.
    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),

    /// Every generated code collided with an existing record.
    #[error("could not allocate a unique code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: usize },

    /// The persistence layer is unavailable or returned garbage.
    #[error("storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::InvalidTarget => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::UpstreamFailure(_) | Self::UpstreamStatus(_) => StatusCode::BAD_GATEWAY,
            Self::CodeSpaceExhausted { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client.
    ///
    /// Internal details (driver errors, upstream socket errors) stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::UpstreamFailure(_) => "upstream fetch failed".to_string(),
            Self::CodeSpaceExhausted { .. } => "could not allocate a unique code".to_string(),
            Self::Storage(_) => "storage error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        } else if status == StatusCode::BAD_GATEWAY {
            tracing::warn!("{}", self);
        } else {
            tracing::debug!(status = status.as_u16(), "{}", self);
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.public_message(),
        )
            .into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(ToString::to_string))
            .unwrap_or_else(|| "invalid input".to_string());

        Self::InvalidInput(message)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        Self::Storage(e.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        Self::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::Storage(format!("corrupt record: {e}"))
    }
}
