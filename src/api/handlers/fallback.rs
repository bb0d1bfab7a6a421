//! Fallback for unmatched routes.

use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Answers every unknown path with a plain-text 404.
pub async fn not_found_handler() -> Response {
    AppError::NotFound.into_response()
}
