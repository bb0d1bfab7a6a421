//! Route configuration for the public endpoints.

use crate::api::handlers::{
    health_handler, new_link_handler, proxy_handler, proxy_preflight_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public routes.
///
/// # Endpoints
///
/// - `GET|POST /new`       - Register a target URL, returns the short URL as text
/// - `GET      /p/{code}`  - Stream the target resource
/// - `OPTIONS  /p/{code}`  - CORS preflight for range requests
/// - `GET      /health`    - Storage health check
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/new", get(new_link_handler).post(new_link_handler))
        .route(
            "/p/{code}",
            get(proxy_handler).options(proxy_preflight_handler),
        )
        .route("/health", get(health_handler))
}
