//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET|POST /new`      - Register a URL (public)
//! - `GET      /p/{code}` - Stream the target of a short code (public)
//! - `GET      /health`   - Storage health check (public)
//! - anything else        - 404 `text/plain`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling, applied in [`crate::server`]

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::public_routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}
