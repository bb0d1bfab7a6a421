//! Handler for link registration endpoint.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, header},
    response::IntoResponse,
};
use validator::Validate;

use crate::api::dto::new_link::NewLinkParams;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a target URL and returns its short URL.
///
/// # Endpoint
///
/// `GET /new?url=<target>` (also accepted as `POST`)
///
/// # Response
///
/// `200 OK` with a `text/plain` body such as `https://host/p/abc123`.
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing, not `http(s)://`, or the
/// request has no usable host. Returns 5xx if storage fails or no free code
/// could be drawn.
pub async fn new_link_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<NewLinkParams>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;

    // Resolve the origin before writing, so a bad request leaves no record behind.
    let origin = state.public_origin.resolve(&headers)?;

    let target_url = params.url.unwrap_or_default();
    let link = state.link_service.register(&target_url).await?;

    let short_url = state.link_service.short_url(&origin, &link.code);

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        short_url,
    ))
}
