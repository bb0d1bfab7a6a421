//! Handlers for the stream proxy route.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use futures_util::TryStreamExt;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Upstream headers relayed as-is when present, besides `Content-Type`.
///
/// Everything else is dropped so upstream values cannot clash with the
/// headers the proxy sets itself.
const RELAYED_HEADERS: [HeaderName; 3] = [
    header::CONTENT_LENGTH,
    header::ACCEPT_RANGES,
    header::CONTENT_RANGE,
];

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Streams the resource behind a short code.
///
/// # Endpoint
///
/// `GET /p/{code}`
///
/// # Request Flow
///
/// 1. Resolve the code (404 if unknown)
/// 2. Re-check the stored target scheme (400 if invalid)
/// 3. GET the target with the client's `Range` header and the proxy user agent,
///    following redirects (502 on network failure)
/// 4. Reject non-2xx upstream answers (502 carrying the upstream status)
/// 5. Relay the upstream status, whitelisted headers, and the body as a stream
///
/// The body is never buffered. If the client disconnects, the body stream is
/// dropped and the upstream connection closes with it.
pub async fn proxy_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let target_url = state.link_service.resolve(&code).await?;

    let range = headers.get(header::RANGE);
    debug!(code = %code, range = ?range, "Proxying");

    let upstream = state.proxy_service.fetch(&target_url, range).await?;

    Ok(relay_response(upstream))
}

/// Answers CORS preflight requests for `/p/{code}`.
///
/// # Endpoint
///
/// `OPTIONS /p/{code}`
pub async fn proxy_preflight_handler() -> Response {
    let mut headers = HeaderMap::new();
    insert_cors_headers(&mut headers);

    (StatusCode::NO_CONTENT, headers).into_response()
}

/// Builds the client response from an upstream response.
///
/// Keeps the upstream status, copies `Content-Type` (defaulting to
/// `application/octet-stream`) and [`RELAYED_HEADERS`], marks the response
/// uncacheable and adds permissive CORS headers. The body is streamed.
pub fn relay_response(upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let mut headers = HeaderMap::new();

    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
    headers.insert(header::CONTENT_TYPE, content_type);

    for name in RELAYED_HEADERS {
        if let Some(value) = upstream.headers().get(&name) {
            headers.insert(name, value.clone());
        }
    }

    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    insert_cors_headers(&mut headers);

    let body = Body::from_stream(upstream.bytes_stream().map_err(std::io::Error::other));

    (status, headers, body).into_response()
}

/// Lets browser media players issue cross-origin range requests.
fn insert_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Range"),
    );
}
