//! Public origin (`scheme://host`) used to build short URLs.

use crate::AppError;
use axum::http::{HeaderMap, header};

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
const X_FORWARDED_HOST: &str = "x-forwarded-host";

/// Resolves the origin a short URL is served from.
///
/// A configured base URL always wins. Otherwise the origin comes from the
/// request: `X-Forwarded-Proto` / `X-Forwarded-Host` when running behind a
/// trusted proxy, then the `Host` header with `http` as scheme.
#[derive(Debug, Clone, Default)]
pub struct PublicOrigin {
    base_url: Option<String>,
    behind_proxy: bool,
}

impl PublicOrigin {
    pub fn new(base_url: Option<String>, behind_proxy: bool) -> Self {
        Self {
            base_url: base_url.map(|url| url.trim_end_matches('/').to_string()),
            behind_proxy,
        }
    }

    /// Returns `scheme://host[:port]` for the current request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if no base URL is configured and the
    /// request carries no usable host.
    pub fn resolve(&self, headers: &HeaderMap) -> Result<String, AppError> {
        if let Some(base_url) = &self.base_url {
            return Ok(base_url.clone());
        }

        let forwarded = |name: &str| {
            self.behind_proxy
                .then(|| first_value(headers, name))
                .flatten()
        };

        let scheme = forwarded(X_FORWARDED_PROTO).unwrap_or("http");

        let host = match forwarded(X_FORWARDED_HOST) {
            Some(host) => host,
            None => headers
                .get(header::HOST)
                .ok_or_else(|| AppError::InvalidInput("Missing Host header".to_string()))?
                .to_str()
                .map_err(|_| AppError::InvalidInput("Invalid Host header".to_string()))?
                .trim(),
        };

        if host.is_empty() {
            return Err(AppError::InvalidInput("Missing Host header".to_string()));
        }

        Ok(format!("{scheme}://{host}"))
    }
}

/// First entry of a possibly comma-separated header, as appended by proxy chains.
fn first_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)?
        .to_str()
        .ok()?
        .split(',')
        .next()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
