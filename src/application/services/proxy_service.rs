//! Upstream fetch for the stream proxy.

use axum::http::{HeaderValue, header};
use reqwest::{Client, Response, redirect};
use tracing::{debug, warn};

use crate::config::UpstreamSettings;
use crate::error::AppError;
use crate::utils::target_url::is_http_url;

/// Issues the outbound GET for a resolved target.
///
/// Holds one pooled HTTP client for the whole process. The returned
/// [`Response`] still owns the upstream connection; the caller streams its
/// body and dropping it aborts the transfer.
pub struct ProxyService {
    client: Client,
}

impl ProxyService {
    /// Builds the upstream client.
    ///
    /// Every request carries `settings.user_agent`; redirects are followed up
    /// to `settings.max_redirects`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(settings: &UpstreamSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .connect_timeout(settings.connect_timeout)
            .read_timeout(settings.read_timeout)
            .redirect(redirect::Policy::limited(settings.max_redirects))
            .build()?;

        Ok(Self { client })
    }

    /// Fetches `target_url`, forwarding the client's `Range` header verbatim.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidTarget`] if the stored URL is not `http(s)://`
    /// - [`AppError::UpstreamFailure`] if the request could not be completed
    /// - [`AppError::UpstreamStatus`] if the upstream answered outside 2xx
    pub async fn fetch(
        &self,
        target_url: &str,
        range: Option<&HeaderValue>,
    ) -> Result<Response, AppError> {
        // Registration already checks this; records may predate that check.
        if !is_http_url(target_url) {
            return Err(AppError::InvalidTarget);
        }

        let mut request = self.client.get(target_url);
        if let Some(range) = range {
            request = request.header(header::RANGE, range.clone());
        }

        let response = request.send().await.map_err(|e| {
            warn!(target = %target_url, "Upstream request failed: {}", e);
            AppError::UpstreamFailure(e.to_string())
        })?;

        let status = response.status();
        debug!(target = %target_url, status = status.as_u16(), "Upstream responded");

        if !status.is_success() {
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        Ok(response)
    }
}
