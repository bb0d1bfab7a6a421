//! Link registration and resolution service.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::config::CodeSettings;
use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_code_shaped};
use crate::utils::target_url::is_http_url;

/// Service for registering target URLs under random codes and resolving them.
///
/// All state lives in the injected [`LinkRepository`]; the service itself
/// holds nothing mutable and is shared across requests.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    settings: CodeSettings,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn LinkRepository>, settings: CodeSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Registers `target_url` under a freshly generated code.
    ///
    /// # Code Generation
    ///
    /// Draws a code and writes it with [`LinkRepository::insert_if_absent`].
    /// A taken code triggers a new draw, up to `max_attempts` draws in total.
    /// An existing record is never overwritten.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidInput`] if the URL is empty or not `http(s)://`; nothing is written
    /// - [`AppError::CodeSpaceExhausted`] if every draw collided
    /// - [`AppError::Storage`] on backend failures
    pub async fn register(&self, target_url: &str) -> Result<Link, AppError> {
        if target_url.is_empty() {
            return Err(AppError::InvalidInput("Missing url parameter".to_string()));
        }

        if !is_http_url(target_url) {
            return Err(AppError::InvalidInput(
                "URL must start with http:// or https://".to_string(),
            ));
        }

        let attempts = self.settings.max_attempts;

        for attempt in 1..=attempts {
            let link = Link::new(
                generate_code(self.settings.length),
                target_url.to_string(),
                Utc::now(),
            );

            if self.repository.insert_if_absent(&link).await? {
                info!(code = %link.code, target = %link.target_url, "Link registered");
                return Ok(link);
            }

            debug!(code = %link.code, attempt, "Code collision, drawing again");
        }

        warn!(attempts, "Code space exhausted");
        Err(AppError::CodeSpaceExhausted { attempts })
    }

    /// Returns the link stored under `code`.
    ///
    /// Codes containing symbols outside the alphabet are reported as missing
    /// without a storage round trip.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    /// Returns [`AppError::Storage`] on backend failures.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        if !is_code_shaped(code) {
            return Err(AppError::NotFound);
        }

        self.repository
            .find_by_code(code)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Returns the target URL stored under `code`.
    ///
    /// Read-only; repeated calls return the same URL.
    ///
    /// # Errors
    ///
    /// See [`Self::get_link`].
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        self.get_link(code).await.map(|link| link.target_url)
    }

    /// Constructs the short URL served by the proxy route.
    pub fn short_url(&self, origin: &str, code: &str) -> String {
        format!("{}/p/{}", origin.trim_end_matches('/'), code)
    }

    /// Number of stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend failures.
    pub async fn count(&self) -> Result<u64, AppError> {
        self.repository.count().await
    }

    /// Checks storage connectivity.
    pub async fn storage_healthy(&self) -> bool {
        self.repository.health_check().await
    }

    /// Name of the storage backend in use.
    pub fn storage_backend(&self) -> &'static str {
        self.repository.backend()
    }
}
