//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, ProxyService};
use crate::config::CodeSettings;
use crate::domain::repositories::LinkRepository;
use crate::utils::public_origin::PublicOrigin;

/// Handles shared by all requests.
///
/// Cloning is cheap; the services sit behind `Arc`s and hold no
/// request-scoped state.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub proxy_service: Arc<ProxyService>,
    pub public_origin: PublicOrigin,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        code_settings: CodeSettings,
        proxy_service: ProxyService,
        public_origin: PublicOrigin,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository, code_settings)),
            proxy_service: Arc::new(proxy_service),
            public_origin,
        }
    }
}
