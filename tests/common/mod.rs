#![allow(dead_code)]

use axum::http::{HeaderName, HeaderValue, header};
use axum_test::TestServer;
use chrono::Utc;
use std::sync::Arc;
use url_proxy::application::services::ProxyService;
use url_proxy::config::{CodeSettings, UpstreamSettings};
use url_proxy::domain::entities::Link;
use url_proxy::domain::repositories::LinkRepository;
use url_proxy::infrastructure::persistence::MemoryLinkRepository;
use url_proxy::routes::app_router;
use url_proxy::state::AppState;
use url_proxy::utils::public_origin::PublicOrigin;

pub const TEST_USER_AGENT: &str = "url-proxy-tests/1.0";
pub const TEST_HOST: &str = "sho.rt";

pub fn host_header() -> (HeaderName, HeaderValue) {
    (header::HOST, HeaderValue::from_static(TEST_HOST))
}

pub fn upstream_settings() -> UpstreamSettings {
    UpstreamSettings {
        user_agent: TEST_USER_AGENT.to_string(),
        ..UpstreamSettings::default()
    }
}

pub fn create_test_state(
    repository: Arc<dyn LinkRepository>,
    origin: PublicOrigin,
) -> AppState {
    create_test_state_with_upstream(repository, origin, upstream_settings())
}

pub fn create_test_state_with_upstream(
    repository: Arc<dyn LinkRepository>,
    origin: PublicOrigin,
    upstream: UpstreamSettings,
) -> AppState {
    let proxy_service = ProxyService::new(&upstream).unwrap();

    AppState::new(repository, CodeSettings::default(), proxy_service, origin)
}

/// Full router over an in-memory store, plus a handle on that store.
pub struct TestApp {
    pub server: TestServer,
    pub repository: Arc<MemoryLinkRepository>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_origin(PublicOrigin::default())
    }

    pub fn with_origin(origin: PublicOrigin) -> Self {
        Self::build(origin, upstream_settings())
    }

    pub fn with_upstream(upstream: UpstreamSettings) -> Self {
        Self::build(PublicOrigin::default(), upstream)
    }

    fn build(origin: PublicOrigin, upstream: UpstreamSettings) -> Self {
        let repository = Arc::new(MemoryLinkRepository::new());
        let state = create_test_state_with_upstream(repository.clone(), origin, upstream);
        let server = TestServer::new(app_router(state)).unwrap();

        Self { server, repository }
    }

    pub async fn seed_link(&self, code: &str, url: &str) {
        let link = Link::new(code.to_string(), url.to_string(), Utc::now());
        assert!(self.repository.insert_if_absent(&link).await.unwrap());
    }

    pub async fn link_count(&self) -> u64 {
        self.repository.count().await.unwrap()
    }
}
