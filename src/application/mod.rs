//! Application layer services.
//!
//! Services consume repository traits and the upstream HTTP client and
//! provide a small API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Code registration and resolution
//! - [`services::proxy_service::ProxyService`] - Upstream fetch with range forwarding

pub mod services;
