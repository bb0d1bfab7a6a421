//! Business logic services for the application layer.

pub mod link_service;
pub mod proxy_service;

pub use link_service::LinkService;
pub use proxy_service::ProxyService;
