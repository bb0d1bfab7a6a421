//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod health;
pub mod new_link;
pub mod proxy;

pub use fallback::not_found_handler;
pub use health::health_handler;
pub use new_link::new_link_handler;
pub use proxy::{proxy_handler, proxy_preflight_handler};
