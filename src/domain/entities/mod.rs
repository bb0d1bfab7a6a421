//! Core domain entities.
//!
//! - [`Link`] - A code → target URL mapping
//! - [`LinkRecord`] - The persisted `{ url, created }` value of a link

pub mod link;

pub use link::{LINK_NAMESPACE, Link, LinkRecord};
