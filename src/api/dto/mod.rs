//! Data Transfer Objects for requests and responses.
//!
//! Query DTOs are validated with `validator`; JSON responses use Serde.

pub mod health;
pub mod new_link;
