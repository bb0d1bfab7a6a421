//! Repository trait definitions for the domain layer.
//!
//! The store is injected into services as a trait object, so the process can
//! run against PostgreSQL, Redis, or an in-memory map without the services
//! knowing which.
//!
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
