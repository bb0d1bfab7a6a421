//! Repository trait for short link storage.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Key-value store of links keyed by code.
///
/// The only write is [`LinkRepository::insert_if_absent`], which must be
/// atomic at the storage layer. Concurrent registrations that draw the same
/// code rely on it: exactly one insert wins, the other sees `false`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::RedisLinkRepository`] - Redis
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process map
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the backend is unreachable or the
    /// stored value cannot be decoded.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Stores `link` unless a record already exists for its code.
    ///
    /// Returns `Ok(true)` when the link was written and `Ok(false)` when the
    /// code was taken. An existing record is never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend failures.
    async fn insert_if_absent(&self, link: &Link) -> Result<bool, AppError>;

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend failures.
    async fn count(&self) -> Result<u64, AppError>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}
