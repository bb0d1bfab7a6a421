//! Link repository implementations and backend selection.
//!
//! - [`PgLinkRepository`] - PostgreSQL via SQLx, schema managed by embedded migrations
//! - [`RedisLinkRepository`] - Redis, one JSON document per key
//! - [`MemoryLinkRepository`] - In-process map for tests and ephemeral runs

pub mod memory_link_repository;
pub mod pg_link_repository;
pub mod redis_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
pub use redis_link_repository::RedisLinkRepository;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, StorageBackend, mask_connection_string};
use crate::domain::repositories::LinkRepository;

/// Opens the process-wide link store selected by `config`.
///
/// The returned handle is shared by every request for the lifetime of the
/// process. PostgreSQL migrations are applied before returning.
///
/// # Errors
///
/// Returns an error if the backend is unreachable or migrations fail.
pub async fn connect_repository(config: &Config) -> Result<Arc<dyn LinkRepository>> {
    match config.storage_backend() {
        StorageBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is not configured")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(url)
                .await
                .with_context(|| {
                    format!("Failed to connect to {}", mask_connection_string(url))
                })?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;

            Ok(Arc::new(PgLinkRepository::new(Arc::new(pool))))
        }
        StorageBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL is not configured")?;

            let repository = RedisLinkRepository::connect(url)
                .await
                .with_context(|| {
                    format!("Failed to connect to {}", mask_connection_string(url))
                })?;

            Ok(Arc::new(repository))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; links will not survive a restart");
            Ok(Arc::new(MemoryLinkRepository::new()))
        }
    }
}
