//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{LINK_NAMESPACE, Link, LinkRecord};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage and retrieval.
///
/// Links live in the `links` table under the `proxy` namespace. The
/// `(namespace, code)` primary key makes `ON CONFLICT DO NOTHING` the atomic
/// set-if-absent.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    url: String,
    created: i64,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT url, created
            FROM links
            WHERE namespace = $1 AND code = $2
            "#,
        )
        .bind(LINK_NAMESPACE)
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| {
            LinkRecord {
                url: r.url,
                created: r.created,
            }
            .into_link(code)
        }))
    }

    async fn insert_if_absent(&self, link: &Link) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO links (namespace, code, url, created)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (namespace, code) DO NOTHING
            "#,
        )
        .bind(LINK_NAMESPACE)
        .bind(&link.code)
        .bind(&link.target_url)
        .bind(link.created_millis())
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn count(&self) -> Result<u64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links WHERE namespace = $1")
            .bind(LINK_NAMESPACE)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
