//! Redis implementation of link repository.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::entities::{LINK_NAMESPACE, Link, LinkRecord};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Keys fetched per `SCAN` round trip when counting.
const SCAN_BATCH: usize = 1000;

/// Redis repository storing each link as a JSON document under `proxy:{code}`.
///
/// `SET NX` provides the atomic set-if-absent. Keys carry no TTL; links are
/// permanent.
pub struct RedisLinkRepository {
    conn: ConnectionManager,
}

impl RedisLinkRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the server cannot be reached or the
    /// PING fails.
    pub async fn connect(redis_url: &str) -> Result<Self, AppError> {
        let client = Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        info!("Connected to Redis");

        Ok(Self { conn: manager })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(code: &str) -> String {
        format!("{}:{}", LINK_NAMESPACE, code)
    }
}

#[async_trait]
impl LinkRepository for RedisLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let key = Self::build_key(code);
        let mut conn = self.conn.clone();

        let Some(json) = conn.get::<_, Option<String>>(&key).await? else {
            debug!("Redis MISS: {}", key);
            return Ok(None);
        };

        let record: LinkRecord = serde_json::from_str(&json)?;
        Ok(Some(record.into_link(code)))
    }

    async fn insert_if_absent(&self, link: &Link) -> Result<bool, AppError> {
        let key = Self::build_key(&link.code);
        let value = serde_json::to_string(&link.to_record())?;
        let mut conn = self.conn.clone();

        let inserted = conn.set_nx::<_, _, bool>(&key, value).await?;
        if !inserted {
            debug!("Redis key already taken: {}", key);
        }

        Ok(inserted)
    }

    async fn count(&self) -> Result<u64, AppError> {
        let pattern = format!("{}:*", LINK_NAMESPACE);
        let mut conn = self.conn.clone();
        let mut cursor: u64 = 0;
        let mut total: u64 = 0;

        // SCAN can repeat a key while the keyspace is being rehashed; the count is approximate.
        loop {
            let (next, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut conn)
                .await?;

            total += keys.len() as u64;

            if next == 0 {
                break;
            }
            cursor = next;
        }

        Ok(total)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
