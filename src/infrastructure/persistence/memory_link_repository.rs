//! In-process implementation of link repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Link store backed by a `HashMap` behind a lock.
///
/// Used by tests and when no persistent backend is configured. Contents are
/// lost when the process exits.
#[derive(Default)]
pub struct MemoryLinkRepository {
    links: RwLock<HashMap<String, Link>>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.read().await.get(code).cloned())
    }

    async fn insert_if_absent(&self, link: &Link) -> Result<bool, AppError> {
        // Check and insert happen under one write guard.
        match self.links.write().await.entry(link.code.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(link.clone());
                Ok(true)
            }
        }
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.links.read().await.len() as u64)
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Arc;

    fn link(code: &str, url: &str) -> Link {
        Link::new(code.to_string(), url.to_string(), Utc::now())
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let repo = MemoryLinkRepository::new();

        assert!(repo.insert_if_absent(&link("abc123", "https://a.test")).await.unwrap());

        let found = repo.find_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(found.target_url, "https://a.test");
        assert!(repo.find_by_code("zzz999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_never_overwrites() {
        let repo = MemoryLinkRepository::new();

        assert!(repo.insert_if_absent(&link("abc123", "https://first.test")).await.unwrap());
        assert!(!repo.insert_if_absent(&link("abc123", "https://second.test")).await.unwrap());

        let found = repo.find_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(found.target_url, "https://first.test");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_on_same_code_have_one_winner() {
        let repo = Arc::new(MemoryLinkRepository::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.insert_if_absent(&link("same01", &format!("https://{i}.test")))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
