//! Link entity representing a code → target URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Namespace every link key lives under: records are keyed by `("proxy", code)`.
pub const LINK_NAMESPACE: &str = "proxy";

/// A registered short link.
///
/// Created exactly once and never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(code: String, target_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            target_url,
            created_at,
        }
    }

    /// Creation time as milliseconds since the Unix epoch, the persisted form.
    pub fn created_millis(&self) -> i64 {
        self.created_at.timestamp_millis()
    }

    /// Persisted value for this link (the key is the code).
    pub fn to_record(&self) -> LinkRecord {
        LinkRecord {
            url: self.target_url.clone(),
            created: self.created_millis(),
        }
    }
}

/// Stored value of a link: `{ url, created }`.
///
/// `created` is an integer millisecond timestamp. There is no version
/// field; extending the shape requires a new key namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub url: String,
    pub created: i64,
}

impl LinkRecord {
    /// Rebuilds the entity from a stored value and its key.
    ///
    /// Out-of-range timestamps fall back to the Unix epoch.
    pub fn into_link(self, code: impl Into<String>) -> Link {
        let created_at = DateTime::from_timestamp_millis(self.created).unwrap_or_default();
        Link::new(code.into(), self.url, created_at)
    }
}
