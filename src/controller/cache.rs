use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::controller::api::FetchPolicy;

/// Upper bound on cached urls. Ids come straight from the request path, so
/// the key space is whatever clients choose to send.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

#[derive(Debug, Clone)]
pub struct CachedResponse {
    pub body: Value,
    pub fetched_at: DateTime<Utc>,
    /// Policy of the fetch that stored the entry; decides when it is dropped.
    pub stored_with: FetchPolicy,
}

/// Api responses keyed by url, bounded to `capacity` entries.
#[derive(Debug, Clone)]
pub struct RevalidationCache {
    map: Arc<RwLock<HashMap<String, CachedResponse>>>,
    capacity: usize,
}

impl Default for RevalidationCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl RevalidationCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: Arc::default(),
            capacity: capacity.max(1),
        }
    }

    pub async fn lookup(&self, url: &str, policy: FetchPolicy, now: DateTime<Utc>) -> Option<Value> {
        if !policy.uses_cache() {
            return None;
        }
        let map = self.map.read().await;
        let cached = map.get(url)?;
        if is_fresh(now - cached.fetched_at, policy) {
            Some(cached.body.clone())
        } else {
            None
        }
    }

    /// Inserts or replaces `url`. Entries past the window they were stored
    /// under go first; if the map is still full the oldest entry is evicted.
    pub async fn store(&self, url: &str, body: &Value, policy: FetchPolicy, now: DateTime<Utc>) {
        if !policy.uses_cache() {
            return;
        }
        let mut map = self.map.write().await;
        map.retain(|_, cached| is_fresh(now - cached.fetched_at, cached.stored_with));

        if !map.contains_key(url) && map.len() >= self.capacity {
            let oldest = map
                .iter()
                .min_by_key(|(_, cached)| cached.fetched_at)
                .map(|(key, _)| key.clone());
            if let Some(key) = oldest {
                tracing::debug!(evicted = %key, "games api cache full");
                map.remove(&key);
            }
        }

        map.insert(
            url.to_string(),
            CachedResponse {
                body: body.clone(),
                fetched_at: now,
                stored_with: policy,
            },
        );
    }

    pub async fn len(&self) -> usize {
        self.map.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[must_use]
pub fn is_fresh(age: Duration, policy: FetchPolicy) -> bool {
    match policy {
        FetchPolicy::NoStore => false,
        FetchPolicy::Default => true,
        FetchPolicy::Revalidate(secs) => age < Duration::seconds(i64::from(secs)),
    }
}
