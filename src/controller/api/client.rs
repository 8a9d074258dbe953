use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::{ApiQuery, FetchPolicy, GamesApi};
use crate::controller::cache::RevalidationCache;
use crate::error::AppError;

/// Talks to the remote games api over http, honouring each fetch's caching hint.
#[derive(Debug, Clone)]
pub struct HttpGamesApi {
    client: Client,
    base_url: String,
    cache: RevalidationCache,
}

impl HttpGamesApi {
    /// # Errors
    ///
    /// Will return `Err` if the http client can't be built
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self::with_cache(client, base_url, RevalidationCache::new())
    }

    #[must_use]
    pub fn with_cache(client: Client, base_url: impl Into<String>, cache: RevalidationCache) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            cache,
        }
    }

    pub async fn cached_entries(&self) -> usize {
        self.cache.len().await
    }

    #[must_use]
    pub fn url_for(&self, query: &ApiQuery) -> String {
        format!("{}?{}", self.base_url, query.query_string())
    }
}

#[async_trait]
impl GamesApi for HttpGamesApi {
    /// The status code is not looked at: whatever body comes back has to be json.
    async fn fetch_json(&self, query: &ApiQuery, policy: FetchPolicy) -> Result<Value, AppError> {
        let url = self.url_for(query);

        if let Some(body) = self.cache.lookup(&url, policy, Utc::now()).await {
            tracing::debug!(%url, %policy, "games api cache hit");
            return Ok(body);
        }

        tracing::debug!(%url, %policy, "fetching from games api");
        let resp = self.client.get(url.as_str()).send().await?;
        let text = resp.text().await?;
        let body: Value = serde_json::from_str(&text)?;

        self.cache.store(&url, &body, policy, Utc::now()).await;
        Ok(body)
    }
}
