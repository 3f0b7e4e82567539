use crate::core::filter_content;
use crate::models::ContentFilterResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// In-memory memoization of content filter results, keyed by the raw text
#[derive(Clone)]
pub struct FilterCache {
    cache: moka::future::Cache<String, ContentFilterResult>,
    ttl_secs: u64,
}

impl FilterCache {
    /// Create a new cache holding up to `max_entries` results for `ttl_secs`
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache, ttl_secs }
    }

    /// Filter `content`, reusing a cached result when present
    pub async fn filter(&self, content: &str) -> ContentFilterResult {
        if let Some(result) = self.cache.get(content).await {
            tracing::trace!("Filter cache hit ({} bytes)", content.len());
            return result;
        }

        let result = filter_content(content);
        self.cache.insert(content.to_string(), result.clone()).await;
        result
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.cache.entry_count(),
            ttl_secs: self.ttl_secs,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
    #[serde(rename = "ttlSecs")]
    pub ttl_secs: u64,
}
