//! Caching layer for trip summaries.
//!
//! Prompts only carry a segment count and a total time, so many requests in
//! a batch (and across batches in a long-lived process) share the same
//! prompt. Caching by prompt text avoids paying for the same summary twice.

use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::summary::{Summarizer, SummaryError};

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(600),
            max_capacity: 1000,
        }
    }
}

/// Summarizer with caching.
///
/// Wraps any [`Summarizer`] and caches its successful replies, keyed by
/// prompt. Failures are not cached, so the next request retries.
pub struct CachedSummarizer<S> {
    inner: S,
    summaries: MokaCache<String, String>,
}

impl<S> CachedSummarizer<S> {
    /// Create a new cached summarizer.
    pub fn new(inner: S, config: &CacheConfig) -> Self {
        let summaries = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, summaries }
    }

    #[cfg(test)]
    pub(crate) fn inner(&self) -> &S {
        &self.inner
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.summaries.entry_count()
    }
}

impl<S: Summarizer + Sync> Summarizer for CachedSummarizer<S> {
    async fn summarize(&self, prompt: &str) -> Result<String, SummaryError> {
        if let Some(cached) = self.summaries.get(prompt).await {
            trace!(prompt, "summary cache hit");
            return Ok(cached);
        }

        let summary = self.inner.summarize(prompt).await?;
        self.summaries
            .insert(prompt.to_string(), summary.clone())
            .await;

        Ok(summary)
    }
}
