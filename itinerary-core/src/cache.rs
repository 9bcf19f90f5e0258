//! Caching decorator for place lookups.
//!
//! Place data changes rarely; caching lookups by normalized query keeps
//! repeated itinerary generations from hammering the provider. Both
//! matches and no-matches are cached; errors are not, so transient
//! failures stay retryable. The enrichment service itself holds no state,
//! this decorator lives on the adapter side of the lookup boundary.

use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::Place;
use crate::enrich::{LookupError, PlaceLookup};

/// Configuration for the lookup cache.
#[derive(Debug, Clone)]
pub struct LookupCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for LookupCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(600),
            max_capacity: 1000,
        }
    }
}

/// A place lookup with a TTL cache in front of it.
///
/// Wraps any [`PlaceLookup`]; queries that normalize to the same key share
/// one entry.
pub struct CachedLookup<L> {
    inner: L,
    cache: MokaCache<String, Option<Place>>,
}

impl<L> CachedLookup<L> {
    /// Wrap a lookup with the given cache configuration.
    pub fn new(inner: L, config: &LookupCacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, cache }
    }

    /// Number of cached entries (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Drop all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

/// Collapse case and runs of whitespace so trivially different queries
/// share a cache entry.
fn normalize_query(query: &str) -> String {
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

impl<L: PlaceLookup> PlaceLookup for CachedLookup<L> {
    async fn find_one(&self, query: &str) -> Result<Option<Place>, LookupError> {
        let key = normalize_query(query);

        if let Some(hit) = self.cache.get(&key).await {
            return Ok(hit);
        }

        let found = self.inner.find_one(query).await?;
        self.cache.insert(key, found.clone()).await;
        Ok(found)
    }

    fn source_tag(&self) -> &str {
        self.inner.source_tag()
    }
}
