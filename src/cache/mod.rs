// ABOUTME: Cache abstraction for nutrition lookup acceleration
// ABOUTME: Pluggable backend support with structured keys and per-resource TTLs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

/// In-memory cache implementation
pub mod memory;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::constants::cache::{DEFAULT_CACHE_MAX_ENTRIES, TTL_PRODUCT_SECS, TTL_SEARCH_SECS};
use crate::errors::AppResult;

/// Cache provider trait for pluggable backend implementations.
///
/// The cache is a best-effort accelerator: callers treat every failure as
/// a miss and fall through to the source.
#[async_trait::async_trait]
pub trait CacheProvider: Send + Sync {
    /// Store value in cache with TTL
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or storage fails
    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: &CacheKey,
        value: &T,
        ttl: Duration,
    ) -> AppResult<()>;

    /// Retrieve value from cache; `Ok(None)` on miss or expiry
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails
    async fn get<T: for<'de> Deserialize<'de>>(&self, key: &CacheKey) -> AppResult<Option<T>>;

    /// Remove a single cache entry
    ///
    /// # Errors
    ///
    /// Returns an error if invalidation fails
    async fn invalidate(&self, key: &CacheKey) -> AppResult<()>;

    /// Clear all cache entries
    ///
    /// # Errors
    ///
    /// Returns an error if the clear operation fails
    async fn clear_all(&self) -> AppResult<()>;
}

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries held by the in-memory store
    pub max_entries: usize,
    /// Cache TTL configuration
    pub ttl: CacheTtlConfig,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            ttl: CacheTtlConfig::default(),
        }
    }
}

/// Cache TTL configuration per resource type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheTtlConfig {
    /// Point product lookup TTL in seconds (default: 15 minutes)
    pub product_secs: u64,
    /// Search result set TTL in seconds (default: 5 minutes)
    pub search_secs: u64,
}

impl Default for CacheTtlConfig {
    fn default() -> Self {
        Self {
            product_secs: TTL_PRODUCT_SECS,
            search_secs: TTL_SEARCH_SECS,
        }
    }
}

impl CacheTtlConfig {
    /// TTL for a specific cache key
    #[must_use]
    pub const fn ttl_for_key(&self, key: &CacheKey) -> Duration {
        match key {
            CacheKey::Product { .. } => Duration::from_secs(self.product_secs),
            CacheKey::Search { .. } => Duration::from_secs(self.search_secs),
        }
    }
}

/// Structured cache key for nutrition lookups
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Point product lookup, keyed by the normalized query
    Product {
        /// Trimmed, lowercased query string
        query: String,
    },
    /// Catalog search, keyed by the filter's deterministic rendering
    Search {
        /// Fixed-field-order filter key
        filter_key: String,
    },
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Product { query } => write!(f, "product:{query}"),
            Self::Search { filter_key } => write!(f, "search:{filter_key}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_for_key() {
        let ttl = CacheTtlConfig::default();
        let product = CacheKey::Product {
            query: "apple".to_owned(),
        };
        let search = CacheKey::Search {
            filter_key: "q:apple".to_owned(),
        };
        assert_eq!(ttl.ttl_for_key(&product), Duration::from_secs(900));
        assert_eq!(ttl.ttl_for_key(&search), Duration::from_secs(300));
    }

    #[test]
    fn test_key_display_is_namespaced() {
        let key = CacheKey::Product {
            query: "apple".to_owned(),
        };
        assert_eq!(key.to_string(), "product:apple");
    }
}
