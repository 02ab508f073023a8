// ABOUTME: Cache-aside decorator accelerating nutrition catalog lookups
// ABOUTME: Wraps any NutritionLookup; provider failures degrade to logged misses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

//! # Cached Nutrition Lookup
//!
//! Cache-aside over any [`NutritionLookup`]: check the cache first, fall
//! through to the catalog on miss, populate the cache with non-empty
//! results. Misses and empty result sets are never cached, so the next
//! identical request retries the catalog; failures are not pinned.
//!
//! The decorator is a best-effort accelerator. A provider failure degrades
//! to a miss after a `warn` log naming the failure, which is how operators
//! tell an outage from a genuine miss; callers cannot. Cache failures
//! degrade the same way. Concurrent identical lookups may each reach the
//! catalog independently; there is no single-flight de-duplication.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::cache::{CacheKey, CacheProvider, CacheTtlConfig};
use crate::errors::AppResult;
use crate::lookup::{NutritionLookup, ProductSearchFilter};
use crate::models::product::Product;

/// Caching decorator over a nutrition lookup.
pub struct CachedNutritionLookup<L, C> {
    /// The wrapped catalog lookup
    inner: L,
    /// Cache backend
    cache: C,
    /// Per-resource TTLs
    ttl: CacheTtlConfig,
}

impl<L, C> CachedNutritionLookup<L, C> {
    /// Wrap a lookup with the given cache and default TTLs
    pub fn new(inner: L, cache: C) -> Self {
        Self {
            inner,
            cache,
            ttl: CacheTtlConfig::default(),
        }
    }

    /// Wrap a lookup with explicit TTL configuration
    pub const fn with_ttl(inner: L, cache: C, ttl: CacheTtlConfig) -> Self {
        Self { inner, cache, ttl }
    }

    /// Normalized point-lookup key: trimmed and lowercased so case and
    /// surrounding whitespace variants share one entry
    fn product_key(query: &str) -> CacheKey {
        CacheKey::Product {
            query: query.trim().to_lowercase(),
        }
    }
}

impl<L, C: CacheProvider> CachedNutritionLookup<L, C> {
    async fn cached<T: serde::de::DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        match self.cache.get::<T>(key).await {
            Ok(hit) => hit,
            Err(error) => {
                debug!(key = %key, error = %error, "Cache read failed, treating as miss");
                None
            }
        }
    }

    async fn store<T: serde::Serialize + Send + Sync>(&self, key: &CacheKey, value: &T) {
        let ttl = self.ttl.ttl_for_key(key);
        if let Err(error) = self.cache.set(key, value, ttl).await {
            debug!(key = %key, error = %error, "Cache write failed, result not cached");
        }
    }
}

#[async_trait]
impl<L: NutritionLookup, C: CacheProvider> NutritionLookup for CachedNutritionLookup<L, C> {
    async fn get_product(&self, query: &str) -> AppResult<Option<Product>> {
        let key = Self::product_key(query);
        if let Some(product) = self.cached::<Product>(&key).await {
            return Ok(Some(product));
        }

        match self.inner.get_product(query).await {
            Ok(Some(product)) => {
                self.store(&key, &product).await;
                Ok(Some(product))
            }
            Ok(None) => Ok(None),
            Err(error) => {
                warn!(query = %query, error = %error, "Nutrition lookup failed, degrading to miss");
                Ok(None)
            }
        }
    }

    async fn search(&self, filter: &ProductSearchFilter) -> AppResult<Vec<Product>> {
        let key = CacheKey::Search {
            filter_key: filter.cache_key(),
        };
        if let Some(products) = self.cached::<Vec<Product>>(&key).await {
            return Ok(products);
        }

        match self.inner.search(filter).await {
            Ok(products) => {
                // Empty result sets are never cached
                if !products.is_empty() {
                    self.store(&key, &products).await;
                }
                Ok(products)
            }
            Err(error) => {
                warn!(filter = %filter.cache_key(), error = %error, "Nutrition search failed, degrading to empty result");
                Ok(Vec::new())
            }
        }
    }
}
