// ABOUTME: Environment-driven application configuration for the Nutriplan core
// ABOUTME: Cache TTLs and validation limits with parse-or-default fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

//! # Configuration
//!
//! Environment-only configuration: every knob has a constant default from
//! [`crate::constants`] and an environment variable override. Malformed
//! values fall back to the default rather than failing startup.

use std::env;

use crate::cache::{CacheConfig, CacheTtlConfig};
use crate::constants::{cache, validation};

/// Top-level application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Nutrition lookup cache settings
    pub cache: CacheConfig,
    /// Recipe validation limits
    pub validation: ValidationConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            cache: cache_config_from_env(),
            validation: ValidationConfig::from_env(),
        }
    }
}

/// Recipe validation limits
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Maximum number of components a recipe may contain
    pub max_components: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_components: validation::MAX_RECIPE_COMPONENTS,
        }
    }
}

impl ValidationConfig {
    /// Load validation limits from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_components: env::var("RECIPE_MAX_COMPONENTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(validation::MAX_RECIPE_COMPONENTS),
        }
    }
}

/// Load cache configuration from environment
#[must_use]
pub fn cache_config_from_env() -> CacheConfig {
    CacheConfig {
        max_entries: env::var("CACHE_MAX_ENTRIES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(cache::DEFAULT_CACHE_MAX_ENTRIES),
        ttl: cache_ttl_from_env(),
    }
}

/// Load cache TTL configuration from environment
#[must_use]
pub fn cache_ttl_from_env() -> CacheTtlConfig {
    CacheTtlConfig {
        product_secs: env::var("CACHE_TTL_PRODUCT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(cache::TTL_PRODUCT_SECS),
        search_secs: env::var("CACHE_TTL_SEARCH_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(cache::TTL_SEARCH_SECS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.validation.max_components, 50);
        assert_eq!(config.cache.max_entries, 1000);
        assert_eq!(config.cache.ttl.product_secs, 900);
        assert_eq!(config.cache.ttl.search_secs, 300);
    }
}
