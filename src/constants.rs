// ABOUTME: System-wide constants and default limits for the Nutriplan core
// ABOUTME: Cache TTLs, validation limits, and the nutrient reference amount
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

//! # Constants Module
//!
//! Hardcoded defaults consumed by [`crate::config`]; every value here can be
//! overridden through the corresponding environment variable.

/// Cache-related constants
pub mod cache {
    /// Point product lookups cache TTL in seconds (15 minutes)
    pub const TTL_PRODUCT_SECS: u64 = 900;

    /// Search result set cache TTL in seconds (5 minutes).
    /// Search inputs vary more and are cheaper to refresh than point lookups.
    pub const TTL_SEARCH_SECS: u64 = 300;

    /// Default maximum number of entries in the in-memory cache
    pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 1000;
}

/// Validation-related constants
pub mod validation {
    /// Maximum number of components a recipe may contain
    pub const MAX_RECIPE_COMPONENTS: usize = 50;
}

/// Nutrient calculation constants
pub mod nutrition {
    /// Product nutrient values are defined per this many serving units
    pub const REFERENCE_AMOUNT: f64 = 100.0;
}

/// Service identification for structured logging
pub mod service_names {
    /// Canonical service name emitted in log output
    pub const NUTRIPLAN_CORE: &str = "nutriplan-core";
}
