// ABOUTME: Nutrition lookup capability over an external product catalog
// ABOUTME: Defines the NutritionLookup trait and deterministic search filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

//! # Nutrition Lookup
//!
//! The external product-catalog capability. Implementations wrap a
//! third-party nutrition database HTTP client; this crate only consumes
//! the trait and decorates it with caching
//! ([`crate::decorators::CachedNutritionLookup`]).

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;
use crate::models::product::Product;

/// Product catalog lookup capability.
#[async_trait]
pub trait NutritionLookup: Send + Sync {
    /// Point lookup of one product; `Ok(None)` on a miss.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying catalog fails.
    async fn get_product(&self, query: &str) -> AppResult<Option<Product>>;

    /// Filtered catalog search.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying catalog fails.
    async fn search(&self, filter: &ProductSearchFilter) -> AppResult<Vec<Product>>;
}

/// Blanket implementation for `Arc<T>` where `T: NutritionLookup`, so a
/// shared lookup can be wrapped (e.g. by the caching decorator) while the
/// original handle is retained.
#[async_trait]
impl<T: NutritionLookup + ?Sized> NutritionLookup for Arc<T> {
    async fn get_product(&self, query: &str) -> AppResult<Option<Product>> {
        (**self).get_product(query).await
    }

    async fn search(&self, filter: &ProductSearchFilter) -> AppResult<Vec<Product>> {
        (**self).search(filter).await
    }
}

/// Filter for a paged catalog search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSearchFilter {
    /// Free-text query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Shopping category filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Nutri-score grade filter (a-e)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutri_score: Option<String>,
    /// Only products without palm oil
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_palm_oil: Option<bool>,
    /// Only vegetarian products
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vegetarian: Option<bool>,
    /// Only vegan products
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vegan: Option<bool>,
    /// Page number
    pub page: u32,
    /// Items per page
    pub page_size: u32,
}

impl ProductSearchFilter {
    /// Deterministic cache key for this filter.
    ///
    /// Fields are rendered in a fixed order so two logically identical
    /// filters always produce the same key regardless of how the filter
    /// was populated. Absent fields render empty.
    #[must_use]
    pub fn cache_key(&self) -> String {
        fn opt_str(value: Option<&str>) -> &str {
            value.unwrap_or("")
        }
        fn opt_bool(value: Option<bool>) -> String {
            value.map_or(String::new(), |b| b.to_string())
        }

        format!(
            "q:{}:cat:{}:score:{}:no_palm_oil:{}:vegetarian:{}:vegan:{}:page:{}:page_size:{}",
            opt_str(self.query.as_deref()),
            opt_str(self.category.as_deref()),
            opt_str(self.nutri_score.as_deref()),
            opt_bool(self.no_palm_oil),
            opt_bool(self.vegetarian),
            opt_bool(self.vegan),
            self.page,
            self.page_size,
        )
    }
}
