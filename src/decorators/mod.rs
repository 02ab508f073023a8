// ABOUTME: Transparent decorators adding cross-cutting behavior over capability traits
// ABOUTME: Authorization over the recipe repository, caching over the nutrition lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

//! # Capability Decorators
//!
//! Each decorator implements the same trait as the capability it wraps and
//! holds the inner implementation by composition, so callers depend only on
//! the trait and cannot tell whether a decorator is present.

/// Per-owner authorization over a recipe repository
pub mod authorized;

/// Cache-aside acceleration over a nutrition lookup
pub mod cached;

pub use authorized::AuthorizedRecipeRepository;
pub use cached::CachedNutritionLookup;
