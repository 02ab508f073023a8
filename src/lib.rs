// ABOUTME: Main library entry point for the Nutriplan nutrition-planning core
// ABOUTME: Provides recipe composition, validation, authorization, caching, and shopping lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

#![deny(unsafe_code)]

//! # Nutriplan Core
//!
//! The nutrition-planning core library: recipes composed of ingredients and
//! nested recipes, with derived nutrient totals, ownership-scoped access,
//! and shopping-list generation across a meal plan.
//!
//! ## Architecture
//!
//! The crate is organized around capability traits and transparent wrappers:
//!
//! - **Models**: `Recipe`/`Ingredient` composite tree with on-demand
//!   recursive nutrient aggregation
//! - **Builder**: stepwise [`RecipeBuilder`] driven by a [`RecipeDirector`]
//! - **Validation**: ordered, first-failure-wins [`RecipeValidator`]
//! - **Decorators**: [`AuthorizedRecipeRepository`] enforcing per-owner
//!   access over any [`RecipeRepository`], and [`CachedNutritionLookup`]
//!   adding cache-aside acceleration over any [`NutritionLookup`]
//! - **Shopping**: meal-plan traversal into a grouped, summed purchase list
//!
//! Persistence, HTTP transport, and third-party nutrition clients live
//! outside this crate and plug in through the capability traits.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use nutriplan::context::StaticCallerContext;
//! use nutriplan::decorators::AuthorizedRecipeRepository;
//! use nutriplan::repository::memory::InMemoryRecipeRepository;
//! use nutriplan::services::RecipeService;
//! use uuid::Uuid;
//!
//! let context = Arc::new(StaticCallerContext::user(Uuid::new_v4()));
//! let repository =
//!     AuthorizedRecipeRepository::new(InMemoryRecipeRepository::new(), context.clone());
//! let service = RecipeService::new(repository, context);
//! ```

/// Recipe builder and director for stepwise construction
pub mod builder;

/// Cache abstraction with pluggable backends
pub mod cache;

/// Environment-driven application configuration
pub mod config;

/// System-wide constants and defaults
pub mod constants;

/// Caller identity and role capability
pub mod context;

/// Authorization and caching decorators over capability traits
pub mod decorators;

/// Unified error handling types
pub mod errors;

/// Logging configuration and structured logging setup
pub mod logging;

/// Nutrition lookup capability and search filters
pub mod lookup;

/// Core data models: products, recipes, meal plans, shopping lists
pub mod models;

/// Role-based permission types
pub mod permissions;

/// Recipe repository capability and in-memory implementation
pub mod repository;

/// Domain service layer tying construction, validation, and storage together
pub mod services;

/// Shopping-list aggregation over meal plans
pub mod shopping;

/// Recipe validation pipeline
pub mod validation;

pub use builder::{IngredientDescription, RecipeBuilder, RecipeDescription, RecipeDirector};
pub use decorators::{AuthorizedRecipeRepository, CachedNutritionLookup};
pub use errors::{AppError, AppResult, AuthorizationError, ValidationError};
pub use lookup::{NutritionLookup, ProductSearchFilter};
pub use models::{
    DietTag, Ingredient, MealPlanEntry, MealType, NutrientTotals, Product, Recipe,
    RecipeComponent, ShoppingListItem,
};
pub use repository::RecipeRepository;
pub use shopping::generate_shopping_list;
pub use validation::RecipeValidator;
