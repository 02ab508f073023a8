// ABOUTME: Core data models for the Nutriplan nutrition-planning domain
// ABOUTME: Re-exports products, recipe composites, meal plans, and shopping items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

//! # Data Models
//!
//! Core data structures of the nutrition-planning domain.
//!
//! ## Design Principles
//!
//! - **Derived, never stored**: nutrient totals are always recomputed from
//!   the component tree, so a nested recipe edit can never go stale
//! - **Value snapshots**: an [`Ingredient`] owns a frozen copy of its
//!   [`Product`]; later catalog edits do not rewrite historical recipes
//! - **Closed composite**: [`RecipeComponent`] is a tagged sum type with
//!   exhaustive matching, and components are owned by value, so a recipe
//!   cannot contain itself
//! - **Serializable**: all models support JSON serialization

/// Meal plan entries and meal types
pub mod meal_plan;

/// Frozen product nutrient snapshots
pub mod product;

/// Recipe composite tree and nutrient aggregation
pub mod recipe;

/// Shopping list items produced by the aggregator
pub mod shopping;

pub use meal_plan::{MealPlanEntry, MealType};
pub use product::Product;
pub use recipe::{DietTag, Ingredient, NutrientTotals, Recipe, RecipeComponent};
pub use shopping::ShoppingListItem;
