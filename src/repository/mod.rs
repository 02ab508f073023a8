// ABOUTME: Recipe repository capability consumed by the authorization decorator
// ABOUTME: Persistence mechanics live outside the crate behind this trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

//! # Recipe Repository
//!
//! The storage capability the core consumes. Misses on reads are `Ok(None)`,
//! never errors. The dashmap-backed [`memory::InMemoryRecipeRepository`]
//! ships with the crate for embedding and tests; database-backed
//! implementations live with the persistence layer.

/// In-memory repository implementation
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppResult;
use crate::models::recipe::Recipe;

/// Storage capability for recipes.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Fetch a recipe by id; `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store fails.
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Recipe>>;

    /// Fetch every recipe owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store fails.
    async fn get_all_for_owner(&self, owner_id: Uuid) -> AppResult<Vec<Recipe>>;

    /// Store a new recipe, returning it as stored.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store fails.
    async fn create(&self, recipe: Recipe) -> AppResult<Recipe>;

    /// Delete a recipe as a unit. Deleting an absent recipe is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store fails.
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Replace the stored image filename of a recipe. Updating an absent
    /// recipe is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store fails.
    async fn update_image(&self, id: Uuid, filename: &str) -> AppResult<()>;
}
