// ABOUTME: In-memory recipe repository backed by a concurrent map
// ABOUTME: Suitable for embedding, demos, and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::RecipeRepository;
use crate::errors::AppResult;
use crate::models::recipe::Recipe;

/// In-memory recipe store over a concurrent map.
///
/// Clones share the same underlying map, mirroring how a pooled database
/// handle behaves.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecipeRepository {
    store: Arc<DashMap<Uuid, Recipe>>,
}

impl InMemoryRecipeRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the repository holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Recipe>> {
        Ok(self.store.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_all_for_owner(&self, owner_id: Uuid) -> AppResult<Vec<Recipe>> {
        Ok(self
            .store
            .iter()
            .filter(|entry| entry.value().owner_id == owner_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn create(&self, recipe: Recipe) -> AppResult<Recipe> {
        self.store.insert(recipe.id, recipe.clone());
        Ok(recipe)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.store.remove(&id);
        Ok(())
    }

    async fn update_image(&self, id: Uuid, filename: &str) -> AppResult<()> {
        if let Some(mut entry) = self.store.get_mut(&id) {
            entry.image_url = Some(filename.to_owned());
        }
        Ok(())
    }
}
