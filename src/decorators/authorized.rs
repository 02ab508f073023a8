// ABOUTME: Authorization decorator enforcing per-owner access over recipe storage
// ABOUTME: Wraps any RecipeRepository with role checks, owner stamping, and audit logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

//! # Authorized Recipe Repository
//!
//! Wraps any [`RecipeRepository`] with ownership-scoped access control:
//!
//! - `get_by_id` is passed through unchanged: any authenticated caller may
//!   fetch any recipe by id (a deliberate policy, not an oversight)
//! - `get_all_for_owner` requires the caller to be the owner, unless admin
//! - `create` stamps the caller as owner; client-supplied ownership is
//!   never trusted
//! - `delete`/`update_image` are idempotent on absent targets and
//!   owner-checked otherwise
//!
//! Every denial is preceded by a structured log entry carrying the caller
//! id and the target/owner id for audit.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::context::CallerContext;
use crate::errors::{AppResult, AuthorizationError};
use crate::models::recipe::Recipe;
use crate::repository::RecipeRepository;

/// Authorization decorator over a recipe repository.
///
/// # Thread Safety
///
/// The decorator is `Send + Sync` and can be safely shared across async
/// tasks; it holds no locks and serializes nothing.
pub struct AuthorizedRecipeRepository<R> {
    /// The wrapped repository
    inner: R,
    /// Caller identity and role, injected at construction
    context: Arc<dyn CallerContext>,
}

impl<R> AuthorizedRecipeRepository<R> {
    /// Wrap a repository with the given caller context
    pub fn new(inner: R, context: Arc<dyn CallerContext>) -> Self {
        Self { inner, context }
    }

    /// Get a reference to the inner repository
    pub const fn inner(&self) -> &R {
        &self.inner
    }

    /// Deny with an audit log line naming the caller and the owner of the
    /// resource the caller tried to reach.
    fn deny(caller_id: Uuid, owner_id: Uuid, operation: &str) -> AuthorizationError {
        warn!(
            caller_id = %caller_id,
            owner_id = %owner_id,
            operation = %operation,
            "Authorization denied: caller is not the owner"
        );
        AuthorizationError::NotOwner
    }
}

#[async_trait]
impl<R: RecipeRepository> RecipeRepository for AuthorizedRecipeRepository<R> {
    /// Single-recipe reads are not ownership-checked by policy.
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Recipe>> {
        self.inner.get_by_id(id).await
    }

    async fn get_all_for_owner(&self, owner_id: Uuid) -> AppResult<Vec<Recipe>> {
        if self.context.current_user_role().is_admin() {
            return self.inner.get_all_for_owner(owner_id).await;
        }

        let caller_id = self.context.current_user_id()?;
        if caller_id != owner_id {
            return Err(Self::deny(caller_id, owner_id, "get_all_for_owner").into());
        }
        self.inner.get_all_for_owner(owner_id).await
    }

    async fn create(&self, mut recipe: Recipe) -> AppResult<Recipe> {
        // Client-supplied ownership is never trusted
        recipe.owner_id = self.context.current_user_id()?;
        self.inner.create(recipe).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.context.current_user_role().is_admin() {
            return self.inner.delete(id).await;
        }

        let caller_id = self.context.current_user_id()?;
        match self.inner.get_by_id(id).await? {
            // Deleting something already gone is not an error
            None => Ok(()),
            Some(recipe) if recipe.owner_id != caller_id => {
                Err(Self::deny(caller_id, recipe.owner_id, "delete").into())
            }
            Some(_) => self.inner.delete(id).await,
        }
    }

    async fn update_image(&self, id: Uuid, filename: &str) -> AppResult<()> {
        if self.context.current_user_role().is_admin() {
            return self.inner.update_image(id, filename).await;
        }

        let caller_id = self.context.current_user_id()?;
        match self.inner.get_by_id(id).await? {
            None => Ok(()),
            Some(recipe) if recipe.owner_id != caller_id => {
                Err(Self::deny(caller_id, recipe.owner_id, "update_image").into())
            }
            Some(_) => self.inner.update_image(id, filename).await,
        }
    }
}
