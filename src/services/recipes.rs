// ABOUTME: Recipe lifecycle service tying construction, validation, and storage together
// ABOUTME: The single entry point transports call for recipe CRUD and shopping lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

use std::sync::Arc;

use uuid::Uuid;

use crate::builder::{RecipeDescription, RecipeDirector};
use crate::context::CallerContext;
use crate::errors::AppResult;
use crate::models::meal_plan::MealPlanEntry;
use crate::models::recipe::Recipe;
use crate::models::shopping::ShoppingListItem;
use crate::repository::RecipeRepository;
use crate::shopping::generate_shopping_list;
use crate::validation::RecipeValidator;

/// Recipe lifecycle service.
///
/// Composes the director, the validation pipeline, and a repository.
/// Hand it an [`AuthorizedRecipeRepository`](crate::decorators::AuthorizedRecipeRepository)
/// and every operation is ownership-scoped; hand it a bare repository and
/// it is not. The service cannot tell the difference, which is the point.
pub struct RecipeService<R> {
    repository: R,
    context: Arc<dyn CallerContext>,
    validator: RecipeValidator,
}

impl<R: RecipeRepository> RecipeService<R> {
    /// Create a service with the standard validation pipeline
    #[must_use]
    pub fn new(repository: R, context: Arc<dyn CallerContext>) -> Self {
        Self {
            repository,
            context,
            validator: RecipeValidator::new(),
        }
    }

    /// Create a service with a custom validation pipeline
    #[must_use]
    pub fn with_validator(
        repository: R,
        context: Arc<dyn CallerContext>,
        validator: RecipeValidator,
    ) -> Self {
        Self {
            repository,
            context,
            validator,
        }
    }

    /// Construct a raw recipe from a description without validating it
    #[must_use]
    pub fn construct(description: &RecipeDescription) -> Recipe {
        RecipeDirector::new().construct(description)
    }

    /// Validate a constructed recipe against the pipeline.
    ///
    /// # Errors
    ///
    /// Returns the earliest failing check's `ValidationError`.
    pub fn validate(&self, recipe: &Recipe) -> AppResult<()> {
        self.validator.validate(recipe)?;
        Ok(())
    }

    /// Construct, validate, and store a recipe for the current caller.
    ///
    /// The caller is assigned as owner before validation so a well-formed
    /// description passes the owner check; the repository (wrapped in the
    /// authorization decorator) stamps the same identity again on create,
    /// so a bypassing client gains nothing.
    ///
    /// # Errors
    ///
    /// Returns `AuthorizationError::Unauthenticated` without a caller
    /// identity, a `ValidationError` when the constructed recipe fails the
    /// pipeline, or the repository's error when storage fails.
    pub async fn create_recipe(&self, description: &RecipeDescription) -> AppResult<Recipe> {
        let mut recipe = Self::construct(description);
        recipe.owner_id = self.context.current_user_id()?;
        self.validator.validate(&recipe)?;
        self.repository.create(recipe).await
    }

    /// Fetch a recipe by id; `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns the repository's error when the fetch fails.
    pub async fn recipe(&self, id: Uuid) -> AppResult<Option<Recipe>> {
        self.repository.get_by_id(id).await
    }

    /// Fetch every recipe owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns `AuthorizationError::NotOwner` through an authorized
    /// repository when the caller is not `owner_id` and not an admin.
    pub async fn recipes_for_owner(&self, owner_id: Uuid) -> AppResult<Vec<Recipe>> {
        self.repository.get_all_for_owner(owner_id).await
    }

    /// Delete a recipe as a unit; deleting an absent recipe succeeds.
    ///
    /// # Errors
    ///
    /// Returns `AuthorizationError::NotOwner` through an authorized
    /// repository when the caller does not own the target.
    pub async fn delete_recipe(&self, id: Uuid) -> AppResult<()> {
        self.repository.delete(id).await
    }

    /// Replace a recipe's stored image filename.
    ///
    /// # Errors
    ///
    /// Returns `AuthorizationError::NotOwner` through an authorized
    /// repository when the caller does not own the target.
    pub async fn update_recipe_image(&self, id: Uuid, filename: &str) -> AppResult<()> {
        self.repository.update_image(id, filename).await
    }

    /// Generate the grouped, summed shopping list for a meal plan
    #[must_use]
    pub fn shopping_list(entries: &[MealPlanEntry]) -> Vec<ShoppingListItem> {
        generate_shopping_list(entries)
    }
}
