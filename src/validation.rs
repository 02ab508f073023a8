// ABOUTME: Ordered, short-circuiting validation pipeline for constructed recipes
// ABOUTME: First failing check wins; the check list is extensible by appending
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

//! # Validation Pipeline
//!
//! An ordered, immutable list of check functions applied to a [`Recipe`]
//! with first-failure-wins semantics. The standard order is:
//!
//! 1. data integrity (name, owner)
//! 2. component count (non-empty, below the limit)
//! 3. image URL (absolute http/https when present)
//!
//! New checks are appended via [`RecipeValidator::with_check`] without
//! altering the behavior of earlier checks.

use url::Url;
use uuid::Uuid;

use crate::constants::validation::MAX_RECIPE_COMPONENTS;
use crate::errors::ValidationError;
use crate::models::recipe::Recipe;

/// A single validation check over a constructed recipe
pub type ValidationCheck = Box<dyn Fn(&Recipe) -> Result<(), ValidationError> + Send + Sync>;

/// Ordered, short-circuiting recipe validator.
pub struct RecipeValidator {
    checks: Vec<ValidationCheck>,
}

impl Default for RecipeValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeValidator {
    /// Validator with the standard check order and the default component
    /// limit
    #[must_use]
    pub fn new() -> Self {
        Self::with_component_limit(MAX_RECIPE_COMPONENTS)
    }

    /// Validator with limits taken from configuration
    #[must_use]
    pub fn from_config(config: &crate::config::ValidationConfig) -> Self {
        Self::with_component_limit(config.max_components)
    }

    /// Validator with the standard check order and a custom component limit
    #[must_use]
    pub fn with_component_limit(max_components: usize) -> Self {
        Self {
            checks: vec![
                Box::new(check_data_integrity),
                Box::new(move |recipe| check_component_count(recipe, max_components)),
                Box::new(check_image_url),
            ],
        }
    }

    /// Append a check to run after every existing one
    #[must_use]
    pub fn with_check(
        mut self,
        check: impl Fn(&Recipe) -> Result<(), ValidationError> + Send + Sync + 'static,
    ) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Run every check in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the error of the earliest failing check; later checks do
    /// not run.
    pub fn validate(&self, recipe: &Recipe) -> Result<(), ValidationError> {
        for check in &self.checks {
            check(recipe)?;
        }
        Ok(())
    }
}

/// Name must be non-blank and an owner must be assigned
fn check_data_integrity(recipe: &Recipe) -> Result<(), ValidationError> {
    if recipe.name.trim().is_empty() {
        return Err(ValidationError::InvalidName);
    }
    if recipe.owner_id == Uuid::nil() {
        return Err(ValidationError::MissingOwner);
    }
    Ok(())
}

/// Component list must be non-empty and within the limit
fn check_component_count(recipe: &Recipe, max: usize) -> Result<(), ValidationError> {
    let count = recipe.components.len();
    if count == 0 {
        return Err(ValidationError::EmptyIngredients);
    }
    if count > max {
        return Err(ValidationError::TooManyIngredients { count, max });
    }
    Ok(())
}

/// An image URL, when present, must parse as an absolute http/https URL.
/// An absent image passes trivially.
fn check_image_url(recipe: &Recipe) -> Result<(), ValidationError> {
    let Some(url) = recipe.image_url.as_deref() else {
        return Ok(());
    };
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => Err(ValidationError::InvalidImageUrl {
            url: url.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::Product;
    use crate::models::recipe::{Ingredient, RecipeComponent};

    fn sample_product() -> Product {
        Product {
            name: "Milk".to_owned(),
            brand: None,
            category: None,
            external_id: None,
            image_url: None,
            serving_size: 100.0,
            serving_unit: "ml".to_owned(),
            calories_per_100: 42.0,
            protein_per_100: 3.4,
            fat_per_100: 1.0,
            carbs_per_100: 5.0,
        }
    }

    fn valid_recipe() -> Recipe {
        let mut recipe = Recipe::new("Porridge");
        recipe.owner_id = Uuid::new_v4();
        recipe.add_component(RecipeComponent::Ingredient(Ingredient::new(
            sample_product(),
            200.0,
        )));
        recipe
    }

    #[test]
    fn test_valid_recipe_passes() {
        assert!(RecipeValidator::new().validate(&valid_recipe()).is_ok());
    }

    #[test]
    fn test_whitespace_name_is_invalid() {
        let mut recipe = valid_recipe();
        recipe.name = "   ".to_owned();
        assert_eq!(
            RecipeValidator::new().validate(&recipe),
            Err(ValidationError::InvalidName)
        );
    }

    #[test]
    fn test_relative_image_url_is_invalid() {
        let mut recipe = valid_recipe();
        recipe.image_url = Some("images/porridge.png".to_owned());
        assert!(matches!(
            RecipeValidator::new().validate(&recipe),
            Err(ValidationError::InvalidImageUrl { .. })
        ));
    }

    #[test]
    fn test_non_http_scheme_is_invalid() {
        let mut recipe = valid_recipe();
        recipe.image_url = Some("ftp://cdn.example.com/porridge.png".to_owned());
        assert!(matches!(
            RecipeValidator::new().validate(&recipe),
            Err(ValidationError::InvalidImageUrl { .. })
        ));
    }
}
