// ABOUTME: Stepwise recipe construction via builder and director
// ABOUTME: Turns a RecipeDescription into a raw Recipe, deferring all validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

//! # Recipe Builder / Director
//!
//! [`RecipeBuilder`] accumulates recipe state step by step; [`RecipeDirector`]
//! drives it in a fixed order from a [`RecipeDescription`]. The director
//! performs no semantic validation: an empty ingredient list or a missing
//! owner is permitted here and caught later by the
//! [validation pipeline](crate::validation).

use std::collections::BTreeSet;
use std::mem;

use serde::{Deserialize, Serialize};

use crate::models::product::Product;
use crate::models::recipe::{DietTag, Ingredient, Recipe, RecipeComponent};

/// Input description of one ingredient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientDescription {
    /// Product snapshot to freeze into the ingredient
    pub product: Product,
    /// Quantity in the product's serving unit
    pub amount: f64,
}

/// Input description of a recipe to construct.
///
/// Every field except `name` is optional; omission is silent, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDescription {
    /// Recipe name
    pub name: String,
    /// Recipe image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Dietary tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeSet<DietTag>>,
    /// Ingredients in presentation order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<IngredientDescription>>,
}

impl RecipeDescription {
    /// Minimal description carrying only a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: None,
            description: None,
            tags: None,
            ingredients: None,
        }
    }
}

/// Stepwise recipe builder.
///
/// `build()` returns the accumulated recipe and implicitly resets the
/// builder, so a single instance may be reused sequentially for independent
/// constructions.
#[derive(Debug)]
pub struct RecipeBuilder {
    recipe: Recipe,
}

impl Default for RecipeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeBuilder {
    /// Create a builder holding a fresh, unnamed recipe
    #[must_use]
    pub fn new() -> Self {
        Self {
            recipe: Recipe::new(""),
        }
    }

    /// Discard accumulated state and start over
    pub fn reset(&mut self) {
        self.recipe = Recipe::new("");
    }

    /// Set the recipe name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.recipe.name = name.into();
    }

    /// Set the recipe image URL
    pub fn set_image(&mut self, url: impl Into<String>) {
        self.recipe.image_url = Some(url.into());
    }

    /// Set the free-form description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.recipe.description = Some(description.into());
    }

    /// Replace the diet tag set
    pub fn set_diet_tags(&mut self, tags: BTreeSet<DietTag>) {
        self.recipe.tags = tags;
    }

    /// Append one ingredient, freezing its product snapshot
    pub fn add_ingredient(&mut self, description: IngredientDescription) {
        self.recipe
            .components
            .push(RecipeComponent::Ingredient(Ingredient::new(
                description.product,
                description.amount,
            )));
    }

    /// Return the accumulated recipe and reset the builder
    #[must_use]
    pub fn build(&mut self) -> Recipe {
        mem::replace(&mut self.recipe, Recipe::new(""))
    }
}

/// Drives a [`RecipeBuilder`] through the standard construction sequence.
#[derive(Debug, Default)]
pub struct RecipeDirector {
    builder: RecipeBuilder,
}

impl RecipeDirector {
    /// Create a director with its own builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a recipe from a description.
    ///
    /// The name is always applied; the image only when present and
    /// non-empty; tags and description only when present; then each
    /// ingredient in order. No semantic validation happens here.
    pub fn construct(&mut self, description: &RecipeDescription) -> Recipe {
        self.builder.reset();
        self.builder.set_name(&description.name);

        if let Some(url) = description.image_url.as_deref() {
            if !url.is_empty() {
                self.builder.set_image(url);
            }
        }
        if let Some(tags) = &description.tags {
            self.builder.set_diet_tags(tags.clone());
        }
        if let Some(text) = &description.description {
            self.builder.set_description(text);
        }
        if let Some(ingredients) = &description.ingredients {
            for ingredient in ingredients {
                self.builder.add_ingredient(ingredient.clone());
            }
        }

        self.builder.build()
    }
}
