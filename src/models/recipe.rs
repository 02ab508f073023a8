// ABOUTME: Recipe composite tree with recursive on-demand nutrient aggregation
// ABOUTME: Defines Ingredient, Recipe, RecipeComponent, DietTag, and NutrientTotals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

//! # Recipe Composite Model
//!
//! A [`Recipe`] holds an ordered sequence of [`RecipeComponent`]s, each of
//! which is either a leaf [`Ingredient`] or another nested [`Recipe`].
//! Nutrient totals are never stored; they are recomputed on demand by
//! recursive summation, so edits deep inside a nested recipe are always
//! reflected in the totals of every recipe that contains it.
//!
//! Components are owned by value. A recipe therefore cannot contain itself,
//! directly or transitively, and traversal needs no cycle guard.

use std::collections::BTreeSet;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::nutrition::REFERENCE_AMOUNT;
use crate::models::product::Product;

/// Dietary classification tags attached to a recipe
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DietTag {
    /// No animal products
    Vegan,
    /// No meat or fish
    Vegetarian,
    /// No meat, fish allowed
    Pescatarian,
    /// No gluten-containing grains
    GlutenFree,
    /// No lactose
    LactoseFree,
    /// No nuts
    NutFree,
    /// Reduced carbohydrate content
    LowCarb,
    /// Elevated protein content
    HighProtein,
    /// Ketogenic macro profile
    Keto,
}

/// Aggregated nutrient figures for a component tree.
///
/// Additive so recipe totals compose by plain summation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    /// Total calories
    pub calories: f64,
    /// Total protein in grams
    pub protein_g: f64,
    /// Total fat in grams
    pub fat_g: f64,
    /// Total carbohydrates in grams
    pub carbs_g: f64,
}

impl Add for NutrientTotals {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein_g: self.protein_g + other.protein_g,
            fat_g: self.fat_g + other.fat_g,
            carbs_g: self.carbs_g + other.carbs_g,
        }
    }
}

impl AddAssign for NutrientTotals {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for NutrientTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Leaf of the composite tree: a quantity of one product.
///
/// The product is a value snapshot taken at add-time, not a live reference
/// to a mutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique identifier of this ingredient occurrence
    pub id: Uuid,
    /// Frozen product snapshot
    pub product: Product,
    /// Quantity in the product's serving unit
    pub amount: f64,
}

impl Ingredient {
    /// Create an ingredient from a product snapshot and amount
    #[must_use]
    pub fn new(product: Product, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            product,
            amount,
        }
    }

    /// Nutrient totals for this quantity of the product.
    ///
    /// Product figures are per 100 serving units; `amount` is in the same
    /// unit.
    #[must_use]
    pub fn nutrient_totals(&self) -> NutrientTotals {
        let factor = self.amount / REFERENCE_AMOUNT;
        NutrientTotals {
            calories: self.product.calories_per_100 * factor,
            protein_g: self.product.protein_per_100 * factor,
            fat_g: self.product.fat_per_100 * factor,
            carbs_g: self.product.carbs_per_100 * factor,
        }
    }
}

/// Composite node: a named recipe owned by a user, containing an ordered
/// sequence of components that may themselves be recipes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: Uuid,
    /// Recipe name
    pub name: String,
    /// Identity the recipe is scoped to for authorization.
    /// `Uuid::nil()` means no owner has been assigned yet.
    pub owner_id: Uuid,
    /// Recipe image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Dietary classification tags
    pub tags: BTreeSet<DietTag>,
    /// Ordered component sequence; duplicates are permitted
    pub components: Vec<RecipeComponent>,
    /// When the recipe was created
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Create an empty recipe with the given name and no owner
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            owner_id: Uuid::nil(),
            image_url: None,
            description: None,
            tags: BTreeSet::new(),
            components: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Append a component to the ordered sequence
    pub fn add_component(&mut self, component: RecipeComponent) {
        self.components.push(component);
    }

    /// Remove the first component with the given id, returning it.
    ///
    /// Returns `None` when no top-level component has that id; nested
    /// components are not searched.
    pub fn remove_component(&mut self, id: Uuid) -> Option<RecipeComponent> {
        let index = self.components.iter().position(|c| c.id() == id)?;
        Some(self.components.remove(index))
    }

    /// Recursive nutrient totals over every component.
    ///
    /// A nested recipe contributes its own recursive total. Always computed
    /// on demand; never cached on the recipe.
    #[must_use]
    pub fn nutrient_totals(&self) -> NutrientTotals {
        self.components
            .iter()
            .map(RecipeComponent::nutrient_totals)
            .sum()
    }

    /// Total calories across the component tree
    #[must_use]
    pub fn calories(&self) -> f64 {
        self.nutrient_totals().calories
    }

    /// Total protein in grams across the component tree
    #[must_use]
    pub fn protein_g(&self) -> f64 {
        self.nutrient_totals().protein_g
    }

    /// Total fat in grams across the component tree
    #[must_use]
    pub fn fat_g(&self) -> f64 {
        self.nutrient_totals().fat_g
    }

    /// Total carbohydrates in grams across the component tree
    #[must_use]
    pub fn carbs_g(&self) -> f64 {
        self.nutrient_totals().carbs_g
    }
}

/// A node in the recipe composite tree.
///
/// Closed sum type: every traversal matches exhaustively, so adding a
/// variant is a compile-visible change everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecipeComponent {
    /// Leaf: a quantity of one product
    Ingredient(Ingredient),
    /// Composite: a nested recipe contributing its own recursive total
    Recipe(Recipe),
}

impl RecipeComponent {
    /// Identifier of the underlying ingredient or recipe
    #[must_use]
    pub const fn id(&self) -> Uuid {
        match self {
            Self::Ingredient(ingredient) => ingredient.id,
            Self::Recipe(recipe) => recipe.id,
        }
    }

    /// Display name of the underlying ingredient or recipe
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Ingredient(ingredient) => &ingredient.product.name,
            Self::Recipe(recipe) => &recipe.name,
        }
    }

    /// Nutrient totals of this node: the ingredient's own figures, or the
    /// nested recipe's recursive total
    #[must_use]
    pub fn nutrient_totals(&self) -> NutrientTotals {
        match self {
            Self::Ingredient(ingredient) => ingredient.nutrient_totals(),
            Self::Recipe(recipe) => recipe.nutrient_totals(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(calories: f64) -> Product {
        Product {
            name: "Oats".to_owned(),
            brand: None,
            category: None,
            external_id: None,
            image_url: None,
            serving_size: 100.0,
            serving_unit: "g".to_owned(),
            calories_per_100: calories,
            protein_per_100: 13.0,
            fat_per_100: 7.0,
            carbs_per_100: 68.0,
        }
    }

    #[test]
    fn test_empty_recipe_totals_are_zero() {
        let recipe = Recipe::new("Empty");
        assert_eq!(recipe.nutrient_totals(), NutrientTotals::default());
    }

    #[test]
    fn test_ingredient_scales_per_100_units() {
        let ingredient = Ingredient::new(product(389.0), 50.0);
        let totals = ingredient.nutrient_totals();
        assert!((totals.calories - 194.5).abs() < f64::EPSILON);
        assert!((totals.protein_g - 6.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_remove_component_returns_first_match() {
        let mut recipe = Recipe::new("Porridge");
        let ingredient = Ingredient::new(product(389.0), 40.0);
        let id = ingredient.id;
        recipe.add_component(RecipeComponent::Ingredient(ingredient.clone()));
        recipe.add_component(RecipeComponent::Ingredient(ingredient));

        // Duplicates share an id; only the first occurrence is removed
        assert!(recipe.remove_component(id).is_some());
        assert_eq!(recipe.components.len(), 1);
        assert!(recipe.remove_component(Uuid::new_v4()).is_none());
    }
}
