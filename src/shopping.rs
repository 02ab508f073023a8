// ABOUTME: Shopping list aggregation over a meal plan's recipe trees
// ABOUTME: Flattens nested recipes into grouped, summed purchase items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

//! # Shopping List Aggregator
//!
//! Walks every recipe tree in a meal plan, records `(product, amount)`
//! pairs at the leaves, groups them by external catalog id (or product
//! name when no id exists), sums amounts per group, and sorts the result
//! by category then name for a scan-friendly, category-grouped list.
//!
//! Name, unit, and category come from the first occurrence of each group
//! key; occurrences sharing a key are assumed to share compatible units
//! and categories.

use std::collections::HashMap;

use crate::models::meal_plan::MealPlanEntry;
use crate::models::product::Product;
use crate::models::recipe::{Recipe, RecipeComponent};
use crate::models::shopping::ShoppingListItem;

/// Generate a grouped, summed shopping list for a meal plan.
///
/// Entries without a recipe contribute nothing. No entries, or entries
/// whose trees contain no ingredients, yield an empty list, never an
/// error.
#[must_use]
pub fn generate_shopping_list(entries: &[MealPlanEntry]) -> Vec<ShoppingListItem> {
    let mut groups: HashMap<String, ShoppingListItem> = HashMap::new();

    for entry in entries {
        if let Some(recipe) = &entry.recipe {
            collect_ingredients(recipe, &mut groups);
        }
    }

    let mut items: Vec<ShoppingListItem> = groups.into_values().collect();
    items.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));
    items
}

/// Recursive descent over one recipe tree. A nested recipe contributes no
/// item itself; only its leaves do.
fn collect_ingredients(recipe: &Recipe, groups: &mut HashMap<String, ShoppingListItem>) {
    for component in &recipe.components {
        match component {
            RecipeComponent::Ingredient(ingredient) => {
                record(&ingredient.product, ingredient.amount, groups);
            }
            RecipeComponent::Recipe(nested) => collect_ingredients(nested, groups),
        }
    }
}

/// Fold one `(product, amount)` occurrence into its group. The first
/// occurrence fixes name, unit, and category.
fn record(product: &Product, amount: f64, groups: &mut HashMap<String, ShoppingListItem>) {
    let key = product.shopping_key().to_owned();
    groups
        .entry(key.clone())
        .and_modify(|item| item.total_amount += amount)
        .or_insert_with(|| ShoppingListItem {
            product_key: key,
            name: product.name.clone(),
            total_amount: amount,
            unit: product.serving_unit.clone(),
            category: product.category.clone().unwrap_or_default(),
            is_bought: false,
        });
}
