// ABOUTME: Shopping list item model produced by the meal-plan aggregator
// ABOUTME: One grouped, summed purchase line per distinct product key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

use serde::{Deserialize, Serialize};

/// One line of a generated shopping list.
///
/// Groups every occurrence of the same product across a meal plan's recipe
/// trees. `is_bought` belongs to the consumer of the list; the aggregator
/// only ever emits it as `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    /// Grouping key: the product's external catalog id, or its name when
    /// no catalog id exists
    pub product_key: String,
    /// Display name, from the first occurrence encountered
    pub name: String,
    /// Summed amount across all occurrences
    pub total_amount: f64,
    /// Serving unit, from the first occurrence encountered
    pub unit: String,
    /// Shopping category, from the first occurrence; empty when the
    /// product has none
    pub category: String,
    /// Whether the item has been bought; owned by the list consumer
    pub is_bought: bool,
}
