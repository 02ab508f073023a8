// ABOUTME: Meal plan scheduling models referencing recipes by relationship
// ABOUTME: Defines MealType and MealPlanEntry, the shopping aggregator's traversal root
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::recipe::Recipe;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    Other,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }
}

/// One scheduled meal in a plan, referencing a recipe by relationship.
///
/// Only the recipe reference matters to the shopping aggregator; the
/// scheduling fields exist for the planning surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanEntry {
    /// Unique entry identifier
    pub id: Uuid,
    /// The planned recipe; `None` for placeholder slots
    pub recipe: Option<Recipe>,
    /// Day the meal is planned for
    pub date: NaiveDate,
    /// Planned start time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    /// Planned end time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    /// Which meal of the day this entry fills
    pub meal_type: MealType,
}

impl MealPlanEntry {
    /// Create an entry scheduling a recipe for a given day and meal
    #[must_use]
    pub fn new(recipe: Recipe, date: NaiveDate, meal_type: MealType) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipe: Some(recipe),
            date,
            start_time: None,
            end_time: None,
            meal_type,
        }
    }
}
