// ABOUTME: Frozen product nutrient snapshot captured when an ingredient is added
// ABOUTME: Defines the Product value type with per-100-unit nutrient figures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

use serde::{Deserialize, Serialize};

/// A frozen nutrient snapshot of a catalog product.
///
/// Captured by value when an ingredient is added to a recipe: later catalog
/// edits must not retroactively change historical recipes or diary entries.
/// Nutrient figures are defined per 100 units of `serving_unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product name
    pub name: String,
    /// Brand name (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Shopping category (produce, dairy, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Identifier in the external nutrition catalog, when the product
    /// originated there
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Product image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Serving size amount
    pub serving_size: f64,
    /// Serving unit (g, ml, etc.)
    pub serving_unit: String,
    /// Calories per 100 serving units
    pub calories_per_100: f64,
    /// Protein per 100 serving units (grams)
    pub protein_per_100: f64,
    /// Fat per 100 serving units (grams)
    pub fat_per_100: f64,
    /// Carbohydrates per 100 serving units (grams)
    pub carbs_per_100: f64,
}

impl Product {
    /// Grouping key for shopping-list aggregation: the external catalog id
    /// when present and non-empty, else the product name.
    #[must_use]
    pub fn shopping_key(&self) -> &str {
        match self.external_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => &self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, external_id: Option<&str>) -> Product {
        Product {
            name: name.to_owned(),
            brand: None,
            category: None,
            external_id: external_id.map(str::to_owned),
            image_url: None,
            serving_size: 100.0,
            serving_unit: "g".to_owned(),
            calories_per_100: 52.0,
            protein_per_100: 0.3,
            fat_per_100: 0.2,
            carbs_per_100: 14.0,
        }
    }

    #[test]
    fn test_shopping_key_prefers_external_id() {
        assert_eq!(product("Apple", Some("off:123")).shopping_key(), "off:123");
    }

    #[test]
    fn test_shopping_key_falls_back_to_name() {
        assert_eq!(product("Apple", None).shopping_key(), "Apple");
        assert_eq!(product("Apple", Some("")).shopping_key(), "Apple");
    }
}
