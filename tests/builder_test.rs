// ABOUTME: Integration tests for the recipe builder and director
// ABOUTME: Tests round trips, optional-field policy, and sequential builder reuse
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

//! Tests for recipe construction:
//! - Full and minimal description round trips
//! - Silent omission of optional fields, empty image skipped
//! - One director reused for independent constructions

use std::collections::BTreeSet;

use nutriplan::builder::{IngredientDescription, RecipeBuilder, RecipeDescription, RecipeDirector};
use nutriplan::models::{DietTag, Product, RecipeComponent};
use uuid::Uuid;

fn product(name: &str) -> Product {
    Product {
        name: name.to_owned(),
        brand: Some("Acme".to_owned()),
        category: Some("pantry".to_owned()),
        external_id: None,
        image_url: None,
        serving_size: 100.0,
        serving_unit: "g".to_owned(),
        calories_per_100: 250.0,
        protein_per_100: 8.0,
        fat_per_100: 4.0,
        carbs_per_100: 40.0,
    }
}

// ============================================================================
// Round Trip Tests
// ============================================================================

#[test]
fn test_full_description_round_trip() {
    let tags: BTreeSet<DietTag> = [DietTag::Vegetarian, DietTag::HighProtein].into();
    let description = RecipeDescription {
        name: "Protein Pancakes".to_owned(),
        image_url: Some("https://cdn.example.com/pancakes.jpg".to_owned()),
        description: Some("Weekend breakfast".to_owned()),
        tags: Some(tags.clone()),
        ingredients: Some(vec![
            IngredientDescription {
                product: product("Oat Flour"),
                amount: 120.0,
            },
            IngredientDescription {
                product: product("Egg Whites"),
                amount: 200.0,
            },
        ]),
    };

    let recipe = RecipeDirector::new().construct(&description);

    assert_eq!(recipe.name, "Protein Pancakes");
    assert_eq!(
        recipe.image_url.as_deref(),
        Some("https://cdn.example.com/pancakes.jpg")
    );
    assert_eq!(recipe.description.as_deref(), Some("Weekend breakfast"));
    assert_eq!(recipe.tags, tags);
    assert_eq!(recipe.components.len(), 2);

    // Ingredient order and amounts survive construction
    match &recipe.components[0] {
        RecipeComponent::Ingredient(ingredient) => {
            assert_eq!(ingredient.product.name, "Oat Flour");
            assert!((ingredient.amount - 120.0).abs() < f64::EPSILON);
        }
        RecipeComponent::Recipe(_) => panic!("expected an ingredient leaf"),
    }
    match &recipe.components[1] {
        RecipeComponent::Ingredient(ingredient) => {
            assert_eq!(ingredient.product.name, "Egg Whites");
            assert!((ingredient.amount - 200.0).abs() < f64::EPSILON);
        }
        RecipeComponent::Recipe(_) => panic!("expected an ingredient leaf"),
    }
}

#[test]
fn test_minimal_description_round_trip() {
    let recipe = RecipeDirector::new().construct(&RecipeDescription::named("Just a Name"));

    assert_eq!(recipe.name, "Just a Name");
    assert_eq!(recipe.image_url, None);
    assert_eq!(recipe.description, None);
    assert!(recipe.tags.is_empty());
    assert!(recipe.components.is_empty());
    // No semantic validation at this stage: the missing owner is permitted
    assert_eq!(recipe.owner_id, Uuid::nil());
}

// ============================================================================
// Optional Field Policy Tests
// ============================================================================

#[test]
fn test_empty_image_url_is_skipped() {
    let mut description = RecipeDescription::named("No Image");
    description.image_url = Some(String::new());

    let recipe = RecipeDirector::new().construct(&description);
    assert_eq!(recipe.image_url, None);
}

#[test]
fn test_empty_ingredient_list_is_permitted() {
    let mut description = RecipeDescription::named("Empty");
    description.ingredients = Some(Vec::new());

    let recipe = RecipeDirector::new().construct(&description);
    assert!(recipe.components.is_empty());
}

// ============================================================================
// Builder Reuse Tests
// ============================================================================

#[test]
fn test_build_resets_builder_state() {
    let mut builder = RecipeBuilder::new();
    builder.set_name("First");
    builder.set_image("https://cdn.example.com/first.jpg");
    builder.add_ingredient(IngredientDescription {
        product: product("Salt"),
        amount: 5.0,
    });

    let first = builder.build();
    assert_eq!(first.name, "First");
    assert_eq!(first.components.len(), 1);

    // The same builder starts clean for the next construction
    builder.set_name("Second");
    let second = builder.build();
    assert_eq!(second.name, "Second");
    assert_eq!(second.image_url, None);
    assert!(second.components.is_empty());
    assert_ne!(first.id, second.id);
}

#[test]
fn test_director_reused_for_independent_constructions() {
    let mut director = RecipeDirector::new();

    let mut tagged = RecipeDescription::named("Tagged");
    tagged.tags = Some([DietTag::Vegan].into());

    let first = director.construct(&tagged);
    let second = director.construct(&RecipeDescription::named("Untagged"));

    assert_eq!(first.tags.len(), 1);
    // Nothing leaks from the previous construction
    assert!(second.tags.is_empty());
}
