// ABOUTME: Integration tests for the recipe lifecycle service facade
// ABOUTME: Tests construct-validate-store wiring through the authorization decorator
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

//! End-to-end tests for [`RecipeService`]:
//! - `create_recipe` constructs, validates, and stores with the caller as
//!   owner
//! - Validation failures stop storage
//! - Reads, deletes, and image updates flow through the decorator

use std::sync::Arc;

use chrono::NaiveDate;
use nutriplan::builder::{IngredientDescription, RecipeDescription};
use nutriplan::context::StaticCallerContext;
use nutriplan::decorators::AuthorizedRecipeRepository;
use nutriplan::errors::{AppError, AuthorizationError, ValidationError};
use nutriplan::models::{MealPlanEntry, MealType, Product};
use nutriplan::repository::memory::InMemoryRecipeRepository;
use nutriplan::services::RecipeService;
use uuid::Uuid;

type AuthorizedService = RecipeService<AuthorizedRecipeRepository<InMemoryRecipeRepository>>;

fn product(name: &str) -> Product {
    Product {
        name: name.to_owned(),
        brand: None,
        category: Some("produce".to_owned()),
        external_id: None,
        image_url: None,
        serving_size: 100.0,
        serving_unit: "g".to_owned(),
        calories_per_100: 34.0,
        protein_per_100: 2.8,
        fat_per_100: 0.4,
        carbs_per_100: 7.0,
    }
}

fn description(name: &str) -> RecipeDescription {
    let mut description = RecipeDescription::named(name);
    description.ingredients = Some(vec![IngredientDescription {
        product: product("Broccoli"),
        amount: 300.0,
    }]);
    description
}

fn service_for(caller: StaticCallerContext, store: InMemoryRecipeRepository) -> AuthorizedService {
    let context = Arc::new(caller);
    RecipeService::new(
        AuthorizedRecipeRepository::new(store, context.clone()),
        context,
    )
}

// ============================================================================
// Create Tests
// ============================================================================

#[tokio::test]
async fn test_create_recipe_stamps_caller_as_owner() {
    let caller = Uuid::new_v4();
    let store = InMemoryRecipeRepository::new();
    let service = service_for(StaticCallerContext::user(caller), store.clone());

    let created = service
        .create_recipe(&description("Roast Broccoli"))
        .await
        .unwrap();

    assert_eq!(created.owner_id, caller);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_create_recipe_rejects_empty_description() {
    let store = InMemoryRecipeRepository::new();
    let service = service_for(StaticCallerContext::user(Uuid::new_v4()), store.clone());

    // Name only, no ingredients: the pipeline stops the store
    let error = service
        .create_recipe(&RecipeDescription::named("Hollow"))
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        AppError::Validation(ValidationError::EmptyIngredients)
    ));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_create_recipe_requires_authentication() {
    let store = InMemoryRecipeRepository::new();
    let service = service_for(StaticCallerContext::anonymous(), store.clone());

    let error = service
        .create_recipe(&description("Orphan"))
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        AppError::Authorization(AuthorizationError::Unauthenticated)
    ));
    assert!(store.is_empty());
}

// ============================================================================
// Read / Mutate Tests
// ============================================================================

#[tokio::test]
async fn test_round_trip_through_service() {
    let caller = Uuid::new_v4();
    let service = service_for(
        StaticCallerContext::user(caller),
        InMemoryRecipeRepository::new(),
    );

    let created = service.create_recipe(&description("Soup")).await.unwrap();

    let fetched = service.recipe(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Soup");

    let owned = service.recipes_for_owner(caller).await.unwrap();
    assert_eq!(owned.len(), 1);

    service
        .update_recipe_image(created.id, "soup.jpg")
        .await
        .unwrap();
    let updated = service.recipe(created.id).await.unwrap().unwrap();
    assert_eq!(updated.image_url.as_deref(), Some("soup.jpg"));

    service.delete_recipe(created.id).await.unwrap();
    assert!(service.recipe(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_listing_a_foreign_owner_is_denied() {
    let service = service_for(
        StaticCallerContext::user(Uuid::new_v4()),
        InMemoryRecipeRepository::new(),
    );

    let error = service
        .recipes_for_owner(Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        AppError::Authorization(AuthorizationError::NotOwner)
    ));
}

// ============================================================================
// Shopping List Tests
// ============================================================================

#[tokio::test]
async fn test_shopping_list_from_created_recipe() {
    let caller = Uuid::new_v4();
    let service = service_for(
        StaticCallerContext::user(caller),
        InMemoryRecipeRepository::new(),
    );

    let created = service
        .create_recipe(&description("Stir Fry"))
        .await
        .unwrap();
    let plan = vec![MealPlanEntry::new(
        created,
        NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
        MealType::Lunch,
    )];

    let items = AuthorizedService::shopping_list(&plan);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Broccoli");
}
