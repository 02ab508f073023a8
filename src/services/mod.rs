// ABOUTME: Domain service layer for business logic free of transport concerns
// ABOUTME: Services are reusable from any entry point fronting the core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

//! Domain service layer
//!
//! Protocol-agnostic business logic, designed to be reused from whatever
//! transport fronts the core (REST handlers, CLI, jobs) so business rules
//! stay consistent regardless of the entry point.

/// Recipe lifecycle: construction, validation, storage, shopping lists
pub mod recipes;

pub use recipes::RecipeService;
