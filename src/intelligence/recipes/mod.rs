// ABOUTME: Recipe module grouping the recipe model and the nutrition aggregator
// ABOUTME: Per-serving nutrition is always derived from ingredients, never stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Per-serving nutrition aggregation
pub mod aggregator;
/// Recipe data model
pub mod models;

pub use aggregator::{
    calculate_recipe_nutrition, calculate_recipe_nutrition_from_lines, calculate_recipes_parallel,
};
pub use models::Recipe;
