// ABOUTME: Recipe nutrition aggregator turning per-100 g food composition into per-serving values
// ABOUTME: Single-recipe aggregation, catalog-resolved aggregation, and rayon batch aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe Nutrition Aggregation
//!
//! `total = sum(food.per_100g x amount_g / 100)`, divided by servings.
//! Calories are rounded to whole kcal, macros to one decimal gram.

use super::models::Recipe;
use nutriplan_core::constants::food::{MACRO_DECIMAL_PLACES, REFERENCE_AMOUNT_G};
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{FoodCatalog, IngredientLine, RecipeIngredient, RecipeNutrition};
use rayon::prelude::*;
use tracing::debug;

/// Raw (unrounded) recipe totals
#[derive(Debug, Clone, Copy, Default)]
struct NutritionTotals {
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
}

impl NutritionTotals {
    fn add_ingredient(mut self, ingredient: &RecipeIngredient) -> Self {
        let factor = ingredient.amount_g / REFERENCE_AMOUNT_G;
        let food = &ingredient.food_item;
        self.calories = food.calories.mul_add(factor, self.calories);
        self.protein_g = food.protein_g.mul_add(factor, self.protein_g);
        self.carbs_g = food.carbs_g.mul_add(factor, self.carbs_g);
        self.fat_g = food.fat_g.mul_add(factor, self.fat_g);
        self
    }
}

/// Per-serving nutrition of a list of ingredients
///
/// An empty ingredient list yields an all-zero result.
///
/// # Errors
///
/// Returns `InvalidInput` if `servings` is zero
pub fn calculate_recipe_nutrition(
    ingredients: &[RecipeIngredient],
    servings: u32,
) -> AppResult<RecipeNutrition> {
    if servings == 0 {
        return Err(AppError::invalid_input(
            "servings must be greater than zero",
        ));
    }

    let totals = ingredients
        .iter()
        .fold(NutritionTotals::default(), NutritionTotals::add_ingredient);
    let servings = f64::from(servings);

    Ok(RecipeNutrition {
        calories_per_serving: (totals.calories / servings).round().max(0.0) as u32,
        protein_per_serving: round_macro(totals.protein_g / servings),
        carbs_per_serving: round_macro(totals.carbs_g / servings),
        fat_per_serving: round_macro(totals.fat_g / servings),
    })
}

/// Resolve stored ingredient lines through a food catalog, then aggregate
///
/// # Errors
///
/// Returns `ResourceNotFound` for unknown foods and `InvalidInput` for zero servings
pub fn calculate_recipe_nutrition_from_lines<C: FoodCatalog + ?Sized>(
    catalog: &C,
    lines: &[IngredientLine],
    servings: u32,
) -> AppResult<RecipeNutrition> {
    let ingredients = catalog.resolve(lines)?;
    calculate_recipe_nutrition(&ingredients, servings)
}

/// Aggregate many recipes in parallel, results in input order
#[must_use]
pub fn calculate_recipes_parallel(recipes: &[Recipe]) -> Vec<AppResult<RecipeNutrition>> {
    debug!(recipes = recipes.len(), "Aggregating recipe nutrition in parallel");
    recipes
        .par_iter()
        .map(Recipe::nutrition_per_serving)
        .collect()
}

fn round_macro(value: f64) -> f64 {
    let scale = 10_f64.powi(MACRO_DECIMAL_PLACES);
    (value * scale).round() / scale
}
