// ABOUTME: Recipe model with ordered, food-resolved ingredients and a serving count
// ABOUTME: Builder-style construction, total weight, scaling, and per-serving nutrition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::aggregator::calculate_recipe_nutrition;
use nutriplan_core::errors::AppResult;
use nutriplan_core::models::{RecipeIngredient, RecipeNutrition};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recipe: ordered ingredients producing a number of servings
///
/// Nutrition is never stored on the recipe; it is derived on demand with
/// [`Recipe::nutrition_per_serving`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Identifier assigned by the owning application, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Recipe name
    pub name: String,
    /// Number of servings this recipe makes
    pub servings: u32,
    /// Ingredients in display order
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    /// Create a new recipe with no ingredients
    #[must_use]
    pub fn new(name: impl Into<String>, servings: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            servings,
            ingredients: Vec::new(),
        }
    }

    /// Add an ingredient
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: RecipeIngredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Add multiple ingredients
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: Vec<RecipeIngredient>) -> Self {
        self.ingredients.extend(ingredients);
        self
    }

    /// Get total weight of all ingredients in grams
    #[must_use]
    pub fn total_weight_grams(&self) -> f64 {
        self.ingredients.iter().map(|i| i.amount_g).sum()
    }

    /// Per-serving nutrition derived from the ingredients
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the recipe has zero servings
    pub fn nutrition_per_serving(&self) -> AppResult<RecipeNutrition> {
        calculate_recipe_nutrition(&self.ingredients, self.servings)
    }

    /// Scale recipe to a different number of servings
    ///
    /// Ingredient amounts scale proportionally, so nutrition per serving is
    /// unchanged. Recipes with zero servings cannot be scaled and are returned
    /// as-is.
    #[must_use]
    pub fn scaled(&self, new_servings: u32) -> Self {
        if new_servings == self.servings || self.servings == 0 || new_servings == 0 {
            return self.clone();
        }

        let scale_factor = f64::from(new_servings) / f64::from(self.servings);

        let scaled_ingredients = self
            .ingredients
            .iter()
            .map(|i| RecipeIngredient::new(i.food_item.clone(), i.amount_g * scale_factor))
            .collect();

        Self {
            servings: new_servings,
            ingredients: scaled_ingredients,
            ..self.clone()
        }
    }
}
