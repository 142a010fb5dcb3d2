// ABOUTME: Reference food composition and recipe ingredient models
// ABOUTME: FoodItem (per 100 g), IngredientLine, RecipeIngredient, RecipeNutrition, FoodCatalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Reference nutrition of a food, per 100 g
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Food identifier; nil for foods given inline without one
    #[serde(default)]
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Energy per 100 g (kcal)
    pub calories: f64,
    /// Protein per 100 g (grams)
    pub protein_g: f64,
    /// Carbohydrates per 100 g (grams)
    pub carbs_g: f64,
    /// Fat per 100 g (grams)
    pub fat_g: f64,
}

impl FoodItem {
    /// Create a food item with a fresh identifier
    #[must_use]
    pub fn new(name: impl Into<String>, calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }
}

/// Ingredient reference as stored by the application: food id plus grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    /// Referenced food item
    pub food_item_id: Uuid,
    /// Amount used (grams)
    pub amount_g: f64,
}

/// Ingredient with its food composition resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Food composition
    pub food_item: FoodItem,
    /// Amount used (grams)
    pub amount_g: f64,
}

impl RecipeIngredient {
    /// Pair a food item with an amount
    #[must_use]
    pub const fn new(food_item: FoodItem, amount_g: f64) -> Self {
        Self {
            food_item,
            amount_g,
        }
    }
}

/// Per-serving recipe nutrition; derived and recomputable, never authoritative
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RecipeNutrition {
    /// Energy per serving (kcal, whole number)
    pub calories_per_serving: u32,
    /// Protein per serving (grams, one decimal)
    pub protein_per_serving: f64,
    /// Carbohydrates per serving (grams, one decimal)
    pub carbs_per_serving: f64,
    /// Fat per serving (grams, one decimal)
    pub fat_per_serving: f64,
}

impl RecipeNutrition {
    /// Whether the aggregate carries nothing (e.g. an empty ingredient list)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calories_per_serving == 0
            && self.protein_per_serving.abs() < f64::EPSILON
            && self.carbs_per_serving.abs() < f64::EPSILON
            && self.fat_per_serving.abs() < f64::EPSILON
    }
}

/// Read-only lookup of reference foods owned by the surrounding application
pub trait FoodCatalog {
    /// Find a food by id
    fn food_item(&self, id: Uuid) -> Option<&FoodItem>;

    /// Resolve stored ingredient lines into ingredients, in order
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for the first line whose food is unknown
    fn resolve(&self, lines: &[IngredientLine]) -> AppResult<Vec<RecipeIngredient>> {
        lines
            .iter()
            .map(|line| {
                self.food_item(line.food_item_id)
                    .map(|food| RecipeIngredient::new(food.clone(), line.amount_g))
                    .ok_or_else(|| AppError::not_found(format!("food item {}", line.food_item_id)))
            })
            .collect()
    }
}

impl FoodCatalog for HashMap<Uuid, FoodItem> {
    fn food_item(&self, id: Uuid) -> Option<&FoodItem> {
        self.get(&id)
    }
}

impl FoodCatalog for [FoodItem] {
    fn food_item(&self, id: Uuid) -> Option<&FoodItem> {
        self.iter().find(|food| food.id == id)
    }
}
