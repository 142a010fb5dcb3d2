// ABOUTME: Meal schema models: ordered meals of named items with per-item macro grams
// ABOUTME: MealSchema, Meal, MealItem, MacroTotals, and the editorial reference template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::energy::{KCAL_PER_G_CARBS_INT, KCAL_PER_G_FAT_INT, KCAL_PER_G_PROTEIN_INT};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Single food line within a meal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MealItem {
    /// Food name
    pub name: String,
    /// Free-text amount as shown to the client ("80 g", "1 scoop")
    pub amount: String,
    /// Protein (grams)
    pub protein_g: u32,
    /// Fat (grams)
    pub fat_g: u32,
    /// Carbohydrates (grams)
    pub carbs_g: u32,
    /// Energy (kcal)
    pub kcal: u32,
}

impl MealItem {
    /// Create an item whose kcal is derived from its macros
    ///
    /// Kcal saturates at `u32::MAX` for oversized gram values.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        protein_g: u32,
        fat_g: u32,
        carbs_g: u32,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            protein_g,
            fat_g,
            carbs_g,
            kcal: protein_g
                .saturating_mul(KCAL_PER_G_PROTEIN_INT)
                .saturating_add(fat_g.saturating_mul(KCAL_PER_G_FAT_INT))
                .saturating_add(carbs_g.saturating_mul(KCAL_PER_G_CARBS_INT)),
        }
    }

    fn totals(&self) -> MacroTotals {
        MacroTotals {
            protein_g: u64::from(self.protein_g),
            fat_g: u64::from(self.fat_g),
            carbs_g: u64::from(self.carbs_g),
            kcal: u64::from(self.kcal),
        }
    }
}

/// Named, ordered group of items
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Meal {
    /// Meal name ("Breakfast", "Post-workout", ...)
    pub name: String,
    /// Items in display order
    pub items: Vec<MealItem>,
}

impl Meal {
    /// Create an empty meal
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Append an item
    #[must_use]
    pub fn with_item(mut self, item: MealItem) -> Self {
        self.items.push(item);
        self
    }

    /// Elementwise sum of this meal's items
    #[must_use]
    pub fn totals(&self) -> MacroTotals {
        self.items.iter().map(MealItem::totals).fold(MacroTotals::default(), Add::add)
    }
}

/// Elementwise macro sums over a set of items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Protein (grams)
    pub protein_g: u64,
    /// Fat (grams)
    pub fat_g: u64,
    /// Carbohydrates (grams)
    pub carbs_g: u64,
    /// Energy (kcal)
    pub kcal: u64,
}

impl Add for MacroTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            protein_g: self.protein_g + rhs.protein_g,
            fat_g: self.fat_g + rhs.fat_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            kcal: self.kcal + rhs.kcal,
        }
    }
}

/// Ordered sequence of meals
///
/// Totals are never stored; `totals()` always recomputes them from the items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MealSchema {
    /// Meals in daily order
    pub meals: Vec<Meal>,
}

/// Serializable view of a schema together with its recomputed totals
#[derive(Debug, Clone, Serialize)]
pub struct MealSchemaSummary<'a> {
    /// Meals in daily order
    pub meals: &'a [Meal],
    /// Totals recomputed at serialization time
    pub totals: MacroTotals,
}

impl MealSchema {
    /// Create a schema from meals
    #[must_use]
    pub const fn new(meals: Vec<Meal>) -> Self {
        Self { meals }
    }

    /// Elementwise sum of all items' macros
    #[must_use]
    pub fn totals(&self) -> MacroTotals {
        self.meals.iter().map(Meal::totals).fold(MacroTotals::default(), Add::add)
    }

    /// Iterate all items in template order
    pub fn items(&self) -> impl Iterator<Item = &MealItem> {
        self.meals.iter().flat_map(|meal| meal.items.iter())
    }

    /// Number of items across all meals
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.meals.iter().map(|meal| meal.items.len()).sum()
    }

    /// Borrowing view with totals, for reporting
    #[must_use]
    pub fn summary(&self) -> MealSchemaSummary<'_> {
        MealSchemaSummary {
            meals: &self.meals,
            totals: self.totals(),
        }
    }

    /// Check the schema is usable as a template
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the schema has no items or a meal has no name
    pub fn validate(&self) -> AppResult<()> {
        if self.item_count() == 0 {
            return Err(AppError::invalid_input(
                "meal schema must contain at least one item",
            ));
        }
        if let Some(index) = self.meals.iter().position(|meal| meal.name.trim().is_empty()) {
            return Err(AppError::invalid_input(format!(
                "meal at position {index} has no name"
            )));
        }
        Ok(())
    }

    /// Editorial reference template: five meals of whole-food items
    ///
    /// Callers pass this (or their own template) explicitly to the
    /// distribution engine.
    #[must_use]
    pub fn reference_template() -> Self {
        Self::new(vec![
            Meal::new("Breakfast")
                .with_item(MealItem::new("Rolled oats", "80 g", 10, 6, 54))
                .with_item(MealItem::new("Whey protein", "30 g", 24, 2, 2))
                .with_item(MealItem::new("Blueberries", "100 g", 1, 0, 12)),
            Meal::new("Lunch")
                .with_item(MealItem::new("Chicken breast", "150 g", 46, 5, 0))
                .with_item(MealItem::new("Basmati rice (cooked)", "200 g", 5, 1, 56))
                .with_item(MealItem::new("Olive oil", "10 g", 0, 10, 0))
                .with_item(MealItem::new("Mixed vegetables", "200 g", 4, 0, 14)),
            Meal::new("Snack")
                .with_item(MealItem::new("Greek yogurt (0%)", "200 g", 20, 0, 8))
                .with_item(MealItem::new("Almonds", "20 g", 4, 10, 4)),
            Meal::new("Dinner")
                .with_item(MealItem::new("Salmon fillet", "150 g", 30, 20, 0))
                .with_item(MealItem::new("Potatoes", "250 g", 5, 0, 43))
                .with_item(MealItem::new("Broccoli", "150 g", 4, 1, 10)),
            Meal::new("Evening")
                .with_item(MealItem::new("Cottage cheese", "150 g", 18, 6, 5)),
        ])
    }
}
