// ABOUTME: Calorie and macronutrient target models produced by the engine
// ABOUTME: EnergyEstimate, NutritionCalculation, and MacroPercentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::energy::{KCAL_PER_G_CARBS_INT, KCAL_PER_G_FAT_INT, KCAL_PER_G_PROTEIN_INT};
use serde::{Deserialize, Serialize};

/// Resting and total daily energy expenditure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    /// Basal Metabolic Rate (kcal/day), unrounded
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day), rounded
    pub tdee: u32,
}

/// Atomic calorie/macro target
///
/// `calories` is the energy of the rounded macros, so
/// `calories == protein_g*4 + fat_g*9 + carbs_g*4` holds exactly.
/// `target_calories` keeps the integer goal the macros were derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NutritionCalculation {
    /// Daily calories delivered by the macro targets
    pub calories: u32,
    /// Daily protein target (grams)
    pub protein_g: u32,
    /// Daily fat target (grams)
    pub fat_g: u32,
    /// Daily carbohydrate target (grams)
    pub carbs_g: u32,
    /// Maintenance energy the target was adjusted from (kcal/day)
    pub base_calories: u32,
    /// Calorie goal the macros were derived from (kcal/day)
    pub target_calories: u32,
}

impl NutritionCalculation {
    /// Energy of the macro targets using Atwater factors
    #[must_use]
    pub const fn macro_calories(&self) -> u32 {
        self.protein_g
            .saturating_mul(KCAL_PER_G_PROTEIN_INT)
            .saturating_add(self.fat_g.saturating_mul(KCAL_PER_G_FAT_INT))
            .saturating_add(self.carbs_g.saturating_mul(KCAL_PER_G_CARBS_INT))
    }

    /// Signed gap between the realised calories and the goal
    #[must_use]
    pub fn deviation_from_target(&self) -> i64 {
        i64::from(self.calories) - i64::from(self.target_calories)
    }

    /// Energy share of each macro
    #[must_use]
    pub fn percentages(&self) -> MacroPercentages {
        MacroPercentages::from_calculation(self)
    }
}

/// Macronutrient percentage breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroPercentages {
    /// Protein as percentage of total calories
    pub protein_percent: f64,
    /// Carbohydrates as percentage of total calories
    pub carbs_percent: f64,
    /// Fat as percentage of total calories
    pub fat_percent: f64,
}

impl MacroPercentages {
    /// Compute percentages from a calculation; all zero when it carries no energy
    #[must_use]
    pub fn from_calculation(calc: &NutritionCalculation) -> Self {
        let total = f64::from(calc.macro_calories());
        if total <= 0.0 {
            return Self {
                protein_percent: 0.0,
                carbs_percent: 0.0,
                fat_percent: 0.0,
            };
        }
        Self {
            protein_percent: f64::from(calc.protein_g * KCAL_PER_G_PROTEIN_INT) / total * 100.0,
            carbs_percent: f64::from(calc.carbs_g * KCAL_PER_G_CARBS_INT) / total * 100.0,
            fat_percent: f64::from(calc.fat_g * KCAL_PER_G_FAT_INT) / total * 100.0,
        }
    }
}
