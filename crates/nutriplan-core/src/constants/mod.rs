// ABOUTME: Nutrition constants shared by the engine and its callers
// ABOUTME: Energy density per macronutrient and food reference amounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Atwater energy factors and reference quantities. These values are fixed by
//! convention rather than tuned, so they live here instead of in the engine
//! configuration.

/// Energy density constants
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_G_FAT: f64 = 9.0;
    /// Integer form of the protein factor for exact integer arithmetic
    pub const KCAL_PER_G_PROTEIN_INT: u32 = 4;
    /// Integer form of the carbohydrate factor
    pub const KCAL_PER_G_CARBS_INT: u32 = 4;
    /// Integer form of the fat factor
    pub const KCAL_PER_G_FAT_INT: u32 = 9;
}

/// Food reference constants
pub mod food {
    /// Food composition tables are expressed per this many grams
    pub const REFERENCE_AMOUNT_G: f64 = 100.0;
    /// Decimal places kept for per-serving macro grams
    pub const MACRO_DECIMAL_PLACES: i32 = 1;
}

/// Activity code scale used by the phase engine (kcal per kg of body weight)
pub mod activity {
    /// Lowest activity code (sedentary)
    pub const MIN_KCAL_PER_KG: u32 = 25;
    /// Highest activity code (very active and above)
    pub const MAX_KCAL_PER_KG: u32 = 40;
    /// Distance between two adjacent activity tiers
    pub const TIER_STEP_KCAL_PER_KG: i32 = 5;
}
