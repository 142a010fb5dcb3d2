// ABOUTME: Energy estimation and macro target calculation using Mifflin-St Jeor and goal tables
// ABOUTME: BMR, TDEE, goal calories, and protein/fat/carbohydrate gram targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Energy estimator and macro target calculator. Inputs are assumed to be
//! validated by the caller (`BodyMetrics::validate` is available for that);
//! nothing here re-validates or fails.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use crate::config::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacroTargetConfig,
    NutritionEngineConfig,
};
use nutriplan_core::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use nutriplan_core::models::{
    ActivityLevel, BodyMetrics, EnergyEstimate, Goal, IntensityLevel, MacroPercentages,
    NutritionCalculation,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Complete daily target calculation result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyNutritionTargets {
    /// Resting and total energy expenditure
    pub energy: EnergyEstimate,
    /// Calorie and macro targets; `base_calories` is the TDEE
    pub nutrition: NutritionCalculation,
    /// Energy share of each macro
    pub macro_percentages: MacroPercentages,
    /// Activity level used
    pub activity_level: ActivityLevel,
    /// Goal used
    pub goal: Goal,
    /// Intensity used
    pub intensity: IntensityLevel,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Formula: `BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(y) + s`,
/// where `s` is +5 for males, -161 for females and -78 otherwise.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(metrics: &BodyMetrics, config: &BmrConfig) -> f64 {
    let weight_component = config.msj_weight_coef * metrics.weight_kg;
    let height_component = config.msj_height_coef * metrics.height_cm;
    let age_component = config.msj_age_coef * f64::from(metrics.age_years);

    weight_component + height_component + age_component + config.sex_constant(metrics.sex)
}

/// Calculate Total Daily Energy Expenditure, rounded to whole kcal
///
/// Formula: TDEE = BMR x Activity Factor
///
/// Activity factors based on `McArdle` et al. (2010):
/// - Sedentary: 1.2 (little/no exercise)
/// - Lightly active: 1.375 (1-3 days/week)
/// - Moderately active: 1.55 (3-5 days/week)
/// - Very active: 1.725 (6-7 days/week)
/// - Extra active: 1.9 (hard training 2x/day)
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> u32 {
    round_kcal(bmr * config.multiplier(activity_level))
}

/// Estimate BMR and TDEE from body metrics and an activity level
#[must_use]
pub fn estimate_energy(
    metrics: &BodyMetrics,
    activity_level: ActivityLevel,
    config: &NutritionEngineConfig,
) -> EnergyEstimate {
    let bmr = calculate_bmr(metrics, &config.bmr);
    let tdee = calculate_tdee(bmr, activity_level, &config.activity_factors);
    EnergyEstimate { bmr, tdee }
}

/// Calorie target for a goal pursued at an intensity: `round(TDEE + adjustment)`
///
/// Never negative.
#[must_use]
pub fn calculate_goal_calories(
    tdee: u32,
    goal: Goal,
    intensity: IntensityLevel,
    config: &GoalAdjustmentConfig,
) -> u32 {
    let adjusted = i64::from(tdee) + i64::from(config.adjustment(goal, intensity));
    u32::try_from(adjusted.max(0)).unwrap_or(u32::MAX)
}

/// Split a calorie target into protein, fat and carbohydrate grams
///
/// - protein: `round(weight x multiplier(goal))`
/// - fat: `round(round(calories x fat_fraction) / 9)`
/// - carbohydrates: the remaining energy divided by 4, floored at zero
///
/// `calories` on the result is the energy of the rounded macros, so it equals
/// `protein*4 + fat*9 + carbs*4` exactly. It sits within a couple of kcal of
/// `target_calories` unless protein and fat alone exceed the target.
///
/// # Reference
/// Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
#[must_use]
pub fn calculate_macros(
    target_calories: u32,
    weight_kg: f64,
    goal: Goal,
    config: &MacroTargetConfig,
) -> NutritionCalculation {
    let calories = f64::from(target_calories);

    let protein_g = round_grams(weight_kg * config.protein_multiplier(goal));
    let fat_kcal = (calories * config.fat_fraction_of_calories).round();
    let fat_g = round_grams(fat_kcal / KCAL_PER_G_FAT);

    let remaining = f64::from(fat_g).mul_add(
        -KCAL_PER_G_FAT,
        f64::from(protein_g).mul_add(-KCAL_PER_G_PROTEIN, calories),
    );
    let carbs_g = round_grams(remaining / KCAL_PER_G_CARBS);

    if remaining < 0.0 {
        debug!(
            target_calories,
            protein_g, fat_g, "protein and fat exceed the calorie target, carbohydrates floored at zero"
        );
    }

    let mut result = NutritionCalculation {
        calories: 0,
        protein_g,
        fat_g,
        carbs_g,
        base_calories: target_calories,
        target_calories,
    };
    result.calories = result.macro_calories();
    result
}

/// Energy estimate, goal calories and macro targets in one pass
#[must_use]
pub fn calculate_daily_targets(
    metrics: &BodyMetrics,
    activity_level: ActivityLevel,
    goal: Goal,
    intensity: IntensityLevel,
    config: &NutritionEngineConfig,
) -> DailyNutritionTargets {
    // Step 1: BMR and TDEE
    let energy = estimate_energy(metrics, activity_level, config);

    // Step 2: goal x intensity adjustment
    let target_calories =
        calculate_goal_calories(energy.tdee, goal, intensity, &config.goal_adjustments);

    // Step 3: macro split
    let nutrition = NutritionCalculation {
        base_calories: energy.tdee,
        ..calculate_macros(target_calories, metrics.weight_kg, goal, &config.macros)
    };

    DailyNutritionTargets {
        energy,
        macro_percentages: nutrition.percentages(),
        nutrition,
        activity_level,
        goal,
        intensity,
    }
}

/// Round a non-negative kcal value; negatives saturate to zero
pub(crate) fn round_kcal(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Round a gram amount to whole grams; negatives saturate to zero
fn round_grams(value: f64) -> u32 {
    value.round().max(0.0) as u32
}
