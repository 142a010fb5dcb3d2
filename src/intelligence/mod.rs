// ABOUTME: Nutrition planning algorithms: energy, macros, phases, meal schemas, and recipes
// ABOUTME: Pure, synchronous functions over nutriplan-core models and engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Data flows leaf-first: the energy estimator feeds the macro target
//! calculator, which the phase progression engine calls once per phase; each
//! phase hands its targets to the meal schema distribution engine. Recipe
//! aggregation is independent of that chain.

/// Largest-remainder rounding with exact totals
pub mod allocation;
/// Template rescaling onto new macro targets
pub mod meal_schema;
/// BMR, TDEE, goal calories and macro targets
pub mod nutrition_calculator;
/// Four-phase coaching progression
pub mod phase_progression;
/// Recipe model and per-serving nutrition
pub mod recipes;

pub use allocation::allocate_largest_remainder;
pub use meal_schema::generate_adjusted_schema;
pub use nutrition_calculator::{
    calculate_bmr, calculate_daily_targets, calculate_goal_calories, calculate_macros,
    calculate_tdee, estimate_energy, DailyNutritionTargets,
};
pub use phase_progression::{
    compute_phase_1, compute_phase_2, compute_phase_3, compute_phase_4, compute_plan, ramp_steps,
    BaselineInput, MaintenanceInput, PlanInputs, RampInput,
};
pub use recipes::{
    calculate_recipe_nutrition, calculate_recipe_nutrition_from_lines, calculate_recipes_parallel,
    Recipe,
};
