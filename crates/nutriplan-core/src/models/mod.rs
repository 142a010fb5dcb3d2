// ABOUTME: Core data models for the nutrition planning engine
// ABOUTME: Re-exports body metrics, nutrition targets, meal schemas, phases, plans, and foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain, serializable data passed into and returned from the engine. None of
//! these types perform I/O; persistence belongs to the surrounding application.
//!
//! ## Core Models
//!
//! - `BodyMetrics`, `ActivityLevel`, `Goal`, `IntensityLevel`: calculation inputs
//! - `NutritionCalculation`: the atomic calorie/macro target
//! - `MealSchema`: ordered meals of items carrying macro grams
//! - `PhaseData`, `CoachNutritionPlan`: the four-phase program
//! - `FoodItem`, `RecipeIngredient`, `RecipeNutrition`: recipe aggregation

/// Body metrics and categorical inputs
pub mod body;
/// Reference foods and recipe ingredients
pub mod food;
/// Meal schema structure
pub mod meal_schema;
/// Calorie and macro targets
pub mod nutrition;
/// Phase outputs
pub mod phase;
/// Plan aggregate
pub mod plan;

pub use body::{ActivityCode, ActivityLevel, BiologicalSex, BodyMetrics, Goal, IntensityLevel};
pub use food::{FoodCatalog, FoodItem, IngredientLine, RecipeIngredient, RecipeNutrition};
pub use meal_schema::{MacroTotals, Meal, MealItem, MealSchema, MealSchemaSummary};
pub use nutrition::{EnergyEstimate, MacroPercentages, NutritionCalculation};
pub use phase::{CardioBlock, CardioOption, MaintenanceAdjustment, Phase, PhaseData};
pub use plan::{CoachNutritionPlan, PlanStatus};
