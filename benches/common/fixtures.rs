// ABOUTME: Benchmark fixtures generating meal templates, plan inputs, and recipes
// ABOUTME: Deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures.
//!
//! Provides deterministic data generation for reproducible performance measurements.

use nutriplan::intelligence::{BaselineInput, MaintenanceInput, PlanInputs, RampInput, Recipe};
use nutriplan::models::{
    ActivityLevel, CardioOption, FoodItem, Meal, MealItem, MealSchema, NutritionCalculation,
    RecipeIngredient,
};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum BatchSize {
    /// Small dataset - quick benchmarks
    Small,
    /// Medium dataset - a coach's recipe library
    Medium,
    /// Large dataset - stress testing
    Large,
}

impl BatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
            Self::Large => 1000,
        }
    }
}

/// Template with `meals` meals of `items_per_meal` items each
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn generate_template(meals: usize, items_per_meal: usize) -> MealSchema {
    MealSchema::new(
        (0..meals)
            .map(|meal| {
                (0..items_per_meal).fold(Meal::new(format!("Meal {}", meal + 1)), |acc, item| {
                    let seed = (meal * items_per_meal + item) as u32;
                    acc.with_item(MealItem::new(
                        format!("Food {seed}"),
                        format!("{} g", 50 + (seed * 37) % 200),
                        1 + (seed * 13) % 40,
                        1 + (seed * 7) % 20,
                        1 + (seed * 17) % 60,
                    ))
                })
            })
            .collect(),
    )
}

/// Target with calories equal to the energy of its macros
#[must_use]
pub fn macro_target(protein_g: u32, fat_g: u32, carbs_g: u32) -> NutritionCalculation {
    let mut target = NutritionCalculation {
        calories: 0,
        protein_g,
        fat_g,
        carbs_g,
        base_calories: 0,
        target_calories: 0,
    };
    target.calories = target.macro_calories();
    target.base_calories = target.calories;
    target.target_calories = target.calories;
    target
}

/// Inputs for a complete four-phase plan
#[must_use]
pub fn full_plan_inputs() -> PlanInputs {
    let ramp = |weight_kg| RampInput {
        weight_kg,
        activity_level: ActivityLevel::Light,
        weekly_loss_kg: 0.5,
    };
    PlanInputs {
        phase_1: BaselineInput {
            weight_kg: 92.0,
            activity_level: ActivityLevel::Light,
            weekly_loss_kg: 0.5,
            steps: 6000,
        },
        phase_2: Some(ramp(90.5)),
        phase_3: Some(ramp(89.0)),
        phase_4: Some(MaintenanceInput {
            weight_kg: 87.5,
            base_activity_level: ActivityLevel::Light,
            activity_adjustment: 5,
            cardio_option: CardioOption::One,
        }),
    }
}

/// Recipes with a varying number of ingredients
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#[must_use]
pub fn generate_recipes(size: BatchSize) -> Vec<Recipe> {
    (0..size.count())
        .map(|index| {
            let ingredients = (0..3 + index % 10)
                .map(|line| {
                    let seed = (index * 31 + line) as f64;
                    RecipeIngredient::new(
                        FoodItem::new(
                            format!("Ingredient {line}"),
                            50.0 + (seed * 7.0) % 400.0,
                            (seed * 3.0) % 30.0,
                            (seed * 5.0) % 70.0,
                            (seed * 2.0) % 25.0,
                        ),
                        20.0 + (seed * 11.0) % 250.0,
                    )
                })
                .collect();
            Recipe::new(format!("Recipe {index}"), 1 + (index % 6) as u32)
                .with_ingredients(ingredients)
        })
        .collect()
}
