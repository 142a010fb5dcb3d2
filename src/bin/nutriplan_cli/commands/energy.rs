// ABOUTME: Energy and macro target commands for nutriplan-cli
// ABOUTME: Estimates BMR/TDEE, optional goal targets, and macro splits for a calorie goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use nutriplan::config::NutritionEngineConfig;
use nutriplan::intelligence::{calculate_daily_targets, calculate_macros, estimate_energy};
use nutriplan::models::{ActivityLevel, BodyMetrics, Goal, IntensityLevel};
use tracing::info;

use crate::helpers::io::print_json;

/// Estimate energy expenditure, and daily targets when a goal is given
pub fn energy(
    config: &NutritionEngineConfig,
    metrics: &BodyMetrics,
    activity_level: ActivityLevel,
    goal: Option<Goal>,
    intensity: IntensityLevel,
    pretty: bool,
) -> Result<()> {
    metrics.validate()?;

    match goal {
        Some(goal) => {
            let targets = calculate_daily_targets(metrics, activity_level, goal, intensity, config);
            info!(
                tdee = targets.energy.tdee,
                calories = targets.nutrition.calories,
                "Calculated daily targets"
            );
            print_json(&targets, pretty)
        }
        None => {
            let estimate = estimate_energy(metrics, activity_level, config);
            info!(bmr = estimate.bmr, tdee = estimate.tdee, "Estimated energy");
            print_json(&estimate, pretty)
        }
    }
}

/// Split a calorie target into macro grams
pub fn macros(
    config: &NutritionEngineConfig,
    calories: u32,
    weight_kg: f64,
    goal: Goal,
    pretty: bool,
) -> Result<()> {
    let target = calculate_macros(calories, weight_kg, goal, &config.macros);
    print_json(&target, pretty)
}
