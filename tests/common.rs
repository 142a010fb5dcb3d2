// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, client fixtures, phase inputs, and reference foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `nutriplan`
//!
//! Common fixtures so every integration test builds clients, phase inputs and
//! foods the same way.

use nutriplan::intelligence::{BaselineInput, MaintenanceInput, PlanInputs, RampInput};
use nutriplan::models::{
    ActivityLevel, BiologicalSex, BodyMetrics, CardioOption, FoodItem, NutritionCalculation,
};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 30-year-old male, 80 kg, 180 cm
pub fn male_client() -> BodyMetrics {
    BodyMetrics::new(80.0, 180.0, 30, BiologicalSex::Male)
}

/// 35-year-old female, 65 kg, 168 cm
pub fn female_client() -> BodyMetrics {
    BodyMetrics::new(65.0, 168.0, 35, BiologicalSex::Female)
}

/// Phase 1 inputs: 92 kg, lightly active, 0.5 kg/week, 6000 steps
pub fn baseline_input() -> BaselineInput {
    BaselineInput {
        weight_kg: 92.0,
        activity_level: ActivityLevel::Light,
        weekly_loss_kg: 0.5,
        steps: 6000,
    }
}

/// Ramp inputs at a re-measured weight
pub fn ramp_input(weight_kg: f64) -> RampInput {
    RampInput {
        weight_kg,
        activity_level: ActivityLevel::Light,
        weekly_loss_kg: 0.5,
    }
}

/// Maintenance inputs moving the client up one tier
pub fn maintenance_input(weight_kg: f64, cardio_option: CardioOption) -> MaintenanceInput {
    MaintenanceInput {
        weight_kg,
        base_activity_level: ActivityLevel::Light,
        activity_adjustment: 5,
        cardio_option,
    }
}

/// Inputs for all four phases
pub fn full_plan_inputs() -> PlanInputs {
    PlanInputs {
        phase_1: baseline_input(),
        phase_2: Some(ramp_input(90.5)),
        phase_3: Some(ramp_input(89.0)),
        phase_4: Some(maintenance_input(87.5, CardioOption::One)),
    }
}

/// Target built from macro grams with calories equal to their energy
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

/// Chicken breast, per 100 g
pub fn chicken_breast() -> FoodItem {
    FoodItem::new("Chicken breast", 165.0, 31.0, 0.0, 3.6)
}

/// Cooked white rice, per 100 g
pub fn cooked_rice() -> FoodItem {
    FoodItem::new("White rice (cooked)", 130.0, 2.7, 28.0, 0.3)
}

/// Olive oil, per 100 g
pub fn olive_oil() -> FoodItem {
    FoodItem::new("Olive oil", 884.0, 0.0, 0.0, 100.0)
}
