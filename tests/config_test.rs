// ABOUTME: Integration tests for engine configuration loading and validation
// ABOUTME: Environment overrides, invalid values, and range checks on the coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan::config::{ConfigError, NutritionEngineConfig};
use nutriplan::errors::{AppError, ErrorCode};
use nutriplan::intelligence::calculate_macros;
use nutriplan::models::Goal;
use serial_test::serial;
use std::env;

mod common;

const OVERRIDE_VARS: [&str; 8] = [
    "NUTRIPLAN_PROTEIN_LOSE_WEIGHT_G_PER_KG",
    "NUTRIPLAN_PROTEIN_BUILD_MUSCLE_G_PER_KG",
    "NUTRIPLAN_PROTEIN_HEALTH_G_PER_KG",
    "NUTRIPLAN_FAT_FRACTION",
    "NUTRIPLAN_STEP_MULTIPLIER",
    "NUTRIPLAN_KCAL_PER_KG_BODY_MASS",
    "NUTRIPLAN_RAMP_ONE_CARDIO_MINUTES",
    "NUTRIPLAN_RAMP_TWO_CARDIO_MINUTES",
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

// ============================================================================
// ENVIRONMENT OVERRIDES
// ============================================================================

#[test]
#[serial]
fn test_defaults_load_and_validate() {
    common::init_test_logging();
    clear_overrides();

    let config = NutritionEngineConfig::load().unwrap();
    assert!((config.macros.protein_lose_weight_g_per_kg - 2.2).abs() < f64::EPSILON);
    assert!((config.phases.step_multiplier - 1.25).abs() < f64::EPSILON);
    assert_eq!(config.phases.daily_deficit(0.5), 550);
}

#[test]
#[serial]
fn test_env_overrides_applied() {
    clear_overrides();
    env::set_var("NUTRIPLAN_PROTEIN_LOSE_WEIGHT_G_PER_KG", "2.0");
    env::set_var("NUTRIPLAN_STEP_MULTIPLIER", "1.5");
    env::set_var("NUTRIPLAN_RAMP_TWO_CARDIO_MINUTES", "30");

    let config = NutritionEngineConfig::load();
    clear_overrides();
    let config = config.unwrap();

    assert!((config.macros.protein_lose_weight_g_per_kg - 2.0).abs() < f64::EPSILON);
    assert!((config.phases.step_multiplier - 1.5).abs() < f64::EPSILON);
    assert_eq!(config.phases.ramp_two_cardio.minutes, 30);

    let calc = calculate_macros(2500, 80.0, Goal::LoseWeight, &config.macros);
    assert_eq!(calc.protein_g, 160);
}

#[test]
#[serial]
fn test_unparseable_override_rejected() {
    clear_overrides();
    env::set_var("NUTRIPLAN_FAT_FRACTION", "a quarter");

    let result = NutritionEngineConfig::load();
    clear_overrides();

    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("NUTRIPLAN_FAT_FRACTION"));
}

#[test]
#[serial]
fn test_out_of_range_override_rejected() {
    clear_overrides();
    env::set_var("NUTRIPLAN_STEP_MULTIPLIER", "3.0");

    let result = NutritionEngineConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

// ============================================================================
// VALIDATION
// ============================================================================

#[test]
fn test_activity_factors_must_ascend() {
    let mut config = NutritionEngineConfig::default();
    config.activity_factors.moderate = 1.3;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_positive_weight_loss_adjustment_rejected() {
    let mut config = NutritionEngineConfig::default();
    config.goal_adjustments.lose_weight.advanced = 100;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_cardio_ramp_must_not_shrink() {
    let mut config = NutritionEngineConfig::default();
    config.phases.ramp_one_cardio.minutes = 25;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_config_error_maps_to_app_error() {
    let mut config = NutritionEngineConfig::default();
    config.macros.fat_fraction_of_calories = 0.9;

    let err: AppError = config.validate().unwrap_err().into();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(!err.code.is_caller_error());
}

#[test]
fn test_config_serializes_for_inspection() {
    let json = serde_json::to_value(NutritionEngineConfig::default()).unwrap();
    assert_eq!(json["phases"]["kcal_per_kg_body_mass"], 7700.0);
    assert_eq!(json["macros"]["fat_fraction_of_calories"], 0.27);
}
