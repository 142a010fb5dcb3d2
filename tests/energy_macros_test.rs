// ABOUTME: Integration tests for the energy estimator and macro target calculator
// ABOUTME: Covers BMR/TDEE formulas, monotonicity, macro splits, and the calorie invariant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Energy and macro target tests
//!
//! - Mifflin-St Jeor BMR for each sex category
//! - TDEE across all activity levels
//! - Monotonicity in weight, height and age
//! - Macro split reference scenario and carbohydrate floor
//! - Calorie invariant over a grid of targets, weights and goals

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan::config::NutritionEngineConfig;
use nutriplan::intelligence::{
    calculate_bmr, calculate_daily_targets, calculate_goal_calories, calculate_macros,
    estimate_energy,
};
use nutriplan::models::{ActivityLevel, BodyMetrics, Goal, IntensityLevel};

mod common;

// ============================================================================
// ENERGY ESTIMATOR
// ============================================================================

#[test]
fn test_bmr_typical_male_and_female() {
    common::init_test_logging();
    let config = NutritionEngineConfig::default();

    // 10*80 + 6.25*180 - 5*30 + 5
    let male = calculate_bmr(&common::male_client(), &config.bmr);
    assert!((male - 1780.0).abs() < 1e-9);

    // 10*65 + 6.25*168 - 5*35 - 161
    let female = calculate_bmr(&common::female_client(), &config.bmr);
    assert!((female - 1364.0).abs() < 1e-9);
}

#[test]
fn test_tdee_for_every_activity_level() {
    let config = NutritionEngineConfig::default();
    let metrics = common::male_client();

    let expected = [
        (ActivityLevel::Sedentary, 2136),
        (ActivityLevel::Light, 2448),
        (ActivityLevel::Moderate, 2759),
        (ActivityLevel::VeryActive, 3071),
        (ActivityLevel::ExtraActive, 3382),
    ];
    for (level, tdee) in expected {
        let estimate = estimate_energy(&metrics, level, &config);
        assert_eq!(estimate.tdee, tdee, "TDEE for {level}");
    }
}

#[test]
fn test_energy_monotone_in_weight_height_and_age() {
    let config = NutritionEngineConfig::default();
    let base = common::female_client();

    let mut previous = estimate_energy(&base, ActivityLevel::Moderate, &config);
    for step in 1..=20 {
        let heavier = base.with_weight(f64::from(step).mul_add(2.0, base.weight_kg));
        let current = estimate_energy(&heavier, ActivityLevel::Moderate, &config);
        assert!(current.bmr > previous.bmr);
        assert!(current.tdee >= previous.tdee);
        previous = current;
    }

    let mut previous = estimate_energy(&base, ActivityLevel::Moderate, &config);
    for step in 1..=20 {
        let taller = BodyMetrics {
            height_cm: f64::from(step).mul_add(2.0, base.height_cm),
            ..base
        };
        let current = estimate_energy(&taller, ActivityLevel::Moderate, &config);
        assert!(current.bmr > previous.bmr);
        assert!(current.tdee >= previous.tdee);
        previous = current;
    }

    let mut previous = estimate_energy(&base, ActivityLevel::Moderate, &config);
    for step in 1..=20 {
        let older = BodyMetrics {
            age_years: base.age_years + step,
            ..base
        };
        let current = estimate_energy(&older, ActivityLevel::Moderate, &config);
        assert!(current.bmr < previous.bmr);
        assert!(current.tdee <= previous.tdee);
        previous = current;
    }
}

#[test]
fn test_tdee_increases_with_activity() {
    let config = NutritionEngineConfig::default();
    let metrics = common::female_client();
    let tdees: Vec<u32> = ActivityLevel::ALL
        .iter()
        .map(|level| estimate_energy(&metrics, *level, &config).tdee)
        .collect();
    assert!(tdees.windows(2).all(|pair| pair[0] < pair[1]));
}

// ============================================================================
// MACRO TARGET CALCULATOR
// ============================================================================

#[test]
fn test_macro_reference_scenario() {
    let config = NutritionEngineConfig::default();
    let calc = calculate_macros(2500, 80.0, Goal::LoseWeight, &config.macros);
    assert_eq!(calc.protein_g, 176);
    assert_eq!(calc.fat_g, 75);
    assert_eq!(calc.carbs_g, 280);
}

#[test]
fn test_protein_multiplier_per_goal() {
    let config = NutritionEngineConfig::default();
    assert_eq!(calculate_macros(2500, 100.0, Goal::LoseWeight, &config.macros).protein_g, 220);
    assert_eq!(calculate_macros(2500, 100.0, Goal::BuildMuscle, &config.macros).protein_g, 200);
    assert_eq!(calculate_macros(2500, 100.0, Goal::Health, &config.macros).protein_g, 180);
}

#[test]
fn test_carbohydrates_never_negative() {
    let config = NutritionEngineConfig::default();
    let calc = calculate_macros(800, 140.0, Goal::LoseWeight, &config.macros);
    assert_eq!(calc.carbs_g, 0);
    assert_eq!(calc.calories, calc.macro_calories());
}

#[test]
fn test_calorie_invariant_over_grid() {
    let config = NutritionEngineConfig::default();
    let goals = [Goal::LoseWeight, Goal::BuildMuscle, Goal::Health];

    for target in (1200..=4000).step_by(37) {
        for weight in [50.0, 63.5, 72.2, 88.8, 104.0] {
            for goal in goals {
                let calc = calculate_macros(target, weight, goal, &config.macros);
                let macro_kcal =
                    i64::from(calc.protein_g * 4 + calc.fat_g * 9 + calc.carbs_g * 4);
                assert!(
                    (i64::from(calc.calories) - macro_kcal).abs() <= 1,
                    "target {target}, weight {weight}, goal {goal:?}"
                );
                if calc.carbs_g > 0 {
                    assert!(calc.deviation_from_target().abs() <= 2);
                }
            }
        }
    }
}

#[test]
fn test_goal_adjustment_table() {
    let config = NutritionEngineConfig::default();
    let table = &config.goal_adjustments;
    let cases = [
        (Goal::LoseWeight, IntensityLevel::Beginner, 2200),
        (Goal::LoseWeight, IntensityLevel::Intermediate, 2100),
        (Goal::LoseWeight, IntensityLevel::Advanced, 2000),
        (Goal::BuildMuscle, IntensityLevel::Beginner, 2700),
        (Goal::BuildMuscle, IntensityLevel::Intermediate, 2800),
        (Goal::BuildMuscle, IntensityLevel::Advanced, 2900),
        (Goal::Health, IntensityLevel::Advanced, 2500),
    ];
    for (goal, intensity, expected) in cases {
        assert_eq!(calculate_goal_calories(2500, goal, intensity, table), expected);
    }
}

#[test]
fn test_daily_targets_pipeline() {
    let config = NutritionEngineConfig::default();
    let targets = calculate_daily_targets(
        &common::male_client(),
        ActivityLevel::Moderate,
        Goal::BuildMuscle,
        IntensityLevel::Advanced,
        &config,
    );

    assert_eq!(targets.energy.tdee, 2759);
    assert_eq!(targets.nutrition.base_calories, 2759);
    assert_eq!(targets.nutrition.target_calories, 3159);
    assert_eq!(targets.nutrition.protein_g, 160);

    let pct = targets.macro_percentages;
    let total = pct.protein_percent + pct.carbs_percent + pct.fat_percent;
    assert!((total - 100.0).abs() < 1e-6);
}
