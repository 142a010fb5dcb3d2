// ABOUTME: Four-phase coaching progression computing chained calorie, macro, step, and cardio targets
// ABOUTME: Baseline deficit, two step/cardio ramps, and a maintenance phase with activity adjustment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Phase Progression Engine
//!
//! The program runs through four phases. Each phase is a pure function of the
//! previous phase's output plus freshly measured inputs; the engine never
//! fetches or caches earlier phases.
//!
//! | Phase | Calories | Steps | Cardio |
//! |---|---|---|---|
//! | 1 baseline | `weight x code - deficit(rate)` | input | none |
//! | 2 ramp | `weight x code - deficit(rate)` | `round(p1 x 1.25)` | 10 min |
//! | 3 ramp | `weight x code - deficit(rate)` | `round(p2 x 1.25)` | 20 min |
//! | 4 maintenance | `weight x (code + delta)` | carried | preset 1 or 2 |
//!
//! `code` is the activity level viewed in kcal per kg of body weight (25-40).
//! Every phase also rescales the caller's template onto its targets.

use super::meal_schema::generate_adjusted_schema;
use super::nutrition_calculator::{calculate_macros, round_kcal};
use crate::config::{MacroTargetConfig, NutritionEngineConfig, PhaseConfig};
use nutriplan_core::errors::{AppError, AppResult, ErrorCode};
use nutriplan_core::models::{
    ActivityCode, ActivityLevel, CardioBlock, CardioOption, CoachNutritionPlan, Goal,
    MaintenanceAdjustment, MealSchema, NutritionCalculation, Phase, PhaseData,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// New inputs for phase 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineInput {
    /// Current weight (kg)
    pub weight_kg: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Desired weight loss (kg per week)
    pub weekly_loss_kg: f64,
    /// Daily step target
    pub steps: u32,
}

/// New inputs for phases 2 and 3
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RampInput {
    /// Re-measured weight (kg)
    pub weight_kg: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Desired weight loss (kg per week)
    pub weekly_loss_kg: f64,
}

/// New inputs for phase 4
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceInput {
    /// Re-measured weight (kg)
    pub weight_kg: f64,
    /// Activity level the adjustment applies to
    pub base_activity_level: ActivityLevel,
    /// Signed shift of the activity code (kcal per kg)
    pub activity_adjustment: i32,
    /// Maintenance cardio preset
    pub cardio_option: CardioOption,
}

/// Inputs for a plan computed up to some phase
///
/// Later phases are optional but must be contiguous: phase 3 requires phase 2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanInputs {
    /// Phase 1 inputs
    pub phase_1: BaselineInput,
    /// Phase 2 inputs
    #[serde(default)]
    pub phase_2: Option<RampInput>,
    /// Phase 3 inputs
    #[serde(default)]
    pub phase_3: Option<RampInput>,
    /// Phase 4 inputs
    #[serde(default)]
    pub phase_4: Option<MaintenanceInput>,
}

/// Fill `draft` by chaining phases as far as inputs are given
///
/// Any phases already on `draft` are superseded; its identity and
/// timestamp carry through untouched, so equal arguments give equal plans.
///
/// # Errors
///
/// Returns `MissingRequiredField` when a phase is given without its
/// predecessor's inputs, and propagates phase computation errors
pub fn compute_plan(
    draft: &CoachNutritionPlan,
    inputs: &PlanInputs,
    template: &MealSchema,
    config: &NutritionEngineConfig,
) -> AppResult<CoachNutritionPlan> {
    if inputs.phase_3.is_some() && inputs.phase_2.is_none() {
        return Err(missing_phase_inputs(Phase::Three));
    }
    if inputs.phase_4.is_some() && inputs.phase_3.is_none() {
        return Err(missing_phase_inputs(Phase::Four));
    }

    let phase_1 = compute_phase_1(&inputs.phase_1, template, config)?;
    let mut plan = draft.cleared().with_phase(phase_1.clone());

    let Some(ramp_1) = &inputs.phase_2 else {
        return Ok(plan);
    };
    let phase_2 = compute_phase_2(&phase_1, ramp_1, template, config)?;
    plan = plan.with_phase(phase_2.clone());

    let Some(ramp_2) = &inputs.phase_3 else {
        return Ok(plan);
    };
    let phase_3 = compute_phase_3(&phase_2, ramp_2, template, config)?;
    plan = plan.with_phase(phase_3.clone());

    if let Some(maintenance) = &inputs.phase_4 {
        let phase_4 = compute_phase_4(&phase_3, maintenance, template, config)?;
        plan = plan.with_phase(phase_4);
    }
    Ok(plan)
}

fn missing_phase_inputs(phase: Phase) -> AppError {
    let predecessor = phase.predecessor().map_or(0, |p| p.number());
    AppError::new(
        ErrorCode::MissingRequiredField,
        format!("{phase} inputs given without phase {predecessor} inputs"),
    )
}

/// Compute phase 1: baseline deficit at the client's current step count
///
/// # Errors
///
/// Propagates meal schema distribution errors for the template
pub fn compute_phase_1(
    input: &BaselineInput,
    template: &MealSchema,
    config: &NutritionEngineConfig,
) -> AppResult<PhaseData> {
    let code = input.activity_level.code();
    let nutrition = deficit_nutrition(
        input.weight_kg,
        code,
        input.weekly_loss_kg,
        &config.macros,
        &config.phases,
    );

    build_phase(
        Phase::One,
        nutrition,
        PhaseShape {
            steps: input.steps,
            cardio: None,
            maintenance: None,
            weight_kg: input.weight_kg,
            activity_code: code,
        },
        template,
    )
}

/// Compute phase 2: first step ramp plus a short daily cardio block
///
/// # Errors
///
/// Returns `InvalidInput` if `previous` is not phase 1, and propagates meal
/// schema distribution errors
pub fn compute_phase_2(
    previous: &PhaseData,
    input: &RampInput,
    template: &MealSchema,
    config: &NutritionEngineConfig,
) -> AppResult<PhaseData> {
    compute_ramp(Phase::Two, previous, input, template, config)
}

/// Compute phase 3: second step ramp with a longer cardio block
///
/// # Errors
///
/// Returns `InvalidInput` if `previous` is not phase 2, and propagates meal
/// schema distribution errors
pub fn compute_phase_3(
    previous: &PhaseData,
    input: &RampInput,
    template: &MealSchema,
    config: &NutritionEngineConfig,
) -> AppResult<PhaseData> {
    compute_ramp(Phase::Three, previous, input, template, config)
}

/// Compute phase 4: maintenance calories at an adjusted activity code
///
/// The adjustment is clamped to the 25-40 kcal/kg scale; clamping is logged.
///
/// # Errors
///
/// Returns `InvalidInput` if `previous` is not phase 3, and propagates meal
/// schema distribution errors
pub fn compute_phase_4(
    previous: &PhaseData,
    input: &MaintenanceInput,
    template: &MealSchema,
    config: &NutritionEngineConfig,
) -> AppResult<PhaseData> {
    ensure_predecessor(Phase::Four, previous)?;

    let base_code = input.base_activity_level.code();
    let (code, clamped) = base_code.shifted(input.activity_adjustment);
    if clamped {
        warn!(
            base = base_code.kcal_per_kg(),
            adjustment = input.activity_adjustment,
            effective = code.kcal_per_kg(),
            "Activity adjustment clamped to the activity code scale"
        );
    }

    let base_calories = round_kcal(input.weight_kg * f64::from(code.kcal_per_kg()));
    let nutrition = NutritionCalculation {
        base_calories,
        ..calculate_macros(
            base_calories,
            input.weight_kg,
            config.phases.maintenance_goal,
            &config.macros,
        )
    };

    build_phase(
        Phase::Four,
        nutrition,
        PhaseShape {
            steps: previous.steps,
            cardio: Some(config.phases.maintenance_cardio(input.cardio_option).to_block()),
            maintenance: Some(MaintenanceAdjustment {
                activity_adjustment: input.activity_adjustment,
                cardio_option: input.cardio_option,
            }),
            weight_kg: input.weight_kg,
            activity_code: code,
        },
        template,
    )
}

/// Next step target of a ramp: `round(steps x multiplier)`
#[must_use]
pub fn ramp_steps(steps: u32, multiplier: f64) -> u32 {
    (f64::from(steps) * multiplier).round().max(0.0) as u32
}

/// Phase-specific fields other than nutrition
struct PhaseShape {
    steps: u32,
    cardio: Option<CardioBlock>,
    maintenance: Option<MaintenanceAdjustment>,
    weight_kg: f64,
    activity_code: ActivityCode,
}

fn compute_ramp(
    phase: Phase,
    previous: &PhaseData,
    input: &RampInput,
    template: &MealSchema,
    config: &NutritionEngineConfig,
) -> AppResult<PhaseData> {
    ensure_predecessor(phase, previous)?;

    let code = input.activity_level.code();
    let nutrition = deficit_nutrition(
        input.weight_kg,
        code,
        input.weekly_loss_kg,
        &config.macros,
        &config.phases,
    );
    let cardio = if phase == Phase::Two {
        config.phases.ramp_one_cardio.to_block()
    } else {
        config.phases.ramp_two_cardio.to_block()
    };

    build_phase(
        phase,
        nutrition,
        PhaseShape {
            steps: ramp_steps(previous.steps, config.phases.step_multiplier),
            cardio: Some(cardio),
            maintenance: None,
            weight_kg: input.weight_kg,
            activity_code: code,
        },
        template,
    )
}

/// Base calories from weight and activity code, minus the loss-rate deficit
fn deficit_nutrition(
    weight_kg: f64,
    code: ActivityCode,
    weekly_loss_kg: f64,
    macros: &MacroTargetConfig,
    phases: &PhaseConfig,
) -> NutritionCalculation {
    let base_calories = round_kcal(weight_kg * f64::from(code.kcal_per_kg()));
    let deficit = phases.daily_deficit(weekly_loss_kg);
    let target_calories = base_calories.saturating_sub(deficit);
    let goal: Goal = phases.deficit_goal;

    NutritionCalculation {
        base_calories,
        ..calculate_macros(target_calories, weight_kg, goal, macros)
    }
}

fn ensure_predecessor(phase: Phase, previous: &PhaseData) -> AppResult<()> {
    match phase.predecessor() {
        Some(expected) if expected == previous.phase => Ok(()),
        Some(expected) => Err(AppError::invalid_input(format!(
            "{phase} must be computed from {expected}, got {}",
            previous.phase
        ))),
        None => Err(AppError::invalid_input(format!(
            "{phase} has no predecessor"
        ))),
    }
}

fn build_phase(
    phase: Phase,
    nutrition: NutritionCalculation,
    shape: PhaseShape,
    template: &MealSchema,
) -> AppResult<PhaseData> {
    let meal_schema = generate_adjusted_schema(template, &nutrition)?;

    debug!(
        phase = phase.number(),
        calories = nutrition.calories,
        base_calories = nutrition.base_calories,
        steps = shape.steps,
        cardio_minutes = shape.cardio.as_ref().map_or(0, |cardio| cardio.minutes),
        "Computed phase"
    );

    Ok(PhaseData {
        phase,
        nutrition,
        steps: shape.steps,
        cardio: shape.cardio,
        maintenance: shape.maintenance,
        weight_kg: shape.weight_kg,
        activity_code: shape.activity_code,
        meal_schema: Some(meal_schema),
    })
}
