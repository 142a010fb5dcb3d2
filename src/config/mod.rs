// ABOUTME: Configuration module for the nutrition planning engine
// ABOUTME: Re-exports the engine configuration container and its sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Nutriplan
//!
//! - **Intelligence**: BMR coefficients, activity factors, macro targets, goal
//!   adjustments and phase progression settings, with `NUTRIPLAN_*`
//!   environment overrides

/// Engine configuration and validation
pub mod intelligence;

pub use intelligence::{
    ActivityFactorsConfig, BmrConfig, CardioPreset, ConfigError, GoalAdjustmentConfig,
    IntensityAdjustments, MacroTargetConfig, NutritionEngineConfig, PhaseConfig,
};
