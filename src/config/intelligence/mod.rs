// ABOUTME: Engine configuration container with environment overrides and validation
// ABOUTME: Groups nutrition and phase configuration that callers load once and pass by reference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Engine Configuration
//!
//! All tunable coefficients of the engine live in [`NutritionEngineConfig`].
//! Engine functions take the relevant section by reference so they stay pure.
//! Callers build one with [`NutritionEngineConfig::load`] and pass it down.

/// Configuration error types
pub mod error;
/// Energy and macro coefficients
pub mod nutrition;
/// Phase progression settings
pub mod phases;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, IntensityAdjustments,
    MacroTargetConfig,
};
pub use phases::{CardioPreset, PhaseConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionEngineConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// TDEE activity multipliers
    pub activity_factors: ActivityFactorsConfig,
    /// Protein multipliers and fat share
    pub macros: MacroTargetConfig,
    /// Goal x intensity calorie adjustments
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Phase progression settings
    pub phases: PhaseConfig,
}

impl NutritionEngineConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_energy()?;
        self.validate_macros()?;
        self.validate_phases()
    }

    fn validate_energy(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if self.bmr.msj_age_coef > 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR age coefficient must not be positive",
            ));
        }

        let factors = self.activity_factors.as_array();
        if factors[0] < 1.0 || factors[4] > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }
        Ok(())
    }

    fn validate_macros(&self) -> Result<(), ConfigError> {
        let macros = &self.macros;
        let multipliers = [
            macros.protein_lose_weight_g_per_kg,
            macros.protein_build_muscle_g_per_kg,
            macros.protein_health_g_per_kg,
        ];
        if multipliers.iter().any(|m| !(0.5..=3.5).contains(m)) {
            return Err(ConfigError::ValueOutOfRange(
                "Protein multipliers must be between 0.5 and 3.5 g/kg",
            ));
        }
        if !(0.1..=0.5).contains(&macros.fat_fraction_of_calories) {
            return Err(ConfigError::ValueOutOfRange(
                "Fat fraction must be between 0.1 and 0.5 of calories",
            ));
        }

        let adjustments = &self.goal_adjustments;
        let deficits = [
            adjustments.lose_weight.beginner,
            adjustments.lose_weight.intermediate,
            adjustments.lose_weight.advanced,
        ];
        if deficits.iter().any(|d| *d > 0) {
            return Err(ConfigError::InvalidRange(
                "Weight loss adjustments must not be positive",
            ));
        }
        let surpluses = [
            adjustments.build_muscle.beginner,
            adjustments.build_muscle.intermediate,
            adjustments.build_muscle.advanced,
        ];
        if surpluses.iter().any(|s| *s < 0) {
            return Err(ConfigError::InvalidRange(
                "Muscle gain adjustments must not be negative",
            ));
        }
        Ok(())
    }

    fn validate_phases(&self) -> Result<(), ConfigError> {
        let phases = &self.phases;
        if !(1.0..=2.0).contains(&phases.step_multiplier) {
            return Err(ConfigError::ValueOutOfRange(
                "Step multiplier must be between 1.0 and 2.0",
            ));
        }
        if phases.kcal_per_kg_body_mass <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "kcal per kg of body mass must be positive",
            ));
        }
        if phases.ramp_one_cardio.minutes > phases.ramp_two_cardio.minutes {
            return Err(ConfigError::InvalidRange(
                "Phase 3 cardio must not be shorter than phase 2 cardio",
            ));
        }
        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Macro targets
        Self::apply_env_var(
            "NUTRIPLAN_PROTEIN_LOSE_WEIGHT_G_PER_KG",
            &mut self.macros.protein_lose_weight_g_per_kg,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_PROTEIN_BUILD_MUSCLE_G_PER_KG",
            &mut self.macros.protein_build_muscle_g_per_kg,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_PROTEIN_HEALTH_G_PER_KG",
            &mut self.macros.protein_health_g_per_kg,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_FAT_FRACTION",
            &mut self.macros.fat_fraction_of_calories,
        )?;

        // Phase progression
        Self::apply_env_var(
            "NUTRIPLAN_STEP_MULTIPLIER",
            &mut self.phases.step_multiplier,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_KCAL_PER_KG_BODY_MASS",
            &mut self.phases.kcal_per_kg_body_mass,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_RAMP_ONE_CARDIO_MINUTES",
            &mut self.phases.ramp_one_cardio.minutes,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_RAMP_TWO_CARDIO_MINUTES",
            &mut self.phases.ramp_two_cardio.minutes,
        )?;

        Ok(self)
    }
}
