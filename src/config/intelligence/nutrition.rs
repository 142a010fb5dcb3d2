// ABOUTME: Nutrition configuration for energy estimation and macro target calculation
// ABOUTME: Configures BMR coefficients, activity factors, protein multipliers, and goal adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculation Configuration
//!
//! Coefficients used by the energy estimator and the macro target calculator.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204

use nutriplan_core::models::{ActivityLevel, BiologicalSex, Goal, IntensityLevel};
use serde::{Deserialize, Serialize};

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Neutral constant for non-binary or unspecified sex (-78)
    pub msj_other_constant: f64,
}

impl BmrConfig {
    /// Sex-specific constant of the formula
    #[must_use]
    pub const fn sex_constant(&self, sex: BiologicalSex) -> f64 {
        match sex {
            BiologicalSex::Male => self.msj_male_constant,
            BiologicalSex::Female => self.msj_female_constant,
            BiologicalSex::Other => self.msj_other_constant,
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            // Midpoint of the male and female constants, rounded
            msj_other_constant: -78.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier view of an activity level
    #[must_use]
    pub const fn multiplier(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtraActive => self.extra_active,
        }
    }

    /// Factors in ascending activity order
    #[must_use]
    pub const fn as_array(&self) -> [f64; 5] {
        [
            self.sedentary,
            self.light,
            self.moderate,
            self.very_active,
            self.extra_active,
        ]
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

/// Macro target configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroTargetConfig {
    /// Protein for weight loss (g/kg): 2.2, preserves lean mass in a deficit
    pub protein_lose_weight_g_per_kg: f64,
    /// Protein for muscle gain (g/kg): 2.0
    pub protein_build_muscle_g_per_kg: f64,
    /// Protein for general health (g/kg): 1.8
    pub protein_health_g_per_kg: f64,
    /// Share of calories assigned to fat: 0.27
    pub fat_fraction_of_calories: f64,
}

impl MacroTargetConfig {
    /// Protein multiplier (g/kg) for a goal
    #[must_use]
    pub const fn protein_multiplier(&self, goal: Goal) -> f64 {
        match goal {
            Goal::LoseWeight => self.protein_lose_weight_g_per_kg,
            Goal::BuildMuscle => self.protein_build_muscle_g_per_kg,
            Goal::Health => self.protein_health_g_per_kg,
        }
    }
}

impl Default for MacroTargetConfig {
    fn default() -> Self {
        Self {
            protein_lose_weight_g_per_kg: 2.2,
            protein_build_muscle_g_per_kg: 2.0,
            protein_health_g_per_kg: 1.8,
            fat_fraction_of_calories: 0.27,
        }
    }
}

/// Calorie adjustment per intensity level (kcal/day, signed)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IntensityAdjustments {
    /// Beginner adjustment
    pub beginner: i32,
    /// Intermediate adjustment
    pub intermediate: i32,
    /// Advanced adjustment
    pub advanced: i32,
}

impl IntensityAdjustments {
    /// Adjustment for an intensity level
    #[must_use]
    pub const fn for_intensity(&self, intensity: IntensityLevel) -> i32 {
        match intensity {
            IntensityLevel::Beginner => self.beginner,
            IntensityLevel::Intermediate => self.intermediate,
            IntensityLevel::Advanced => self.advanced,
        }
    }
}

/// Goal x intensity calorie adjustment table applied on top of TDEE
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Deficits for weight loss
    pub lose_weight: IntensityAdjustments,
    /// Surpluses for muscle gain
    pub build_muscle: IntensityAdjustments,
    /// Adjustments for general health
    pub health: IntensityAdjustments,
}

impl GoalAdjustmentConfig {
    /// Signed kcal adjustment for a goal pursued at an intensity
    #[must_use]
    pub const fn adjustment(&self, goal: Goal, intensity: IntensityLevel) -> i32 {
        match goal {
            Goal::LoseWeight => self.lose_weight.for_intensity(intensity),
            Goal::BuildMuscle => self.build_muscle.for_intensity(intensity),
            Goal::Health => self.health.for_intensity(intensity),
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose_weight: IntensityAdjustments {
                beginner: -300,
                intermediate: -400,
                advanced: -500,
            },
            build_muscle: IntensityAdjustments {
                beginner: 200,
                intermediate: 300,
                advanced: 400,
            },
            health: IntensityAdjustments {
                beginner: 0,
                intermediate: 0,
                advanced: 0,
            },
        }
    }
}
