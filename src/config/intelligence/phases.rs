// ABOUTME: Phase progression configuration for the four-phase coaching program
// ABOUTME: Step ramp multiplier, deficit conversion, goals per phase, and cardio presets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan_core::models::{CardioBlock, CardioOption, Goal};
use serde::{Deserialize, Serialize};

/// Cardio prescription preset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardioPreset {
    /// Minutes per session
    pub minutes: u32,
    /// Client-facing description
    pub description: String,
}

impl CardioPreset {
    /// Materialize the preset as a phase cardio block
    #[must_use]
    pub fn to_block(&self) -> CardioBlock {
        CardioBlock::new(self.minutes, self.description.clone())
    }
}

/// Phase progression configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseConfig {
    /// Step target multiplier applied at each ramp phase: 1.25
    pub step_multiplier: f64,
    /// Energy stored per kg of body mass lost (kcal): 7700
    pub kcal_per_kg_body_mass: f64,
    /// Goal used for protein in deficit phases (1-3)
    pub deficit_goal: Goal,
    /// Goal used for protein in the maintenance phase (4)
    pub maintenance_goal: Goal,
    /// Cardio block added in phase 2
    pub ramp_one_cardio: CardioPreset,
    /// Cardio block used in phase 3
    pub ramp_two_cardio: CardioPreset,
    /// Maintenance preset selected by cardio option 1
    pub maintenance_cardio_option_one: CardioPreset,
    /// Maintenance preset selected by cardio option 2
    pub maintenance_cardio_option_two: CardioPreset,
}

impl PhaseConfig {
    /// Maintenance preset for a cardio option
    #[must_use]
    pub const fn maintenance_cardio(&self, option: CardioOption) -> &CardioPreset {
        match option {
            CardioOption::One => &self.maintenance_cardio_option_one,
            CardioOption::Two => &self.maintenance_cardio_option_two,
        }
    }

    /// Daily deficit (kcal) for a desired weekly loss rate (kg/week)
    #[must_use]
    pub fn daily_deficit(&self, weekly_loss_kg: f64) -> u32 {
        if weekly_loss_kg <= 0.0 {
            return 0;
        }
        (weekly_loss_kg * self.kcal_per_kg_body_mass / 7.0).round() as u32
    }
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            step_multiplier: 1.25,
            kcal_per_kg_body_mass: 7700.0,
            deficit_goal: Goal::LoseWeight,
            maintenance_goal: Goal::Health,
            ramp_one_cardio: CardioPreset {
                minutes: 10,
                description: "10 minutes of low-intensity cardio (brisk walk, bike or cross-trainer) every day".to_owned(),
            },
            ramp_two_cardio: CardioPreset {
                minutes: 20,
                description: "20 minutes of low-intensity cardio (brisk walk, bike or cross-trainer) every day".to_owned(),
            },
            maintenance_cardio_option_one: CardioPreset {
                minutes: 20,
                description: "20 minutes of low-intensity cardio every day".to_owned(),
            },
            maintenance_cardio_option_two: CardioPreset {
                minutes: 45,
                description: "45 minutes of moderate cardio three times per week".to_owned(),
            },
        }
    }
}
