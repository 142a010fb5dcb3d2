// ABOUTME: Client body metrics and the categorical inputs of nutrition calculations
// ABOUTME: BodyMetrics, BiologicalSex, ActivityLevel with its code view, Goal, IntensityLevel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::activity::{MAX_KCAL_PER_KG, MIN_KCAL_PER_KG, TIER_STEP_KCAL_PER_KG};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex category used by the BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiologicalSex {
    /// Male offset (+5)
    Male,
    /// Female offset (-161)
    Female,
    /// Non-binary or unspecified (neutral offset)
    Other,
}

impl FromStr for BiologicalSex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            "other" | "x" | "unspecified" => Ok(Self::Other),
            other => Err(format!("unknown sex category '{other}'")),
        }
    }
}

/// Body measurements supplied fresh for every calculation
///
/// The engine never re-validates these values; `validate` is offered to the
/// caller, which owns input validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in whole years
    pub age_years: u32,
    /// Sex category for the BMR offset
    pub sex: BiologicalSex,
}

impl BodyMetrics {
    /// Create a new set of body metrics
    #[must_use]
    pub const fn new(weight_kg: f64, height_cm: f64, age_years: u32, sex: BiologicalSex) -> Self {
        Self {
            weight_kg,
            height_cm,
            age_years,
            sex,
        }
    }

    /// Same metrics with an updated (re-measured) weight
    #[must_use]
    pub const fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = weight_kg;
        self
    }

    /// Check the caller contract: positive and plausible measurements
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        if !(self.weight_kg > 0.0 && self.weight_kg <= 500.0) {
            return Err(AppError::out_of_range(
                "weight_kg must be between 0 and 500",
            ));
        }
        if !(self.height_cm > 0.0 && self.height_cm <= 300.0) {
            return Err(AppError::out_of_range(
                "height_cm must be between 0 and 300",
            ));
        }
        if self.age_years == 0 || self.age_years > 130 {
            return Err(AppError::out_of_range(
                "age_years must be between 1 and 130",
            ));
        }
        Ok(())
    }
}

/// Activity level, the single canonical representation of how active a client is
///
/// Two views exist over this enum: the TDEE multiplier (resolved through the
/// engine's activity factor configuration) and the coarser kcal-per-kg code
/// used by the phase engine (`kcal_per_kg`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Hard training twice a day or physical job
    ExtraActive,
}

impl ActivityLevel {
    /// All levels in ascending order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    /// Coded view: maintenance kcal per kg of body weight (25/30/35/40)
    #[must_use]
    pub const fn kcal_per_kg(&self) -> u32 {
        match self {
            Self::Sedentary => 25,
            Self::Light => 30,
            Self::Moderate => 35,
            Self::VeryActive | Self::ExtraActive => 40,
        }
    }

    /// Coded view as a validated [`ActivityCode`]
    #[must_use]
    pub const fn code(&self) -> ActivityCode {
        ActivityCode(self.kcal_per_kg())
    }

    /// Lowest level carrying the given kcal-per-kg code
    #[must_use]
    pub fn from_kcal_per_kg(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.kcal_per_kg() == code)
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::VeryActive => "very_active",
            Self::ExtraActive => "extra_active",
        };
        f.write_str(name)
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" | "lightly_active" => Ok(Self::Light),
            "moderate" | "moderately_active" => Ok(Self::Moderate),
            "very_active" => Ok(Self::VeryActive),
            "extra_active" => Ok(Self::ExtraActive),
            other => Err(format!("unknown activity level '{other}'")),
        }
    }
}

/// Numeric activity code in kcal per kg of body weight, always within 25..=40
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ActivityCode(u32);

impl ActivityCode {
    /// Build a code, rejecting values outside the 25..=40 scale
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for codes outside the scale
    pub fn new(kcal_per_kg: u32) -> AppResult<Self> {
        if (MIN_KCAL_PER_KG..=MAX_KCAL_PER_KG).contains(&kcal_per_kg) {
            Ok(Self(kcal_per_kg))
        } else {
            Err(AppError::out_of_range(format!(
                "activity code must be between {MIN_KCAL_PER_KG} and {MAX_KCAL_PER_KG}, got {kcal_per_kg}"
            )))
        }
    }

    /// Shift the code by a signed delta, clamped to the scale
    ///
    /// Returns the shifted code and whether clamping occurred.
    #[must_use]
    pub fn shifted(self, delta: i32) -> (Self, bool) {
        let raw = i64::from(self.0) + i64::from(delta);
        let clamped = raw.clamp(i64::from(MIN_KCAL_PER_KG), i64::from(MAX_KCAL_PER_KG));
        // clamped is within 25..=40 so the narrowing cast is lossless
        (Self(clamped as u32), clamped != raw)
    }

    /// Shift by whole activity tiers (5 kcal/kg each)
    #[must_use]
    pub fn shifted_tiers(self, tiers: i32) -> (Self, bool) {
        self.shifted(tiers.saturating_mul(TIER_STEP_KCAL_PER_KG))
    }

    /// Raw kcal-per-kg value
    #[must_use]
    pub const fn kcal_per_kg(&self) -> u32 {
        self.0
    }

    /// Nearest canonical activity level for this code
    #[must_use]
    pub fn level(&self) -> ActivityLevel {
        ActivityLevel::ALL
            .into_iter()
            .rev()
            .find(|level| level.kcal_per_kg() <= self.0)
            .map_or(ActivityLevel::Sedentary, |level| {
                if level == ActivityLevel::ExtraActive {
                    ActivityLevel::VeryActive
                } else {
                    level
                }
            })
    }
}

impl TryFrom<u32> for ActivityCode {
    type Error = AppError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ActivityCode> for u32 {
    fn from(code: ActivityCode) -> Self {
        code.0
    }
}

impl From<ActivityLevel> for ActivityCode {
    fn from(level: ActivityLevel) -> Self {
        level.code()
    }
}

/// Client goal, driving protein multiplier and calorie adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit, highest protein
    LoseWeight,
    /// Caloric surplus
    BuildMuscle,
    /// Maintenance
    Health,
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "lose_weight" | "weight_loss" => Ok(Self::LoseWeight),
            "build_muscle" | "muscle_gain" => Ok(Self::BuildMuscle),
            "health" | "maintenance" => Ok(Self::Health),
            other => Err(format!("unknown goal '{other}'")),
        }
    }
}

/// Intensity with which a goal is pursued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    /// Smallest adjustment
    #[default]
    Beginner,
    /// Medium adjustment
    Intermediate,
    /// Largest adjustment
    Advanced,
}

impl FromStr for IntensityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(format!("unknown intensity level '{other}'")),
        }
    }
}
