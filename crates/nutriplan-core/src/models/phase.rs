// ABOUTME: Phase-level outputs of the four-phase coaching progression
// ABOUTME: Phase, CardioBlock, CardioOption, MaintenanceAdjustment, and PhaseData
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::body::ActivityCode;
use super::meal_schema::MealSchema;
use super::nutrition::NutritionCalculation;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a phase in the program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Phase {
    /// Baseline
    One,
    /// First ramp
    Two,
    /// Second ramp
    Three,
    /// Maintenance
    Four,
}

impl Phase {
    /// All phases in program order
    pub const ALL: [Self; 4] = [Self::One, Self::Two, Self::Three, Self::Four];

    /// 1-based phase number
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Zero-based slot index
    #[must_use]
    pub const fn index(&self) -> usize {
        self.number() as usize - 1
    }

    /// Phase that must precede this one
    #[must_use]
    pub const fn predecessor(&self) -> Option<Self> {
        match self {
            Self::One => None,
            Self::Two => Some(Self::One),
            Self::Three => Some(Self::Two),
            Self::Four => Some(Self::Three),
        }
    }

    /// Phase that follows this one
    #[must_use]
    pub const fn successor(&self) -> Option<Self> {
        match self {
            Self::One => Some(Self::Two),
            Self::Two => Some(Self::Three),
            Self::Three => Some(Self::Four),
            Self::Four => None,
        }
    }
}

impl TryFrom<u8> for Phase {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(AppError::out_of_range(format!(
                "phase must be between 1 and 4, got {other}"
            ))),
        }
    }
}

impl From<Phase> for u8 {
    fn from(phase: Phase) -> Self {
        phase.number()
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "phase {}", self.number())
    }
}

/// Prescribed cardio work for a phase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardioBlock {
    /// Minutes per session
    pub minutes: u32,
    /// Client-facing description
    pub description: String,
}

impl CardioBlock {
    /// Create a cardio block
    #[must_use]
    pub fn new(minutes: u32, description: impl Into<String>) -> Self {
        Self {
            minutes,
            description: description.into(),
        }
    }
}

/// Maintenance-phase cardio preset selector (serialized as 1 or 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CardioOption {
    /// First preset
    One,
    /// Second preset
    Two,
}

impl TryFrom<u8> for CardioOption {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(AppError::invalid_input(format!(
                "cardio option must be 1 or 2, got {other}"
            ))),
        }
    }
}

impl From<CardioOption> for u8 {
    fn from(option: CardioOption) -> Self {
        match option {
            CardioOption::One => 1,
            CardioOption::Two => 2,
        }
    }
}

impl std::str::FromStr for CardioOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("cardio option must be 1 or 2, got '{s}'"))?;
        Self::try_from(value).map_err(|e| e.message)
    }
}

/// Phase-4-only inputs echoed on the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaintenanceAdjustment {
    /// Signed activity-code delta (kcal/kg) applied to the base activity level
    pub activity_adjustment: i32,
    /// Selected cardio preset
    pub cardio_option: CardioOption,
}

/// Output of one phase computation; immutable once computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseData {
    /// Which phase this is
    pub phase: Phase,
    /// Calorie and macro targets
    pub nutrition: NutritionCalculation,
    /// Daily step target
    pub steps: u32,
    /// Cardio prescription (phases 2-4)
    pub cardio: Option<CardioBlock>,
    /// Maintenance inputs (phase 4 only)
    pub maintenance: Option<MaintenanceAdjustment>,
    /// Weight the phase was computed from (kg)
    pub weight_kg: f64,
    /// Effective activity code the phase was computed from
    pub activity_code: ActivityCode,
    /// Concrete meal schema generated for this phase
    pub meal_schema: Option<MealSchema>,
}

impl PhaseData {
    /// Cardio minutes, zero when no cardio is prescribed
    #[must_use]
    pub fn cardio_minutes(&self) -> u32 {
        self.cardio.as_ref().map_or(0, |cardio| cardio.minutes)
    }

    /// Cardio description, empty when no cardio is prescribed
    #[must_use]
    pub fn cardio_description(&self) -> &str {
        self.cardio
            .as_ref()
            .map_or("", |cardio| cardio.description.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_chain_navigation() {
        assert_eq!(Phase::One.predecessor(), None);
        assert_eq!(Phase::Four.predecessor(), Some(Phase::Three));
        assert_eq!(Phase::Three.successor(), Some(Phase::Four));
        assert_eq!(Phase::Four.index(), 3);
        assert!(Phase::try_from(5).is_err());
    }

    #[test]
    fn test_cardio_option_serde() {
        let option: CardioOption = serde_json::from_str("2").unwrap();
        assert_eq!(option, CardioOption::Two);
        assert!(serde_json::from_str::<CardioOption>("3").is_err());
        assert_eq!(serde_json::to_string(&CardioOption::One).unwrap(), "1");
        assert_eq!("1".parse::<CardioOption>(), Ok(CardioOption::One));
    }
}
