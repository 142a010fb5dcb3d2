// ABOUTME: Coach nutrition plan aggregate holding up to four computed phases
// ABOUTME: CoachNutritionPlan with supersede-on-write semantics and PlanStatus lifecycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::phase::{Phase, PhaseData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a plan; transitions are driven by the surrounding application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// Coach is still planning
    #[default]
    Draft,
    /// Approved and followed by the client
    Active,
    /// Program finished
    Completed,
    /// Hidden from active views
    Archived,
}

impl PlanStatus {
    /// Whether the application may move a plan from `self` to `next`
    #[must_use]
    pub const fn can_transition_to(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::Active | Self::Archived)
                | (Self::Active, Self::Completed | Self::Archived)
                | (Self::Completed, Self::Archived)
        )
    }
}

/// Client plan with one slot per phase
///
/// Identity and timestamp are supplied by the caller so that building a plan
/// never reads the clock or a random source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachNutritionPlan {
    /// Plan identifier
    pub id: Uuid,
    /// Client the plan belongs to
    pub client_id: Uuid,
    /// Lifecycle status
    pub status: PlanStatus,
    /// Phase slots indexed by `Phase::index`
    pub phases: [Option<PhaseData>; 4],
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl CoachNutritionPlan {
    /// Start an empty draft plan for a client
    #[must_use]
    pub const fn new(id: Uuid, client_id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            client_id,
            status: PlanStatus::Draft,
            phases: [None, None, None, None],
            created_at,
        }
    }

    /// Same plan identity with every phase slot cleared
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self {
            phases: [None, None, None, None],
            ..self.clone()
        }
    }

    /// New plan value with the phase's slot replaced by `data`
    ///
    /// The previous phase data is superseded, never mutated in place.
    #[must_use]
    pub fn with_phase(&self, data: PhaseData) -> Self {
        let mut phases = self.phases.clone();
        let index = data.phase.index();
        phases[index] = Some(data);
        Self {
            phases,
            ..self.clone()
        }
    }

    /// Data for a given phase, if computed
    #[must_use]
    pub fn phase(&self, phase: Phase) -> Option<&PhaseData> {
        self.phases[phase.index()].as_ref()
    }

    /// Highest computed phase
    #[must_use]
    pub fn latest_phase(&self) -> Option<&PhaseData> {
        self.phases.iter().rev().find_map(Option::as_ref)
    }

    /// Phase the coach should compute next, `None` when all four exist
    #[must_use]
    pub fn next_phase(&self) -> Option<Phase> {
        match self.latest_phase() {
            None => Some(Phase::One),
            Some(latest) => latest.phase.successor(),
        }
    }
}
