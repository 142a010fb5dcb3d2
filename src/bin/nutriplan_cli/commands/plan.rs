// ABOUTME: Phase plan command for nutriplan-cli
// ABOUTME: Chains the four program phases from a JSON request and prints the draft plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use chrono::Utc;
use nutriplan::config::NutritionEngineConfig;
use nutriplan::intelligence::{compute_plan, PlanInputs};
use nutriplan::models::{CoachNutritionPlan, MealSchema};
use serde::Deserialize;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

use crate::helpers::io::{print_json, read_json};

/// Plan request document
#[derive(Debug, Deserialize)]
struct PlanRequest {
    /// Client the plan belongs to; a fresh id when omitted
    #[serde(default)]
    client_id: Option<Uuid>,
    /// Template to rescale per phase; the reference template when omitted
    #[serde(default)]
    template: Option<MealSchema>,
    #[serde(flatten)]
    inputs: PlanInputs,
}

/// Compute a plan from a request file and print it
pub fn plan(config: &NutritionEngineConfig, input: &Path, pretty: bool) -> Result<()> {
    let request: PlanRequest = read_json(input)?;
    let template = request
        .template
        .unwrap_or_else(MealSchema::reference_template);
    let client_id = request.client_id.unwrap_or_else(Uuid::new_v4);
    let draft = CoachNutritionPlan::new(Uuid::new_v4(), client_id, Utc::now());

    let plan = compute_plan(&draft, &request.inputs, &template, config)?;
    info!(
        plan_id = %plan.id,
        client_id = %plan.client_id,
        phases = plan.phases.iter().flatten().count(),
        "Computed plan"
    );
    print_json(&plan, pretty)
}
