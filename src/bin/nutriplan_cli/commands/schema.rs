// ABOUTME: Meal schema commands for nutriplan-cli
// ABOUTME: Rescales a template onto macro targets and prints the reference template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use clap::ValueEnum;
use nutriplan::intelligence::generate_adjusted_schema;
use nutriplan::models::{MealSchema, NutritionCalculation};
use std::path::Path;
use tracing::info;

use crate::helpers::display::display_meal_schema;
use crate::helpers::io::{print_json, read_json};

/// Output format for schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaFormat {
    /// JSON with recomputed totals
    Json,
    /// Aligned text table
    Table,
}

/// Rescale a template onto protein/fat/carbohydrate targets
pub fn schema(
    template: Option<&Path>,
    protein_g: u32,
    fat_g: u32,
    carbs_g: u32,
    format: SchemaFormat,
    pretty: bool,
) -> Result<()> {
    let template = match template {
        Some(path) => read_json(path)?,
        None => MealSchema::reference_template(),
    };

    let mut target = NutritionCalculation {
        calories: 0,
        protein_g,
        fat_g,
        carbs_g,
        base_calories: 0,
        target_calories: 0,
    };
    target.calories = target.macro_calories();
    target.base_calories = target.calories;
    target.target_calories = target.calories;

    let adjusted = generate_adjusted_schema(&template, &target)?;
    info!(
        items = adjusted.item_count(),
        kcal = target.calories,
        "Adjusted meal schema"
    );
    render(&adjusted, format, pretty)
}

/// Print the reference template
pub fn template(format: SchemaFormat, pretty: bool) -> Result<()> {
    render(&MealSchema::reference_template(), format, pretty)
}

fn render(schema: &MealSchema, format: SchemaFormat, pretty: bool) -> Result<()> {
    match format {
        SchemaFormat::Json => print_json(&schema.summary(), pretty),
        SchemaFormat::Table => {
            display_meal_schema(schema);
            Ok(())
        }
    }
}
