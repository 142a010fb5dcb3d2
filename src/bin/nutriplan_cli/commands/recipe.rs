// ABOUTME: Recipe nutrition command for nutriplan-cli
// ABOUTME: Aggregates one recipe or a batch of recipes into per-serving nutrition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, Result};
use nutriplan::intelligence::{calculate_recipes_parallel, Recipe};
use nutriplan::models::RecipeNutrition;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};
use uuid::Uuid;

use crate::helpers::io::{print_json, read_json};

/// Either a single recipe or a list of recipes
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipeDocument {
    One(Recipe),
    Many(Vec<Recipe>),
}

/// Per-recipe report line
#[derive(Debug, Serialize)]
struct RecipeReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    name: String,
    servings: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    nutrition_per_serving: Option<RecipeNutrition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Aggregate recipe nutrition from a JSON document
pub fn recipe(input: &Path, pretty: bool) -> Result<()> {
    let document: RecipeDocument = read_json(input)?;

    match document {
        RecipeDocument::One(recipe) => {
            let nutrition = recipe
                .nutrition_per_serving()
                .map_err(|e| anyhow!("Recipe '{}': {e}", recipe.name))?;
            print_json(&nutrition, pretty)
        }
        RecipeDocument::Many(recipes) => {
            let results = calculate_recipes_parallel(&recipes);
            let reports: Vec<RecipeReport> = recipes
                .iter()
                .zip(results)
                .map(|(recipe, result)| {
                    let (nutrition_per_serving, error) = match result {
                        Ok(nutrition) => (Some(nutrition), None),
                        Err(e) => {
                            warn!(recipe = %recipe.name, error = %e, "Recipe aggregation failed");
                            (None, Some(e.to_string()))
                        }
                    };
                    RecipeReport {
                        id: recipe.id,
                        name: recipe.name.clone(),
                        servings: recipe.servings,
                        nutrition_per_serving,
                        error,
                    }
                })
                .collect();
            info!(recipes = reports.len(), "Aggregated recipe batch");
            print_json(&reports, pretty)
        }
    }
}
