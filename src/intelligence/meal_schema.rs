// ABOUTME: Meal schema distribution engine rescaling a template schema onto new macro targets
// ABOUTME: Independent per-macro scaling with largest-remainder reconciliation to exact totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Schema Distribution
//!
//! A template schema carries the coach's preferred shape of the day: which
//! foods, in which meals, in which proportions. [`generate_adjusted_schema`]
//! keeps that shape and rescales every item so the schema delivers a new
//! target exactly:
//!
//! 1. Protein, fat and carbohydrates each get their own scale factor
//!    (`target / template total`). Calories are never scaled directly.
//! 2. Each item's kcal is re-derived from its unrounded scaled macros.
//! 3. Every field is rounded to whole units and the residual is placed with
//!    largest-remainder allocation, so totals match the target exactly.

use super::allocation::allocate_largest_remainder;
use nutriplan_core::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{Meal, MealItem, MealSchema, NutritionCalculation};
use tracing::{debug, warn};

/// Unrounded scaled values of one item
#[derive(Debug, Clone, Copy)]
struct ScaledItem {
    protein_g: f64,
    fat_g: f64,
    carbs_g: f64,
    kcal: f64,
}

/// Scale factor for one macro; zero template totals only scale to zero targets
fn scale_factor(macro_name: &str, template_total: u64, target: u32) -> AppResult<f64> {
    if template_total > 0 {
        return Ok(f64::from(target) / template_total as f64);
    }
    if target == 0 {
        return Ok(0.0);
    }
    warn!(
        macro_name,
        target, "template carries none of this macro, target cannot be distributed"
    );
    Err(AppError::unresolved_allocation(macro_name, target))
}

/// Rescale a template meal schema so its totals equal `target` exactly
///
/// Protein, fat and carbohydrates reconcile to the target grams. Kcal
/// reconciles to the target's macro energy (`4P + 9F + 4C`), not to
/// `target.calories`, so the schema stays consistent with its own macros when
/// a caller states a calorie figure that differs from them. Meal order, item
/// order, names and amounts are preserved from the template.
///
/// # Errors
///
/// - `InvalidInput` if the template has no items or an unnamed meal
/// - `UnresolvedAllocation` if the template carries none of a macro whose
///   target is non-zero
/// - `InternalError` if rounding reconciliation cannot reach the target
pub fn generate_adjusted_schema(
    template: &MealSchema,
    target: &NutritionCalculation,
) -> AppResult<MealSchema> {
    template.validate()?;

    let totals = template.totals();
    let scale_protein = scale_factor("protein", totals.protein_g, target.protein_g)?;
    let scale_fat = scale_factor("fat", totals.fat_g, target.fat_g)?;
    let scale_carbs = scale_factor("carbs", totals.carbs_g, target.carbs_g)?;

    let scaled: Vec<ScaledItem> = template
        .items()
        .map(|item| {
            let protein_g = f64::from(item.protein_g) * scale_protein;
            let fat_g = f64::from(item.fat_g) * scale_fat;
            let carbs_g = f64::from(item.carbs_g) * scale_carbs;
            ScaledItem {
                protein_g,
                fat_g,
                carbs_g,
                kcal: protein_g.mul_add(
                    KCAL_PER_G_PROTEIN,
                    fat_g.mul_add(KCAL_PER_G_FAT, carbs_g * KCAL_PER_G_CARBS),
                ),
            }
        })
        .collect();

    let protein = allocate_field(&scaled, |s| s.protein_g, target.protein_g)?;
    let fat = allocate_field(&scaled, |s| s.fat_g, target.fat_g)?;
    let carbs = allocate_field(&scaled, |s| s.carbs_g, target.carbs_g)?;
    let kcal_target = target.macro_calories();
    let kcal = allocate_field(&scaled, |s| s.kcal, kcal_target)?;

    let mut index = 0;
    let meals = template
        .meals
        .iter()
        .map(|meal| Meal {
            name: meal.name.clone(),
            items: meal
                .items
                .iter()
                .map(|item| {
                    let adjusted = MealItem {
                        name: item.name.clone(),
                        amount: item.amount.clone(),
                        protein_g: protein[index],
                        fat_g: fat[index],
                        carbs_g: carbs[index],
                        kcal: kcal[index],
                    };
                    index += 1;
                    adjusted
                })
                .collect(),
        })
        .collect();

    let schema = MealSchema::new(meals);
    debug!(
        meals = schema.meals.len(),
        items = scaled.len(),
        protein_g = target.protein_g,
        fat_g = target.fat_g,
        carbs_g = target.carbs_g,
        kcal = kcal_target,
        "Generated adjusted meal schema"
    );
    Ok(schema)
}

fn allocate_field(
    scaled: &[ScaledItem],
    field: impl Fn(&ScaledItem) -> f64,
    target: u32,
) -> AppResult<Vec<u32>> {
    let exact: Vec<f64> = scaled.iter().map(field).collect();
    allocate_largest_remainder(&exact, target)
}
