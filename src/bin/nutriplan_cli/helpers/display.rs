// ABOUTME: Human-readable output formatting for nutriplan-cli
// ABOUTME: Renders meal schemas as aligned tables with recomputed totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriplan::models::MealSchema;

const NAME_WIDTH: usize = 28;
const AMOUNT_WIDTH: usize = 10;

/// Print a meal schema as a table, one block per meal, totals at the end
pub fn display_meal_schema(schema: &MealSchema) {
    let rule = "=".repeat(NAME_WIDTH + AMOUNT_WIDTH + 32);

    for meal in &schema.meals {
        println!("\n{}", meal.name);
        println!("{rule}");
        println!(
            "{:<NAME_WIDTH$} {:>AMOUNT_WIDTH$} {:>7} {:>7} {:>7} {:>7}",
            "Item", "Amount", "P (g)", "F (g)", "C (g)", "kcal"
        );
        for item in &meal.items {
            println!(
                "{:<NAME_WIDTH$} {:>AMOUNT_WIDTH$} {:>7} {:>7} {:>7} {:>7}",
                item.name, item.amount, item.protein_g, item.fat_g, item.carbs_g, item.kcal
            );
        }
    }

    let totals = schema.totals();
    println!("\n{rule}");
    println!(
        "{:<NAME_WIDTH$} {:>AMOUNT_WIDTH$} {:>7} {:>7} {:>7} {:>7}",
        "Total", "", totals.protein_g, totals.fat_g, totals.carbs_g, totals.kcal
    );
}
