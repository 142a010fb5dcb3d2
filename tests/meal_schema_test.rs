// ABOUTME: Integration tests for meal schema distribution onto macro targets
// ABOUTME: Exact totals across many targets, determinism, structure preservation, and error cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan::errors::ErrorCode;
use nutriplan::intelligence::{allocate_largest_remainder, generate_adjusted_schema};
use nutriplan::models::{Meal, MealItem, MealSchema};

mod common;

// ============================================================================
// EXACT TOTALS
// ============================================================================

#[test]
fn test_totals_exact_across_target_grid() {
    common::init_test_logging();
    let template = MealSchema::reference_template();

    for protein in (60..=260).step_by(23) {
        for fat in (30..=140).step_by(17) {
            for carbs in (0..=420).step_by(41) {
                let target = common::macro_target(protein, fat, carbs);
                let schema = generate_adjusted_schema(&template, &target).unwrap();
                let totals = schema.totals();
                assert_eq!(totals.protein_g, u64::from(protein));
                assert_eq!(totals.fat_g, u64::from(fat));
                assert_eq!(totals.carbs_g, u64::from(carbs));
                assert_eq!(totals.kcal, u64::from(target.macro_calories()));
            }
        }
    }
}

fn many_small_items() -> MealSchema {
    let meals = (1..=6)
        .map(|n| {
            Meal::new(format!("Meal {n}"))
                .with_item(MealItem::new("Almonds", "5 g", 1, 2, 1))
                .with_item(MealItem::new("Cottage cheese", "20 g", 2, 1, 1))
                .with_item(MealItem::new("Apple slices", "30 g", 0, 0, 3))
                .with_item(MealItem::new("Turkey slice", "10 g", 2, 0, 0))
        })
        .collect();
    MealSchema::new(meals)
}

fn one_dominant_item() -> MealSchema {
    MealSchema::new(vec![
        Meal::new("Main").with_item(MealItem::new("Burrito bowl", "1 bowl", 120, 48, 210)),
        Meal::new("Extras")
            .with_item(MealItem::new("Salsa", "30 g", 0, 0, 2))
            .with_item(MealItem::new("Cheese", "10 g", 2, 3, 0))
            .with_item(MealItem::new("Lime", "1 wedge", 0, 0, 1)),
    ])
}

fn single_macro_items() -> MealSchema {
    MealSchema::new(vec![
        Meal::new("Breakfast")
            .with_item(MealItem::new("Egg whites", "200 g", 22, 0, 0))
            .with_item(MealItem::new("Honey", "20 g", 0, 0, 16)),
        Meal::new("Lunch")
            .with_item(MealItem::new("Whey isolate", "30 g", 27, 0, 0))
            .with_item(MealItem::new("Olive oil", "15 g", 0, 15, 0))
            .with_item(MealItem::new("Rice cakes", "3 pieces", 0, 0, 23)),
        Meal::new("Dinner")
            .with_item(MealItem::new("Butter", "10 g", 0, 8, 0))
            .with_item(MealItem::new("Potatoes", "300 g", 0, 0, 51)),
    ])
}

fn uneven_meal_coverage() -> MealSchema {
    MealSchema::new(vec![
        Meal::new("Protein only")
            .with_item(MealItem::new("Chicken breast", "150 g", 46, 0, 0))
            .with_item(MealItem::new("Tuna", "100 g", 25, 0, 0)),
        Meal::new("No protein")
            .with_item(MealItem::new("Banana", "120 g", 0, 0, 27))
            .with_item(MealItem::new("Peanut butter", "16 g", 0, 8, 3)),
        Meal::new("Mixed")
            .with_item(MealItem::new("Salmon", "120 g", 24, 14, 0))
            .with_item(MealItem::new("Quinoa", "150 g", 6, 3, 32)),
        Meal::new("Carbs only").with_item(MealItem::new("Orange juice", "250 ml", 0, 0, 26)),
    ])
}

#[test]
fn test_totals_exact_for_irregular_templates() {
    let templates = [
        ("many small items", many_small_items()),
        ("one dominant item", one_dominant_item()),
        ("single-macro items", single_macro_items()),
        ("uneven meal coverage", uneven_meal_coverage()),
    ];

    for (label, template) in &templates {
        for protein in (0..=300).step_by(37) {
            for fat in (0..=150).step_by(19) {
                for carbs in (0..=450).step_by(53) {
                    let target = common::macro_target(protein, fat, carbs);
                    let schema = generate_adjusted_schema(template, &target).unwrap();
                    let totals = schema.totals();
                    let context = format!("{label}: {protein}/{fat}/{carbs}");

                    assert_eq!(totals.protein_g, u64::from(protein), "{context}");
                    assert_eq!(totals.fat_g, u64::from(fat), "{context}");
                    assert_eq!(totals.carbs_g, u64::from(carbs), "{context}");
                    assert_eq!(totals.kcal, u64::from(target.macro_calories()), "{context}");
                    assert_eq!(schema.item_count(), template.item_count(), "{context}");

                    for (adjusted, original) in schema.items().zip(template.items()) {
                        if original.protein_g == 0 {
                            assert_eq!(adjusted.protein_g, 0, "{context} {}", original.name);
                        }
                        if original.fat_g == 0 {
                            assert_eq!(adjusted.fat_g, 0, "{context} {}", original.name);
                        }
                        if original.carbs_g == 0 {
                            assert_eq!(adjusted.carbs_g, 0, "{context} {}", original.name);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_template_totals_are_identity() {
    let template = MealSchema::reference_template();
    let totals = template.totals();
    let target = common::macro_target(
        u32::try_from(totals.protein_g).unwrap(),
        u32::try_from(totals.fat_g).unwrap(),
        u32::try_from(totals.carbs_g).unwrap(),
    );

    let schema = generate_adjusted_schema(&template, &target).unwrap();
    for (adjusted, original) in schema.items().zip(template.items()) {
        assert_eq!(adjusted.protein_g, original.protein_g);
        assert_eq!(adjusted.fat_g, original.fat_g);
        assert_eq!(adjusted.carbs_g, original.carbs_g);
    }
}

#[test]
fn test_kcal_reconciles_to_macro_energy() {
    let template = MealSchema::reference_template();
    let mut target = common::macro_target(176, 75, 280);
    target.calories = 2500;

    let schema = generate_adjusted_schema(&template, &target).unwrap();
    // 176 x 4 + 75 x 9 + 280 x 4
    assert_eq!(schema.totals().kcal, 2499);
    assert_eq!(schema.totals().protein_g, 176);
}

// ============================================================================
// STRUCTURE AND DETERMINISM
// ============================================================================

#[test]
fn test_structure_preserved() {
    let template = MealSchema::reference_template();
    let target = common::macro_target(200, 66, 202);
    let schema = generate_adjusted_schema(&template, &target).unwrap();

    assert_eq!(schema.meals.len(), template.meals.len());
    for (adjusted, original) in schema.meals.iter().zip(&template.meals) {
        assert_eq!(adjusted.name, original.name);
        let names: Vec<_> = adjusted.items.iter().map(|i| (&i.name, &i.amount)).collect();
        let expected: Vec<_> = original.items.iter().map(|i| (&i.name, &i.amount)).collect();
        assert_eq!(names, expected);
    }
}

#[test]
fn test_generation_is_deterministic() {
    let template = MealSchema::reference_template();
    let target = common::macro_target(187, 73, 251);

    let first = generate_adjusted_schema(&template, &target).unwrap();
    let second = generate_adjusted_schema(&template, &target).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_items_without_a_macro_stay_at_zero() {
    let template = MealSchema::reference_template();
    let target = common::macro_target(230, 90, 300);
    let schema = generate_adjusted_schema(&template, &target).unwrap();

    for (adjusted, original) in schema.items().zip(template.items()) {
        if original.fat_g == 0 {
            assert_eq!(adjusted.fat_g, 0, "{}", original.name);
        }
        if original.carbs_g == 0 {
            assert_eq!(adjusted.carbs_g, 0, "{}", original.name);
        }
    }
}

#[test]
fn test_single_item_template_takes_everything() {
    let template = MealSchema::new(vec![
        Meal::new("Shake").with_item(MealItem::new("Meal replacement", "1 serving", 30, 10, 40)),
    ]);
    let target = common::macro_target(150, 55, 180);

    let schema = generate_adjusted_schema(&template, &target).unwrap();
    let item = &schema.meals[0].items[0];
    assert_eq!((item.protein_g, item.fat_g, item.carbs_g), (150, 55, 180));
    assert_eq!(item.kcal, target.calories);
}

// ============================================================================
// ERROR CASES
// ============================================================================

#[test]
fn test_missing_macro_in_template_is_unresolved() {
    let template = MealSchema::new(vec![Meal::new("Lunch")
        .with_item(MealItem::new("Chicken breast", "150 g", 46, 5, 0))
        .with_item(MealItem::new("Olive oil", "10 g", 0, 10, 0))]);
    let target = common::macro_target(180, 70, 220);

    let err = generate_adjusted_schema(&template, &target).unwrap_err();
    assert_eq!(err.code, ErrorCode::UnresolvedAllocation);
    assert_eq!(err.details["macro"], "carbs");
    assert_eq!(err.details["unallocated"], 220);
}

#[test]
fn test_missing_macro_allowed_when_target_is_zero() {
    let template = MealSchema::new(vec![Meal::new("Lunch")
        .with_item(MealItem::new("Chicken breast", "150 g", 46, 5, 0))
        .with_item(MealItem::new("Olive oil", "10 g", 0, 10, 0))]);
    let target = common::macro_target(180, 70, 0);

    let schema = generate_adjusted_schema(&template, &target).unwrap();
    assert_eq!(schema.totals().carbs_g, 0);
    assert_eq!(schema.totals().protein_g, 180);
}

#[test]
fn test_empty_template_rejected() {
    let target = common::macro_target(180, 70, 220);

    let err = generate_adjusted_schema(&MealSchema::default(), &target).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let unnamed = MealSchema::new(vec![
        Meal::new("  ").with_item(MealItem::new("Rice", "100 g", 3, 0, 28)),
    ]);
    let err = generate_adjusted_schema(&unnamed, &target).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

// ============================================================================
// LARGEST REMAINDER
// ============================================================================

#[test]
fn test_allocation_sums_to_target() {
    let exact = [12.34, 0.0, 7.77, 19.5, 3.01, 0.49];
    for target in 0..=120 {
        let allocated = allocate_largest_remainder(&exact, target).unwrap();
        assert_eq!(allocated.iter().sum::<u32>(), target);
        assert_eq!(allocated.len(), exact.len());
    }
}

#[test]
fn test_allocation_close_to_exact_shares() {
    let exact = [10.4, 20.6, 30.5, 0.5];
    let allocated = allocate_largest_remainder(&exact, 62).unwrap();
    for (value, share) in allocated.iter().zip(exact) {
        assert!((f64::from(*value) - share).abs() < 1.0);
    }
}
