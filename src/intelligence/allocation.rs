// ABOUTME: Largest-remainder (Hamilton) allocation of integer totals across rounded shares
// ABOUTME: Rounds exact shares and distributes the residual so the integers sum to a target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exact-sum rounding
//!
//! Rounding every share to the nearest integer independently leaves a small
//! residual against the target total. [`allocate_largest_remainder`] moves that
//! residual one unit at a time: surplus units go to the shares that were
//! rounded down the most, missing units are taken from the shares that were
//! rounded up the most. Ties resolve to the earlier index, so the result is
//! deterministic for a given input.

use nutriplan_core::errors::{AppError, AppResult};
use std::cmp::Ordering;

/// Round `exact` shares to integers summing exactly to `target`
///
/// Negative shares are treated as zero. No share is ever pushed below zero.
///
/// # Errors
///
/// Returns `InternalError` if the residual cannot be placed (no shares for a
/// non-zero target, or every share already at zero while units remain to be
/// removed).
pub fn allocate_largest_remainder(exact: &[f64], target: u32) -> AppResult<Vec<u32>> {
    let mut rounded: Vec<u32> = exact.iter().map(|value| round_share(*value)).collect();
    let remainders: Vec<f64> = exact
        .iter()
        .zip(&rounded)
        .map(|(value, share)| value.max(0.0) - f64::from(*share))
        .collect();

    let sum: i64 = rounded.iter().map(|share| i64::from(*share)).sum();
    let residual = i64::from(target) - sum;

    match residual.cmp(&0) {
        Ordering::Greater => distribute_surplus(&mut rounded, &remainders, residual)?,
        Ordering::Less => withdraw_excess(&mut rounded, &remainders, residual.unsigned_abs())?,
        Ordering::Equal => {}
    }

    let allocated: u64 = rounded.iter().map(|share| u64::from(*share)).sum();
    if allocated != u64::from(target) {
        return Err(AppError::internal(format!(
            "rounding drift: allocated {allocated}, expected {target}"
        )));
    }
    Ok(rounded)
}

/// Indices ordered by remainder, largest first, ties by index
fn descending_order(remainders: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..remainders.len()).collect();
    order.sort_by(|&a, &b| remainders[b].total_cmp(&remainders[a]).then(a.cmp(&b)));
    order
}

/// Indices ordered by remainder, smallest first, ties by index
fn ascending_order(remainders: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..remainders.len()).collect();
    order.sort_by(|&a, &b| remainders[a].total_cmp(&remainders[b]).then(a.cmp(&b)));
    order
}

fn distribute_surplus(rounded: &mut [u32], remainders: &[f64], residual: i64) -> AppResult<()> {
    if rounded.is_empty() {
        return Err(AppError::internal(format!(
            "rounding drift: {residual} units left with no shares to receive them"
        )));
    }

    // Cycles when the residual exceeds the number of shares
    let order = descending_order(remainders);
    for &index in order.iter().cycle().take(residual as usize) {
        rounded[index] = rounded[index].saturating_add(1);
    }
    Ok(())
}

fn withdraw_excess(rounded: &mut [u32], remainders: &[f64], mut excess: u64) -> AppResult<()> {
    let order = ascending_order(remainders);
    while excess > 0 {
        let mut progressed = false;
        for &index in &order {
            if excess == 0 {
                break;
            }
            if rounded[index] > 0 {
                rounded[index] -= 1;
                excess -= 1;
                progressed = true;
            }
        }
        if !progressed {
            return Err(AppError::internal(format!(
                "rounding drift: {excess} units could not be removed"
            )));
        }
    }
    Ok(())
}

fn round_share(value: f64) -> u32 {
    value.round().max(0.0) as u32
}
