// ABOUTME: Core types and constants for the Nutriplan nutrition planning engine
// ABOUTME: Foundation crate with error handling, domain models, and nutrition constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan Core
//!
//! Foundation crate providing shared types and constants for the nutrition
//! planning engine. The engine crate builds its algorithms on top of these
//! plain data types so that callers (web handlers, batch jobs, the CLI) can
//! depend on the models without pulling in the algorithms.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy densities and rounding constants
//! - **models**: Body metrics, nutrition targets, meal schemas, phases, plans and foods

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrition constants (energy density per macro, reference amounts)
pub mod constants;

/// Core data models (`BodyMetrics`, `NutritionCalculation`, `MealSchema`, `PhaseData`, ...)
pub mod models;
