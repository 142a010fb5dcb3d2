// ABOUTME: Main library entry point for the Nutriplan nutrition planning engine
// ABOUTME: Energy estimation, macro targets, phase progression, meal schemas, and recipe nutrition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan
//!
//! Pure, synchronous nutrition planning engine for coaching programs. It turns
//! a client's body metrics and goal into calorie/macro targets across a
//! four-phase program, redistributes those targets over a concrete meal
//! schema, and aggregates ingredient-level nutrition into per-serving recipe
//! nutrition.
//!
//! ## Architecture
//!
//! - **intelligence**: the engine algorithms (energy, macros, phases, meal
//!   schema distribution, recipes)
//! - **config**: validated coefficients with environment overrides
//! - **logging**: structured `tracing` setup for binaries
//!
//! Domain types, errors and constants live in `nutriplan-core` and are
//! re-exported here.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriplan::config::NutritionEngineConfig;
//! use nutriplan::intelligence::calculate_macros;
//! use nutriplan::models::Goal;
//!
//! let config = NutritionEngineConfig::default();
//! let target = calculate_macros(2500, 80.0, Goal::LoseWeight, &config.macros);
//! assert_eq!(target.protein_g, 176);
//! ```

/// Engine configuration with environment overrides
pub mod config;

/// Nutrition planning algorithms
pub mod intelligence;

/// Structured logging setup
pub mod logging;

pub use nutriplan_core::{constants, errors, models};
