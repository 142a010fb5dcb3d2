// ABOUTME: Re-exports command modules for nutriplan-cli
// ABOUTME: Provides energy, macro, plan, schema, and recipe commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod energy;
pub mod plan;
pub mod recipe;
pub mod schema;
