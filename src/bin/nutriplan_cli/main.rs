// ABOUTME: Nutriplan CLI - command-line front end for the nutrition planning engine
// ABOUTME: Energy estimates, macro targets, four-phase plans, meal schemas, and recipe nutrition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # BMR and TDEE, plus goal targets when --goal is given
//! nutriplan-cli energy --weight 80 --height 180 --age 30 --sex male --activity moderate --goal lose-weight
//!
//! # Macro split for a calorie goal
//! nutriplan-cli macros --calories 2500 --weight 80 --goal lose-weight
//!
//! # Four-phase plan from a JSON request (use - for stdin)
//! nutriplan-cli plan --input plan.json
//!
//! # Rescale a template onto new macro targets
//! nutriplan-cli schema --protein 180 --fat 70 --carbs 220 --format table
//!
//! # Per-serving nutrition for one recipe or a list of recipes
//! nutriplan-cli recipe --input recipes.json
//!
//! # Print the reference template
//! nutriplan-cli template --format table
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::schema::SchemaFormat;
use nutriplan::config::NutritionEngineConfig;
use nutriplan::logging::{EngineLogger, LoggingConfig};
use nutriplan::models::{ActivityLevel, BiologicalSex, BodyMetrics, Goal, IntensityLevel};
use std::path::PathBuf;
use std::time::Instant;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "nutriplan-cli",
    about = "Nutriplan nutrition planning CLI",
    long_about = "Command-line front end for the Nutriplan engine: energy estimates, macro targets, four-phase coaching plans, meal schema distribution, and recipe nutrition."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Estimate BMR and TDEE, and daily targets when a goal is given
    Energy {
        /// Body weight (kg)
        #[arg(long)]
        weight: f64,

        /// Height (cm)
        #[arg(long)]
        height: f64,

        /// Age (years)
        #[arg(long)]
        age: u32,

        /// Biological sex: male, female or other
        #[arg(long, default_value = "other")]
        sex: BiologicalSex,

        /// Activity level: sedentary, light, moderate, very-active, extra-active
        #[arg(long)]
        activity: ActivityLevel,

        /// Goal: lose-weight, build-muscle, health
        #[arg(long)]
        goal: Option<Goal>,

        /// Intensity: beginner, intermediate, advanced
        #[arg(long, default_value = "beginner")]
        intensity: IntensityLevel,
    },

    /// Split a calorie target into protein, fat and carbohydrate grams
    Macros {
        /// Daily calorie target (kcal)
        #[arg(long)]
        calories: u32,

        /// Body weight (kg)
        #[arg(long)]
        weight: f64,

        /// Goal: lose-weight, build-muscle, health
        #[arg(long)]
        goal: Goal,
    },

    /// Compute a four-phase plan from a JSON request
    Plan {
        /// Request file, or - for stdin
        #[arg(long, short = 'i')]
        input: PathBuf,
    },

    /// Rescale a template meal schema onto macro targets
    Schema {
        /// Template schema JSON (defaults to the reference template)
        #[arg(long, short = 't')]
        template: Option<PathBuf>,

        /// Protein target (g)
        #[arg(long)]
        protein: u32,

        /// Fat target (g)
        #[arg(long)]
        fat: u32,

        /// Carbohydrate target (g)
        #[arg(long)]
        carbs: u32,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: SchemaFormat,
    },

    /// Per-serving nutrition for one recipe or a list of recipes
    Recipe {
        /// Recipe JSON file, or - for stdin
        #[arg(long, short = 'i')]
        input: PathBuf,
    },

    /// Print the reference template meal schema
    Template {
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: SchemaFormat,
    },
}

impl Command {
    const fn name(&self) -> &'static str {
        match self {
            Self::Energy { .. } => "energy",
            Self::Macros { .. } => "macros",
            Self::Plan { .. } => "plan",
            Self::Schema { .. } => "schema",
            Self::Recipe { .. } => "recipe",
            Self::Template { .. } => "template",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let config = NutritionEngineConfig::load()?;
    let command_name = cli.command.name();
    let started = Instant::now();

    let outcome = run(cli.command, &config, cli.pretty);
    EngineLogger::log_command(command_name, outcome.is_ok(), started.elapsed());
    if let Err(e) = &outcome {
        error!("{command_name} failed: {e}");
    }
    outcome
}

fn run(command: Command, config: &NutritionEngineConfig, pretty: bool) -> Result<()> {
    match command {
        Command::Energy {
            weight,
            height,
            age,
            sex,
            activity,
            goal,
            intensity,
        } => {
            let metrics = BodyMetrics::new(weight, height, age, sex);
            commands::energy::energy(config, &metrics, activity, goal, intensity, pretty)
        }
        Command::Macros {
            calories,
            weight,
            goal,
        } => commands::energy::macros(config, calories, weight, goal, pretty),
        Command::Plan { input } => commands::plan::plan(config, &input, pretty),
        Command::Schema {
            template,
            protein,
            fat,
            carbs,
            format,
        } => commands::schema::schema(template.as_deref(), protein, fat, carbs, format, pretty),
        Command::Recipe { input } => commands::recipe::recipe(&input, pretty),
        Command::Template { format } => commands::schema::template(format, pretty),
    }
}
