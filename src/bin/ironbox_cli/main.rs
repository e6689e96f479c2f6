// ABOUTME: IronBox CLI - command-line front end for the fitness calculator tools
// ABOUTME: Runs the converter, 1RM estimator, WOD generator and avatar tiers through the tools page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools
//!
//! Usage:
//! ```bash
//! # Convert 100 kg to pounds with a percentage breakdown
//! ironbox-cli convert 100 --unit kg
//!
//! # Estimate a one-rep max from 100 kg x 10
//! ironbox-cli one-rep-max --weight 100 --reps 10
//!
//! # Reproducible workout of the day
//! ironbox-cli wod --seed 42
//!
//! # Avatar tier for a four-lift total
//! ironbox-cli tier --squat 140 --bench 100 --deadlift 180 --press 60
//!
//! # Tools visible to a guest
//! ironbox-cli --role guest tools
//! ```

mod commands;
mod helpers;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ironbox::config::ToolsConfig;
use ironbox::logging::LoggingConfig;
use ironbox::permissions::UserRole;
use ironbox::tools::ToolRegistry;
use ironbox_core::models::MassUnit;
use tracing::info;

use commands::CommandContext;
use helpers::display;

#[derive(Parser)]
#[command(
    name = "ironbox-cli",
    about = "IronBox fitness calculator tools",
    long_about = "Unit conversion, one-rep-max estimation, workout generation and avatar tiers, gated by role."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Role to run as (guest, athlete, coach, admin); defaults to IRONBOX_DEFAULT_ROLE
    #[arg(long, global = true)]
    role: Option<UserRole>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Convert a mass between kilograms and pounds
    Convert {
        /// Value as typed; leave empty to clear
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Unit the value is in (kg or lb)
        #[arg(long, short = 'u', default_value = "kg")]
        unit: MassUnit,
    },

    /// Estimate a one-rep max with the Epley formula
    OneRepMax {
        /// Weight lifted
        #[arg(long, short = 'w', default_value = "", allow_negative_numbers = true)]
        weight: String,

        /// Reps performed (1-10)
        #[arg(long, short = 'r', default_value = "", allow_negative_numbers = true)]
        reps: String,
    },

    /// Pick a random workout of the day
    Wod {
        /// Seed for a reproducible pick (overrides IRONBOX_WOD_SEED)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Classify a four-lift total into an avatar tier
    Tier {
        /// Back squat (kg)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        squat: f64,

        /// Bench press (kg)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        bench: f64,

        /// Deadlift (kg)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        deadlift: f64,

        /// Overhead press (kg)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        press: f64,
    },

    /// List the tools visible to the current role
    Tools,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display::display_error(error, json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.verbose().init()?;
    } else {
        logging.init()?;
    }

    let mut config = ToolsConfig::from_env()?;
    if let Command::Wod { seed: Some(seed) } = &cli.command {
        config.wod_seed = Some(*seed);
    }
    let role = cli.role.unwrap_or(config.default_role);
    info!(role = %role, environment = %config.environment, "IronBox CLI");

    let registry = ToolRegistry::with_builtin_tools(config.load_catalog()?);
    let mut ctx = CommandContext::new(registry, role, cli.json, config.rng());

    match cli.command {
        Command::Convert { value, unit } => commands::convert(&mut ctx, &value, unit)?,
        Command::OneRepMax { weight, reps } => commands::one_rep_max(&mut ctx, &weight, &reps)?,
        Command::Wod { .. } => commands::wod(&mut ctx)?,
        Command::Tier {
            squat,
            bench,
            deadlift,
            press,
        } => commands::tier(&mut ctx, squat, bench, deadlift, press)?,
        Command::Tools => commands::list_tools(&ctx)?,
    }

    Ok(())
}
