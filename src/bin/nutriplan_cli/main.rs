// ABOUTME: Nutriplan CLI - command-line front end for the nutrition calculator
// ABOUTME: Calculates targets, validates input, converts units, and prints the active configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Calculate targets from flags
//! nutriplan-cli calculate --gender male --weight 80 --height 180 --age 30 \
//!     --body-fat 15 --activity moderately_active
//!
//! # Imperial input (pounds, decimal feet) as a text table with display variants
//! nutriplan-cli calculate --imperial --gender female --weight 140 --height 5.5 \
//!     --age 28 --body-fat 24 --activity sedentary --format text --variants
//!
//! # Read a JSON request
//! nutriplan-cli calculate --input request.json
//!
//! # Validate only
//! nutriplan-cli validate --input request.json
//!
//! # Unit conversion
//! nutriplan-cli convert weight --lbs 180
//! nutriplan-cli convert height --feet 5 --inches 10
//!
//! # Show the effective configuration
//! nutriplan-cli config
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use commands::MetricsArgs;
use nutriplan::config::LogLevel;
use nutriplan::constants::service_names;
use nutriplan::errors::AppResult;
use nutriplan::formatters::OutputFormat;
use nutriplan::logging::LoggingConfig;
use nutriplan::services::CalculationService;
use std::process::ExitCode;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    name = "nutriplan-cli",
    version,
    about = "Body composition and nutrition target calculator",
    long_about = "Calculates BMR, TDEE, bulk/cut/maintain macro plans, hydration, and heart-rate targets from biometric input."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate nutrition targets
    Calculate {
        #[command(flatten)]
        metrics: MetricsArgs,

        /// Output format (json, text)
        #[arg(long, default_value = "json")]
        format: OutputFormat,

        /// Include display-only lean/aggressive variants
        #[arg(long)]
        variants: bool,
    },

    /// Validate input without calculating
    Validate {
        #[command(flatten)]
        metrics: MetricsArgs,
    },

    /// Convert between imperial and metric units
    Convert {
        #[command(subcommand)]
        action: ConvertCommand,
    },

    /// Print the effective calculator configuration
    Config,
}

#[derive(Subcommand)]
enum ConvertCommand {
    /// Convert body weight
    Weight {
        /// Pounds to kilograms
        #[arg(long, required_unless_present = "kg", conflicts_with = "kg")]
        lbs: Option<f64>,

        /// Kilograms to pounds
        #[arg(long)]
        kg: Option<f64>,
    },

    /// Convert height
    Height {
        /// Feet (decimal, or whole feet combined with --inches)
        #[arg(long, required_unless_present = "cm", conflicts_with = "cm")]
        feet: Option<f64>,

        /// Additional inches
        #[arg(long, requires = "feet")]
        inches: Option<f64>,

        /// Centimeters to feet and inches
        #[arg(long)]
        cm: Option<f64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env().with_service_name(service_names::NUTRIPLAN_CLI);
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    if let Err(e) = logging.init() {
        eprintln!("Warning: logging disabled: {e}");
    }

    match run(cli.command) {
        Ok(code) => code,
        Err(error) => {
            if error.code.is_client_error() {
                debug!(code = ?error.code, "Rejected input: {error}");
            } else {
                warn!(code = ?error.code, "Command failed: {error}");
            }
            helpers::display::print_error(&error);
            ExitCode::from(u8::try_from(error.exit_code()).unwrap_or(1))
        }
    }
}

fn run(command: Command) -> AppResult<ExitCode> {
    match command {
        Command::Calculate {
            metrics,
            format,
            variants,
        } => {
            let service = CalculationService::from_env()?;
            commands::calculate::run(&service, &metrics, format, variants)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate { metrics } => {
            let service = CalculationService::from_env()?;
            commands::validate::run(&service, &metrics)
        }
        Command::Convert { action } => {
            match action {
                ConvertCommand::Weight { lbs, kg } => commands::convert::weight(lbs, kg)?,
                ConvertCommand::Height { feet, inches, cm } => {
                    commands::convert::height(feet, inches, cm)?;
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Config => {
            let service = CalculationService::from_env()?;
            debug!("Printing effective configuration");
            helpers::display::print_json(service.config())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
