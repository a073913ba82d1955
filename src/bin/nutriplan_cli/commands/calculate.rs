// ABOUTME: Calculate command for nutriplan-cli
// ABOUTME: Runs the calculation service and prints the report in the requested format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::MetricsArgs;
use nutriplan::errors::AppResult;
use nutriplan::formatters::{format_report, OutputFormat};
use nutriplan::services::{CalculationOptions, CalculationService};
use tracing::debug;

/// Calculate and print a report
pub fn run(
    service: &CalculationService,
    metrics: &MetricsArgs,
    format: OutputFormat,
    variants: bool,
) -> AppResult<()> {
    let request = metrics.to_request()?;
    debug!(units = %request.units, format = %format, "Running calculation");

    let report = service.calculate_request(
        &request,
        CalculationOptions {
            include_display_variants: variants,
        },
    )?;
    let output = format_report(&report, format)?;
    println!("{}", output.data);
    Ok(())
}
