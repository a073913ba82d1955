// ABOUTME: Validate command for nutriplan-cli
// ABOUTME: Prints the validation report and exits non-zero when the input is rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::MetricsArgs;
use crate::helpers::display::print_json;
use nutriplan::errors::{AppResult, ErrorCode};
use nutriplan::services::CalculationService;
use std::process::ExitCode;
use tracing::info;

/// Validate input and print the report
pub fn run(service: &CalculationService, metrics: &MetricsArgs) -> AppResult<ExitCode> {
    let request = metrics.to_request()?;
    let report = service.validate(&request.metrics, request.units);
    print_json(&report)?;

    info!(
        valid = report.is_valid,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "Validation finished"
    );

    if report.is_valid {
        Ok(ExitCode::SUCCESS)
    } else {
        let code = ErrorCode::ValueOutOfRange.exit_code();
        Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
    }
}
