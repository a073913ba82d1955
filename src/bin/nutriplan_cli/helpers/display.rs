// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output helpers for nutriplan-cli
// ABOUTME: Pretty JSON on stdout, structured error envelopes on stderr

use nutriplan::errors::{AppError, AppResult, ErrorResponse};
use nutriplan::formatters::{format_output_pretty, OutputFormat};
use serde::Serialize;

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let output = format_output_pretty(value, OutputFormat::Json)?;
    println!("{}", output.data);
    Ok(())
}

/// Print an error as a JSON envelope on stderr
pub fn print_error(error: &AppError) {
    let response = ErrorResponse::from(error);
    match format_output_pretty(&response, OutputFormat::Json) {
        Ok(output) => eprintln!("{}", output.data),
        Err(_) => eprintln!("Error: {error}"),
    }
}
