// ABOUTME: Output format abstraction for calculation reports and other serializable data
// ABOUTME: Supports JSON (default), a human-readable text report, and TOON behind a feature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! JSON is the machine-readable default. `Text` renders a [`CalculationReport`]
//! as an aligned table for terminals. With the `toon` feature enabled, TOON
//! (Token-Oriented Object Notation) is also available for LLM consumption.

use crate::services::calculation::CalculationReport;
use nutriplan_core::errors::{AppError, ErrorCode};
use nutriplan_core::models::{Goal, NutritionPlan};
use serde::Serialize;
use std::fmt::{self, Write as _};
use std::str::FromStr;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format (default)
    #[default]
    Json,
    /// Plain-text report, only meaningful for calculation reports
    Text,
    /// TOON format, roughly 40% fewer tokens than JSON
    #[cfg(feature = "toon")]
    Toon,
}

impl OutputFormat {
    /// MIME content type
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Text => "text/plain",
            #[cfg(feature = "toon")]
            Self::Toon => "application/vnd.toon",
        }
    }

    /// Format name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            #[cfg(feature = "toon")]
            Self::Toon => "toon",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            #[cfg(feature = "toon")]
            "toon" => Ok(Self::Toon),
            other => Err(FormatError {
                message: format!("unsupported output format '{other}'"),
                format: Self::Json,
            }),
        }
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data
    pub data: String,
    /// The format used
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

impl FormattedOutput {
    fn new(data: String, format: OutputFormat) -> Self {
        Self {
            data,
            format,
            content_type: format.content_type(),
        }
    }
}

/// Error type for formatting operations
#[derive(Debug, Clone, thiserror::Error)]
#[error("Format error ({format}): {message}")]
pub struct FormatError {
    /// What went wrong
    pub message: String,
    /// The format in use when it went wrong
    pub format: OutputFormat,
}

impl From<FormatError> for AppError {
    fn from(err: FormatError) -> Self {
        Self::new(ErrorCode::SerializationError, err.to_string())
    }
}

/// Format serializable data as compact output
///
/// # Errors
/// Returns `FormatError` if serialization fails, or for `Text`, which only
/// applies to calculation reports (see [`format_report`]).
pub fn format_output<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    serialize(data, format, false).map(|data| FormattedOutput::new(data, format))
}

/// Format serializable data as pretty-printed output
///
/// # Errors
/// Same as [`format_output`].
pub fn format_output_pretty<T: Serialize>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    serialize(data, format, true).map(|data| FormattedOutput::new(data, format))
}

/// Format a calculation report in any supported format
///
/// JSON output is pretty-printed.
///
/// # Errors
/// Returns `FormatError` if serialization fails.
pub fn format_report(
    report: &CalculationReport,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    match format {
        OutputFormat::Text => Ok(FormattedOutput::new(render_text_report(report), format)),
        _ => format_output_pretty(report, format),
    }
}

fn serialize<T: Serialize>(data: &T, format: OutputFormat, pretty: bool) -> Result<String, FormatError> {
    let json_err = |e: serde_json::Error| FormatError {
        message: e.to_string(),
        format,
    };

    match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(data).map_err(json_err),
        OutputFormat::Json => serde_json::to_string(data).map_err(json_err),
        OutputFormat::Text => Err(FormatError {
            message: "text output is only available for calculation reports".to_owned(),
            format,
        }),
        #[cfg(feature = "toon")]
        OutputFormat::Toon => {
            let value = serde_json::to_value(data).map_err(|e| FormatError {
                message: format!("Failed to convert to JSON value: {e}"),
                format,
            })?;
            let options = toon_format::EncodeOptions::default();
            toon_format::encode(&value, &options).map_err(|e| FormatError {
                message: e.to_string(),
                format,
            })
        }
    }
}

/// Render a calculation report as a plain-text table
#[must_use]
pub fn render_text_report(report: &CalculationReport) -> String {
    let body = &report.results.body_composition;
    let hydration = &report.results.hydration;
    let heart = &report.results.heart_rate;
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Body composition");
    let _ = writeln!(out, "  BMR              {:>8.0} kcal", body.bmr);
    let _ = writeln!(out, "  TDEE             {:>8.0} kcal", body.tdee);
    let _ = writeln!(out, "  Lean body mass   {:>8.1} kg", body.lean_body_mass);
    let _ = writeln!(out, "  BMI              {:>8.1}", body.bmi);
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{:<18}{:>9}{:>9}{:>9}{:>9}{:>9}",
        "Plan", "kcal", "protein", "fat", "carbs", "fiber"
    );
    for goal in Goal::ALL {
        write_plan_row(&mut out, goal.label(), report.results.nutrition.get(goal));
    }
    if let Some(variants) = &report.display_variants {
        for variant in variants {
            write_plan_row(&mut out, variant.variant.label(), &variant.plan);
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Hydration");
    let _ = writeln!(out, "  Rest day         {:>8.2} L", hydration.regular.total);
    let _ = writeln!(
        out,
        "  Training day     {:>8.2} L (pre {:.2}, intra {:.2}, post {:.2})",
        hydration.training.total,
        hydration.training.pre_workout,
        hydration.training.intra_workout,
        hydration.training.post_workout
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Heart rate");
    let _ = writeln!(out, "  Maximum          {:>8} bpm", heart.maximum);
    let _ = writeln!(out, "  LISS zone        {:>8} bpm", heart.liss_zone);

    if !report.warnings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Warnings");
        for warning in &report.warnings {
            let _ = writeln!(out, "  - {warning}");
        }
    }

    out
}

fn write_plan_row(out: &mut String, label: &str, plan: &NutritionPlan) {
    let _ = writeln!(
        out,
        "{label:<18}{:>9}{:>8}g{:>8}g{:>8}g{:>8}g",
        plan.calories, plan.protein, plan.fat, plan.carbs, plan.fiber
    );
}
