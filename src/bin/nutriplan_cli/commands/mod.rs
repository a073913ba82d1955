// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Command modules for nutriplan-cli and the shared metrics arguments
// ABOUTME: Metrics come either from individual flags or from a JSON request file

pub mod calculate;
pub mod convert;
pub mod validate;

use clap::Args;
use nutriplan::errors::{AppError, AppResult};
use nutriplan::models::{ActivityLevel, Gender, RawMetrics, UnitSystem};
use nutriplan::services::CalculationRequest;
use std::path::PathBuf;

/// Biometric input shared by `calculate` and `validate`
#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// JSON request file (metrics plus optional "units")
    #[arg(
        long,
        short = 'i',
        conflicts_with_all = ["gender", "weight", "height", "age", "body_fat", "activity"]
    )]
    pub input: Option<PathBuf>,

    /// Gender (male, female)
    #[arg(long, required_unless_present = "input")]
    pub gender: Option<Gender>,

    /// Body weight (kg, or lbs with --imperial)
    #[arg(long, required_unless_present = "input")]
    pub weight: Option<f64>,

    /// Height (cm, or decimal feet with --imperial)
    #[arg(long, required_unless_present = "input")]
    pub height: Option<f64>,

    /// Age in years
    #[arg(long, required_unless_present = "input")]
    pub age: Option<u32>,

    /// Body-fat percentage
    #[arg(long, required_unless_present = "input")]
    pub body_fat: Option<f64>,

    /// Activity level (sedentary, lightly_active, moderately_active, highly_active)
    #[arg(long, required_unless_present = "input")]
    pub activity: Option<ActivityLevel>,

    /// Interpret weight and height as pounds and feet
    #[arg(long)]
    pub imperial: bool,
}

impl MetricsArgs {
    /// Build a request from the file or the individual flags
    ///
    /// `--imperial` overrides the file's `units` key.
    pub fn to_request(&self) -> AppResult<CalculationRequest> {
        let mut request = match &self.input {
            Some(path) => CalculationRequest::from_path(path)?,
            None => CalculationRequest {
                units: UnitSystem::Metric,
                metrics: RawMetrics {
                    gender: required(self.gender, "gender")?,
                    weight: required(self.weight, "weight")?,
                    height: required(self.height, "height")?,
                    age: required(self.age, "age")?,
                    body_fat_percentage: required(self.body_fat, "body_fat")?,
                    activity_level: required(self.activity, "activity")?,
                },
            },
        };
        if self.imperial {
            request.units = UnitSystem::Imperial;
        }
        Ok(request)
    }
}

fn required<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::missing_field(field))
}
