// ABOUTME: Domain models for biometric input and calculation output
// ABOUTME: Re-exports metric enums, input records, and result value objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain models
//!
//! Input records (`UserMetrics`, `RawMetrics`) and the `CalculationResults`
//! bundle are transient value objects: built once per request, never mutated.

/// Biometric enums and input records
pub mod metrics;
/// Calculation output value objects
pub mod results;

pub use metrics::{ActivityLevel, Gender, Goal, RawMetrics, UnitSystem, UserMetrics};
pub use results::{
    BodyComposition, CalculationResults, HeartRate, Hydration, HydrationPlan, NutritionPlan,
    NutritionPlans, PlanEstimate,
};
