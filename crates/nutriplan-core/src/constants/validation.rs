// ABOUTME: Accepted input ranges for biometric validation
// ABOUTME: Hard limits per unit system plus the global body-fat window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Minimum accepted age (years)
pub const AGE_MIN: u32 = 16;
/// Maximum accepted age (years)
pub const AGE_MAX: u32 = 80;

/// Minimum accepted body-fat percentage
pub const BODY_FAT_MIN: f64 = 8.0;
/// Maximum accepted body-fat percentage
pub const BODY_FAT_MAX: f64 = 35.0;

/// Metric weight limits (kg)
pub mod metric {
    /// Minimum weight (kg)
    pub const WEIGHT_MIN: f64 = 30.0;
    /// Maximum weight (kg)
    pub const WEIGHT_MAX: f64 = 300.0;
    /// Minimum height (cm)
    pub const HEIGHT_MIN: f64 = 120.0;
    /// Maximum height (cm)
    pub const HEIGHT_MAX: f64 = 250.0;
}

/// Imperial limits (lb, decimal feet)
pub mod imperial {
    /// Minimum weight (lb)
    pub const WEIGHT_MIN: f64 = 66.0;
    /// Maximum weight (lb)
    pub const WEIGHT_MAX: f64 = 660.0;
    /// Minimum height (ft)
    pub const HEIGHT_MIN: f64 = 4.0;
    /// Maximum height (ft)
    pub const HEIGHT_MAX: f64 = 8.2;
}
