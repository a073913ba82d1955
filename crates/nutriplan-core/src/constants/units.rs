// ABOUTME: Unit conversion constants for body weight and height
// ABOUTME: Provides named factors for imperial to metric normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453_592;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;
