// ABOUTME: Unit conversion between imperial and metric body measurements
// ABOUTME: Pounds/kilograms, feet-inches/centimeters, and raw input normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unit conversion
//!
//! The calculator only ever sees kilograms and centimeters. Imperial input is
//! normalized here first: weight in pounds, height in decimal feet or in a
//! feet + inches pair.

use nutriplan_core::constants::units::{CM_PER_INCH, INCHES_PER_FOOT, KG_PER_LB};
use nutriplan_core::models::{RawMetrics, UnitSystem, UserMetrics};
use serde::{Deserialize, Serialize};

/// Height split into whole feet and remaining inches
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FeetInches {
    /// Whole feet
    pub feet: u32,
    /// Remaining inches (0 <= inches < 12)
    pub inches: f64,
}

/// Pounds to kilograms
#[must_use]
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

/// Kilograms to pounds
#[must_use]
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg / KG_PER_LB
}

/// Feet and inches to centimeters
#[must_use]
pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    feet.mul_add(INCHES_PER_FOOT, inches) * CM_PER_INCH
}

/// Decimal feet to centimeters
#[must_use]
pub fn feet_to_cm(feet: f64) -> f64 {
    feet_inches_to_cm(feet, 0.0)
}

/// Centimeters to decimal feet
#[must_use]
pub fn cm_to_feet(cm: f64) -> f64 {
    cm / CM_PER_INCH / INCHES_PER_FOOT
}

/// Centimeters to whole feet plus remaining inches
#[must_use]
pub fn cm_to_feet_inches(cm: f64) -> FeetInches {
    let total_inches = cm / CM_PER_INCH;
    let feet = (total_inches / INCHES_PER_FOOT).floor();
    FeetInches {
        feet: feet as u32,
        inches: feet.mul_add(-INCHES_PER_FOOT, total_inches),
    }
}

/// Convert raw input to the metric `UserMetrics` the calculator expects
#[must_use]
pub fn normalize(raw: &RawMetrics, unit_system: UnitSystem) -> UserMetrics {
    let (weight, height) = match unit_system {
        UnitSystem::Metric => (raw.weight, raw.height),
        UnitSystem::Imperial => (lbs_to_kg(raw.weight), feet_to_cm(raw.height)),
    };

    UserMetrics {
        gender: raw.gender,
        weight,
        height,
        age: raw.age,
        body_fat_percentage: raw.body_fat_percentage,
        activity_level: raw.activity_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_feet_is_182_88_cm() {
        assert!((feet_inches_to_cm(6.0, 0.0) - 182.88).abs() < 1e-9);
        assert!((feet_inches_to_cm(5.0, 10.0) - 177.8).abs() < 1e-9);
    }

    #[test]
    fn test_cm_to_feet_inches_splits() {
        let split = cm_to_feet_inches(177.8);
        assert_eq!(split.feet, 5);
        assert!((split.inches - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_pound_factor() {
        assert!((lbs_to_kg(100.0) - 45.3592).abs() < 1e-9);
    }
}
