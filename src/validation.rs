// ABOUTME: Biometric input validation producing hard errors and soft warnings
// ABOUTME: Range checks per unit system plus gender-specific body-fat band warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input validation
//!
//! Runs before the calculator. Errors make the input unusable; warnings flag
//! values that are accepted but fall outside the body-fat band the macro
//! interpolation uses (they are clamped to the nearest band edge).

use crate::config::nutrition::BodyFatBandsConfig;
use nutriplan_core::constants::validation::{
    imperial, metric, AGE_MAX, AGE_MIN, BODY_FAT_MAX, BODY_FAT_MIN,
};
use nutriplan_core::models::{RawMetrics, UnitSystem};
use serde::{Deserialize, Serialize};

/// Outcome of validating one set of raw metrics
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    /// True when `errors` is empty
    pub is_valid: bool,
    /// Hard failures
    pub errors: Vec<String>,
    /// Soft warnings
    pub warnings: Vec<String>,
}

impl ValidationReport {
    fn from_parts(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// Validator for raw biometric input
#[derive(Debug, Clone, Default)]
pub struct MetricsValidator {
    bands: BodyFatBandsConfig,
}

impl MetricsValidator {
    /// Validator warning against the given body-fat bands
    #[must_use]
    pub const fn new(bands: BodyFatBandsConfig) -> Self {
        Self { bands }
    }

    /// Validate raw metrics expressed in `unit_system`
    #[must_use]
    pub fn validate_user_metrics(
        &self,
        raw: &RawMetrics,
        unit_system: UnitSystem,
    ) -> ValidationReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let (weight_range, height_range, weight_unit, height_unit) = match unit_system {
            UnitSystem::Metric => (
                (metric::WEIGHT_MIN, metric::WEIGHT_MAX),
                (metric::HEIGHT_MIN, metric::HEIGHT_MAX),
                "kg",
                "cm",
            ),
            UnitSystem::Imperial => (
                (imperial::WEIGHT_MIN, imperial::WEIGHT_MAX),
                (imperial::HEIGHT_MIN, imperial::HEIGHT_MAX),
                "lbs",
                "ft",
            ),
        };

        if !(AGE_MIN..=AGE_MAX).contains(&raw.age) {
            errors.push(format!(
                "Age must be between {AGE_MIN} and {AGE_MAX} years"
            ));
        }

        check_range(
            &mut errors,
            "Weight",
            raw.weight,
            weight_range,
            weight_unit,
        );
        check_range(
            &mut errors,
            "Height",
            raw.height,
            height_range,
            height_unit,
        );

        let body_fat_ok = check_range(
            &mut errors,
            "Body fat",
            raw.body_fat_percentage,
            (BODY_FAT_MIN, BODY_FAT_MAX),
            "%",
        );

        if body_fat_ok {
            let (min, max) = self.bands.band_for(raw.gender);
            if !(min..=max).contains(&raw.body_fat_percentage) {
                warnings.push(format!(
                    "Body fat of {}% is outside the typical {} range ({min}-{max}%); \
                     macro targets use the nearest edge of that range",
                    raw.body_fat_percentage, raw.gender
                ));
            }
        }

        ValidationReport::from_parts(errors, warnings)
    }
}

/// Push an error when `value` is non-finite or outside `[min, max]`; returns true when it passes
fn check_range(
    errors: &mut Vec<String>,
    label: &str,
    value: f64,
    (min, max): (f64, f64),
    unit: &str,
) -> bool {
    if !value.is_finite() {
        errors.push(format!("{label} must be a finite number"));
        return false;
    }
    if !(min..=max).contains(&value) {
        errors.push(format!("{label} must be between {min} and {max} {unit}"));
        return false;
    }
    true
}

/// Validate with the default body-fat bands
#[must_use]
pub fn validate_user_metrics(raw: &RawMetrics, unit_system: UnitSystem) -> ValidationReport {
    MetricsValidator::default().validate_user_metrics(raw, unit_system)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriplan_core::models::{ActivityLevel, Gender};

    fn raw() -> RawMetrics {
        RawMetrics {
            gender: Gender::Male,
            weight: 80.0,
            height: 180.0,
            age: 30,
            body_fat_percentage: 15.0,
            activity_level: ActivityLevel::Sedentary,
        }
    }

    #[test]
    fn test_nan_weight_is_an_error() {
        let report = validate_user_metrics(
            &RawMetrics {
                weight: f64::NAN,
                ..raw()
            },
            UnitSystem::Metric,
        );
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec!["Weight must be a finite number"]);
    }

    #[test]
    fn test_out_of_range_body_fat_skips_band_warning() {
        let report = validate_user_metrics(
            &RawMetrics {
                body_fat_percentage: 40.0,
                ..raw()
            },
            UnitSystem::Metric,
        );
        assert_eq!(report.errors.len(), 1);
        assert!(report.warnings.is_empty());
    }
}
