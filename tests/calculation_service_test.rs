// ABOUTME: Integration tests for the calculation service and request parsing
// ABOUTME: Covers validation gating, imperial normalization, JSON requests, and error envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, reference_raw};
use nutriplan::config::NutritionConfig;
use nutriplan::errors::{ErrorCode, ErrorResponse};
use nutriplan::intelligence::calculate_nutrition;
use nutriplan::models::{ActivityLevel, Gender, RawMetrics, UnitSystem};
use nutriplan::services::{CalculationOptions, CalculationRequest, CalculationService};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

#[test]
fn test_service_matches_pure_calculator() {
    init_test_logging();
    let service = CalculationService::default();

    let report = service
        .calculate(&reference_raw(), UnitSystem::Metric)
        .unwrap();
    let expected = calculate_nutrition(&common::reference_male(), &NutritionConfig::default());

    assert_eq!(report.results, expected);
    assert_eq!(report.unit_system, UnitSystem::Metric);
    assert!(report.warnings.is_empty());
    assert!(report.display_variants.is_none());
    assert_eq!(report.request_id.len(), 36);
}

#[test]
fn test_imperial_input_is_normalized() {
    init_test_logging();
    let service = CalculationService::default();
    let raw = RawMetrics {
        weight: 176.37,
        height: 5.9055,
        ..reference_raw()
    };

    let report = service.calculate(&raw, UnitSystem::Imperial).unwrap();
    assert!((report.metrics.weight - 80.0).abs() < 0.01);
    assert!((report.metrics.height - 180.0).abs() < 0.01);
    assert!((report.results.body_composition.tdee - 3382.0).abs() < 1.0);
}

#[test]
fn test_rejected_input_never_reaches_calculator() {
    init_test_logging();
    let service = CalculationService::default();
    let raw = RawMetrics {
        height: 0.0,
        ..reference_raw()
    };

    let err = service.calculate(&raw, UnitSystem::Metric).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(err.exit_code(), 3);

    let response = ErrorResponse::from(&err);
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["error"]["code"], "VALUE_OUT_OF_RANGE");
    assert!(json["error"]["request_id"].is_string());
    assert_eq!(json["error"]["details"]["errors"].as_array().unwrap().len(), 1);
}

#[test]
fn test_warnings_are_carried_into_report() {
    init_test_logging();
    let service = CalculationService::default();
    let raw = RawMetrics {
        body_fat_percentage: 30.0,
        ..reference_raw()
    };

    let report = service.calculate(&raw, UnitSystem::Metric).unwrap();
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn test_display_variants_on_request() {
    init_test_logging();
    let service = CalculationService::default();
    let report = service
        .calculate_with_options(
            &reference_raw(),
            UnitSystem::Metric,
            CalculationOptions {
                include_display_variants: true,
            },
        )
        .unwrap();

    let variants = report.display_variants.unwrap();
    assert_eq!(variants.len(), 4);
    // Canonical plans are unaffected by the display variants
    assert_eq!(report.results.nutrition.bulk.calories, 3720);
}

#[test]
fn test_custom_config_is_injected() {
    init_test_logging();
    let mut config = NutritionConfig::default();
    config.plan_multipliers.bulk = 1.2;
    let service = CalculationService::new(Arc::new(config));

    let report = service
        .calculate(&reference_raw(), UnitSystem::Metric)
        .unwrap();
    assert_eq!(report.results.nutrition.bulk.calories, 4058);
    assert!((service.config().plan_multipliers.bulk - 1.2).abs() < f64::EPSILON);
}

#[test]
fn test_non_finite_plan_is_internal_error() {
    init_test_logging();
    let mut config = NutritionConfig::default();
    config.protein.maintain_g_per_kg = f64::NAN;
    let service = CalculationService::new(Arc::new(config));

    let err = service
        .calculate(&reference_raw(), UnitSystem::Metric)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InternalError);
    assert_eq!(err.exit_code(), 1);
    assert!(err.message.contains("Maintain"));
    assert!(err.context.request_id.is_some());
}

#[test]
fn test_unvalidated_nan_band_does_not_panic() {
    init_test_logging();
    let mut config = NutritionConfig::default();
    config.body_fat_bands.male_min = f64::NAN;
    let service = CalculationService::new(Arc::new(config));

    let err = service
        .calculate(&reference_raw(), UnitSystem::Metric)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InternalError);
}

#[test]
fn test_request_from_json_accepts_aliases() {
    let request = CalculationRequest::from_json_str(
        r#"{
            "units": "imperial",
            "gender": "female",
            "weight": 140,
            "height": 5.5,
            "age": 28,
            "bodyFatPercentage": 24,
            "activityLevel": "lightlyActive"
        }"#,
    )
    .unwrap();

    assert_eq!(request.units, UnitSystem::Imperial);
    assert_eq!(request.metrics.gender, Gender::Female);
    assert_eq!(request.metrics.activity_level, ActivityLevel::LightlyActive);
    assert!((request.metrics.body_fat_percentage - 24.0).abs() < f64::EPSILON);
}

#[test]
fn test_request_defaults_to_metric() {
    let request = CalculationRequest::from_json_str(
        r#"{"gender":"male","weight":80,"height":180,"age":30,
            "body_fat_percentage":15,"activity_level":"moderately_active"}"#,
    )
    .unwrap();
    assert_eq!(request.units, UnitSystem::Metric);
    assert_eq!(request.metrics, reference_raw());
}

#[test]
fn test_unknown_activity_level_is_rejected() {
    let err = CalculationRequest::from_json_str(
        r#"{"gender":"male","weight":80,"height":180,"age":30,
            "body_fat_percentage":15,"activity_level":"couch"}"#,
    )
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
    assert_eq!(err.exit_code(), 2);

    let err = "couch".parse::<ActivityLevel>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_request_from_file() {
    init_test_logging();
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"gender":"male","weight":80,"height":180,"age":30,
            "body_fat_percentage":15,"activity_level":"moderately_active"}}"#
    )
    .unwrap();

    let request = CalculationRequest::from_path(file.path()).unwrap();
    let report = CalculationService::default()
        .calculate_request(&request, CalculationOptions::default())
        .unwrap();
    assert_eq!(report.results.nutrition.maintain.calories, 3382);
}

#[test]
fn test_missing_file_is_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CalculationRequest::from_path(&dir.path().join("missing.json")).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}
