// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Covers NUTRIPLAN_* overrides, validation failures, and logging/environment parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use nutriplan::config::{ConfigError, Environment, LogLevel, NutritionConfig};
use nutriplan::errors::ErrorCode;
use nutriplan::logging::{LogFormat, LoggingConfig};
use nutriplan::models::UnitSystem;
use nutriplan::services::CalculationService;
use serial_test::serial;
use std::env;

const OVERRIDES: &[&str] = &[
    "NUTRIPLAN_PLAN_BULK",
    "NUTRIPLAN_PLAN_CUT",
    "NUTRIPLAN_ACTIVITY_SEDENTARY",
    "NUTRIPLAN_BODY_FAT_MALE_MIN",
    "NUTRIPLAN_HR_MAX_BASE",
    "NUTRIPLAN_FIBER_MAX_G",
    "NUTRIPLAN_PROTEIN_MAINTAIN",
    "NUTRIPLAN_BMR_HEIGHT_COEF",
    "LOG_FORMAT",
    "ENVIRONMENT",
];

fn clear_overrides() {
    for key in OVERRIDES {
        env::remove_var(key);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info);
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(
        Environment::from_str_or_default("anything"),
        Environment::Development
    );
}

#[test]
#[serial]
fn test_defaults_without_overrides() {
    common::init_test_logging();
    clear_overrides();
    assert_eq!(NutritionConfig::load().unwrap(), NutritionConfig::default());
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_overrides();
    env::set_var("NUTRIPLAN_PLAN_BULK", "1.2");
    env::set_var("NUTRIPLAN_HR_MAX_BASE", "210");
    env::set_var("NUTRIPLAN_FIBER_MAX_G", " 60 ");

    let config = NutritionConfig::load().unwrap();
    assert!((config.plan_multipliers.bulk - 1.2).abs() < f64::EPSILON);
    assert_eq!(config.heart_rate.max_hr_base, 210);
    assert!((config.fiber.max_g - 60.0).abs() < f64::EPSILON);

    clear_overrides();
}

#[test]
#[serial]
fn test_unparsable_override_falls_back_to_default() {
    common::init_test_logging();
    clear_overrides();
    env::set_var("NUTRIPLAN_ACTIVITY_SEDENTARY", "lots");

    let config = NutritionConfig::from_env();
    assert!((config.activity_factors.sedentary - 1.35).abs() < f64::EPSILON);

    clear_overrides();
}

#[test]
#[serial]
fn test_non_finite_overrides_fall_back_to_default() {
    common::init_test_logging();
    clear_overrides();
    env::set_var("NUTRIPLAN_BODY_FAT_MALE_MIN", "NaN");
    env::set_var("NUTRIPLAN_PROTEIN_MAINTAIN", "nan");
    env::set_var("NUTRIPLAN_BMR_HEIGHT_COEF", "inf");

    let config = NutritionConfig::load().unwrap();
    assert_eq!(config, NutritionConfig::default());

    let report = CalculationService::from_env()
        .unwrap()
        .calculate(&common::reference_raw(), UnitSystem::Metric)
        .unwrap();
    assert_eq!(report.results.nutrition.maintain.protein, 128);
    assert_eq!(report.results.nutrition.maintain.carbs, 506);

    clear_overrides();
}

#[test]
#[serial]
fn test_inconsistent_overrides_are_rejected() {
    clear_overrides();
    env::set_var("NUTRIPLAN_PLAN_CUT", "1.05");

    assert!(matches!(
        NutritionConfig::load(),
        Err(ConfigError::InvalidOrdering(_))
    ));

    let err = CalculationService::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert_eq!(err.exit_code(), 4);

    clear_overrides();
}

#[test]
#[serial]
fn test_inverted_band_override_is_rejected() {
    clear_overrides();
    env::set_var("NUTRIPLAN_BODY_FAT_MALE_MIN", "25");

    assert!(matches!(
        NutritionConfig::load(),
        Err(ConfigError::InvalidRange(_))
    ));

    clear_overrides();
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_overrides();
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, Environment::Production);
    assert!(config.include_location);
    assert!(config.include_thread);

    clear_overrides();
    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.environment, Environment::Development);
}
