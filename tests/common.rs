// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and reference biometric inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `nutriplan`

use nutriplan::models::{ActivityLevel, Gender, RawMetrics, UserMetrics};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 80 kg, 180 cm, 30 y, 15% body fat, moderately active man
pub fn reference_male() -> UserMetrics {
    UserMetrics {
        gender: Gender::Male,
        weight: 80.0,
        height: 180.0,
        age: 30,
        body_fat_percentage: 15.0,
        activity_level: ActivityLevel::ModeratelyActive,
    }
}

/// Same measurements as [`reference_male`] for a woman
pub fn reference_female() -> UserMetrics {
    UserMetrics {
        gender: Gender::Female,
        ..reference_male()
    }
}

/// Metric raw input equal to [`reference_male`]
pub fn reference_raw() -> RawMetrics {
    reference_male().into()
}

/// A spread of plausible inputs across both genders and all activity levels
pub fn metrics_grid() -> Vec<UserMetrics> {
    let mut grid = Vec::new();
    for gender in [Gender::Male, Gender::Female] {
        for activity_level in ActivityLevel::ALL {
            for (weight, height) in [(50.0, 155.0), (72.5, 171.0), (95.0, 188.0), (140.0, 200.0)] {
                for age in [16, 35, 80] {
                    for body_fat_percentage in [8.0, 14.0, 22.0, 35.0] {
                        grid.push(UserMetrics {
                            gender,
                            weight,
                            height,
                            age,
                            body_fat_percentage,
                            activity_level,
                        });
                    }
                }
            }
        }
    }
    grid
}
