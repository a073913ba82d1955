// ABOUTME: Main library entry point for the nutriplan body composition and nutrition calculator
// ABOUTME: Exposes validation, unit conversion, the calculator, presentation variants, and services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan
//!
//! Turns a handful of biometric inputs (gender, weight, height, age, body-fat
//! percentage, activity level) into daily targets: BMR, TDEE, bulk/cut/maintain
//! macro plans, hydration, and heart-rate zones.
//!
//! ## Architecture
//!
//! - **Models / errors / constants**: shared types in the `nutriplan-core` crate
//! - **Config**: calculator coefficients with `NUTRIPLAN_*` environment overrides
//! - **Validation** and **units**: input gating and imperial normalization
//! - **Intelligence**: the pure calculator
//! - **Services**: request ids, logging, and error mapping around the calculator
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriplan::models::{ActivityLevel, Gender, RawMetrics, UnitSystem};
//! use nutriplan::services::CalculationService;
//!
//! let service = CalculationService::default();
//! let raw = RawMetrics {
//!     gender: Gender::Male,
//!     weight: 80.0,
//!     height: 180.0,
//!     age: 30,
//!     body_fat_percentage: 15.0,
//!     activity_level: ActivityLevel::ModeratelyActive,
//! };
//! if let Ok(report) = service.calculate(&raw, UnitSystem::Metric) {
//!     println!("Maintenance: {} kcal", report.results.nutrition.maintain.calories);
//! }
//! ```

/// Calculator configuration and environment settings
pub mod config;

/// Output formatting (JSON, text, TOON)
pub mod formatters;

/// Pure nutrition calculation functions
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Display-only bulk/cut variants
pub mod presentation;

/// Calculation service layer
pub mod services;

/// Imperial/metric conversion
pub mod units;

/// Input validation
pub mod validation;

/// Shared constants, re-exported from `nutriplan-core`
pub use nutriplan_core::constants;

/// Error types, re-exported from `nutriplan-core`
pub use nutriplan_core::errors;

/// Domain models, re-exported from `nutriplan-core`
pub use nutriplan_core::models;
