// ABOUTME: Configuration module for the nutrition calculator
// ABOUTME: Re-exports nutrition coefficients, environment settings, and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Deployment environment and log level parsing
pub mod environment;
/// Configuration error types
pub mod error;
/// Calculator coefficients with environment overrides
pub mod nutrition;

pub use environment::{Environment, LogLevel};
pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, BodyFatBandsConfig, FatConfig, FiberConfig,
    HeartRateConfig, HydrationConfig, NutritionConfig, PlanMultipliersConfig, ProteinConfig,
};
