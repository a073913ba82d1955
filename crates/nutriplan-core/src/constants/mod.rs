// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for body composition, nutrition, units, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. Values in `nutrition` are the defaults the
//! calculator configuration starts from; `presentation` holds display-only
//! multipliers that must never feed back into the core plans.

/// Body composition, energy, macro, hydration, and heart-rate constants
pub mod nutrition;
/// Display-only calorie multipliers for presentation variants
pub mod presentation;
/// Unit conversion factors
pub mod units;
/// Input validation ranges
pub mod validation;

/// Environment variable names recognised by configuration loaders
pub mod env_config {
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Service names used in structured logs
pub mod service_names {
    /// Library / service name
    pub const NUTRIPLAN: &str = "nutriplan";
    /// Command-line front end
    pub const NUTRIPLAN_CLI: &str = "nutriplan-cli";
}
