// ABOUTME: Configuration error types for calculator configuration validation
// ABOUTME: Defines error variants for invalid ranges, ordering violations, and out-of-range values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types.

use nutriplan_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Bounds are inverted or empty (e.g., band minimum not below maximum)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Values that must be ordered are not (e.g., bulk multiplier below maintain)
    #[error("Invalid ordering: {0}")]
    InvalidOrdering(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}
