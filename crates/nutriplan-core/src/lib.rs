// ABOUTME: Core types and constants for the nutriplan calculation workspace
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan Core
//!
//! Foundation crate shared by the calculator library and its binaries. It is
//! meant to change rarely so dependants keep incremental compilation benefits.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Formula coefficients, unit factors, validation ranges
//! - **models**: `UserMetrics`, `RawMetrics`, and `CalculationResults`

/// Unified error handling system with standard error codes
pub mod errors;

/// Formula coefficients and limits organized by domain
pub mod constants;

/// Biometric input and calculation output models
pub mod models;
