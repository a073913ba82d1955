// ABOUTME: Service layer wiring validation, unit normalization, and the calculator together
// ABOUTME: Front ends (CLI, tests, embedding applications) call into these services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! The calculator itself is a set of pure functions; services add request
//! ids, validation gating, logging, and error mapping around it.

/// Validated calculation requests and reports
pub mod calculation;

pub use calculation::{
    CalculationOptions, CalculationReport, CalculationRequest, CalculationService,
};
