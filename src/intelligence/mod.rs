// ABOUTME: Calculation engine module for body composition and nutrition targets
// ABOUTME: Re-exports the pure nutrition calculator functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! The arithmetic core. Everything here is a pure function of its arguments.

/// BMR, TDEE, macro, hydration, and heart-rate calculations
pub mod nutrition_calculator;

pub use nutrition_calculator::{
    body_fat_ratio, build_plan, calculate_bmi, calculate_bmr, calculate_fat, calculate_fiber,
    calculate_heart_rate, calculate_hydration, calculate_lean_body_mass, calculate_nutrition,
    calculate_protein, calculate_tdee, estimate_plan, first_non_finite_plan,
};
