// ABOUTME: Display-only calorie multipliers for presentation variants
// ABOUTME: Kept apart from the canonical plan multipliers so display tweaks never change core plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// TDEE multipliers for the four display variants
pub mod display_multipliers {
    /// Lean bulk (+5%)
    pub const LEAN_BULK: f64 = 1.05;
    /// Aggressive bulk (+15%)
    pub const AGGRESSIVE_BULK: f64 = 1.15;
    /// Moderate cut (-5%)
    pub const MODERATE_CUT: f64 = 0.95;
    /// Aggressive cut (-15%)
    pub const AGGRESSIVE_CUT: f64 = 0.85;
}
