// ABOUTME: Display-only calorie variants derived from the same TDEE as the core plans
// ABOUTME: Lean/aggressive bulk and moderate/aggressive cut, never written back into results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Presentation variants
//!
//! The front end shows four extra plans next to the canonical bulk/cut/maintain
//! trio. They use separate multipliers (`constants::presentation`) so tuning a
//! display category cannot shift the canonical plans.

use crate::config::nutrition::NutritionConfig;
use crate::intelligence::nutrition_calculator::build_plan;
use nutriplan_core::constants::presentation::display_multipliers;
use nutriplan_core::models::{CalculationResults, Goal, NutritionPlan, UserMetrics};
use serde::{Deserialize, Serialize};

/// Display-only plan category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DisplayVariant {
    /// +5% surplus
    LeanBulk,
    /// +15% surplus
    AggressiveBulk,
    /// -5% deficit
    ModerateCut,
    /// -15% deficit
    AggressiveCut,
}

impl DisplayVariant {
    /// All variants in display order
    pub const ALL: [Self; 4] = [
        Self::LeanBulk,
        Self::AggressiveBulk,
        Self::ModerateCut,
        Self::AggressiveCut,
    ];

    /// TDEE multiplier
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::LeanBulk => display_multipliers::LEAN_BULK,
            Self::AggressiveBulk => display_multipliers::AGGRESSIVE_BULK,
            Self::ModerateCut => display_multipliers::MODERATE_CUT,
            Self::AggressiveCut => display_multipliers::AGGRESSIVE_CUT,
        }
    }

    /// Goal whose protein rule applies
    #[must_use]
    pub const fn goal(self) -> Goal {
        match self {
            Self::LeanBulk | Self::AggressiveBulk => Goal::Bulk,
            Self::ModerateCut | Self::AggressiveCut => Goal::Cut,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LeanBulk => "Lean bulk",
            Self::AggressiveBulk => "Aggressive bulk",
            Self::ModerateCut => "Moderate cut",
            Self::AggressiveCut => "Aggressive cut",
        }
    }
}

/// A labelled display plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayPlan {
    /// Category
    pub variant: DisplayVariant,
    /// Macro targets
    pub plan: NutritionPlan,
}

/// Compute the four display plans from an existing result's TDEE
#[must_use]
pub fn display_variants(
    metrics: &UserMetrics,
    results: &CalculationResults,
    config: &NutritionConfig,
) -> Vec<DisplayPlan> {
    let tdee = results.body_composition.tdee;
    DisplayVariant::ALL
        .iter()
        .map(|&variant| DisplayPlan {
            variant,
            plan: build_plan(metrics, tdee, variant.goal(), variant.multiplier(), config),
        })
        .collect()
}
