// ABOUTME: Calculation output value objects returned by the nutrition calculator
// ABOUTME: Body composition, three macro plans, hydration needs, and heart-rate targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::metrics::Goal;
use crate::constants::nutrition::energy;
use serde::{Deserialize, Serialize};

/// Energy expenditure and body composition estimates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BodyComposition {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Lean body mass (kg)
    pub lean_body_mass: f64,
    /// Body mass index (kg/m²)
    pub bmi: f64,
}

/// Daily calorie and macronutrient targets, all rounded to whole units
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutritionPlan {
    /// kcal/day
    pub calories: i32,
    /// Protein (g)
    pub protein: i32,
    /// Fat (g)
    pub fat: i32,
    /// Carbohydrates (g)
    pub carbs: i32,
    /// Fiber (g)
    pub fiber: i32,
}

impl NutritionPlan {
    /// Energy implied by the rounded macros
    #[must_use]
    pub fn macro_calories(&self) -> f64 {
        f64::from(self.protein).mul_add(
            energy::KCAL_PER_G_PROTEIN,
            f64::from(self.fat).mul_add(
                energy::KCAL_PER_G_FAT,
                f64::from(self.carbs) * energy::KCAL_PER_G_CARBS,
            ),
        )
    }
}

/// Plan values after rounding but before conversion to whole units
///
/// Kept as `f64` so that NaN or infinite intermediates can still be detected;
/// an `as i32` cast would turn them into 0 or `i32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanEstimate {
    /// kcal/day
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fiber (g)
    pub fiber: f64,
}

impl PlanEstimate {
    /// True when every value is finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.calories, self.protein, self.fat, self.carbs, self.fiber]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Whole-unit plan
    #[must_use]
    pub fn to_plan(&self) -> NutritionPlan {
        NutritionPlan {
            calories: self.calories as i32,
            protein: self.protein as i32,
            fat: self.fat as i32,
            carbs: self.carbs as i32,
            fiber: self.fiber as i32,
        }
    }
}

/// The three canonical plans
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutritionPlans {
    /// Surplus plan
    pub bulk: NutritionPlan,
    /// Deficit plan
    pub cut: NutritionPlan,
    /// Energy balance plan
    pub maintain: NutritionPlan,
}

impl NutritionPlans {
    /// Plan for a goal
    #[must_use]
    pub const fn get(&self, goal: Goal) -> &NutritionPlan {
        match goal {
            Goal::Bulk => &self.bulk,
            Goal::Cut => &self.cut,
            Goal::Maintain => &self.maintain,
        }
    }
}

/// Fluid intake breakdown in liters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct HydrationPlan {
    /// Daily baseline
    pub baseline: f64,
    /// Before training
    pub pre_workout: f64,
    /// During training
    pub intra_workout: f64,
    /// After training
    pub post_workout: f64,
    /// Sum of all components
    pub total: f64,
}

/// Rest-day and training-day hydration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Hydration {
    /// Rest day
    pub regular: HydrationPlan,
    /// Training day
    pub training: HydrationPlan,
}

/// Age-derived heart-rate targets (bpm)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeartRate {
    /// Estimated maximum heart rate
    pub maximum: i32,
    /// Low-intensity steady-state target
    pub liss_zone: i32,
}

/// Complete result bundle for one calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalculationResults {
    /// BMR, TDEE, lean mass, BMI
    pub body_composition: BodyComposition,
    /// Bulk, cut, maintain plans
    pub nutrition: NutritionPlans,
    /// Hydration needs
    pub hydration: Hydration,
    /// Heart-rate targets
    pub heart_rate: HeartRate,
}

impl CalculationResults {
    /// True when every real-valued field is finite
    ///
    /// Degenerate input (zero height, NaN weight) propagates into the result
    /// instead of failing; callers use this to detect it.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        let bc = &self.body_composition;
        let hydration = [&self.hydration.regular, &self.hydration.training];
        [bc.bmr, bc.tdee, bc.lean_body_mass, bc.bmi]
            .iter()
            .all(|v| v.is_finite())
            && hydration.iter().all(|h| {
                [h.baseline, h.pre_workout, h.intra_workout, h.post_workout, h.total]
                    .iter()
                    .all(|v| v.is_finite())
            })
    }
}
