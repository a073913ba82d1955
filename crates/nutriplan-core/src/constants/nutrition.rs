// ABOUTME: Body composition and nutrition constants used as calculator defaults
// ABOUTME: BMR coefficients, activity multipliers, body-fat bands, macro and hydration factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Mifflin-St Jeor coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting
/// energy expenditure. *American Journal of Clinical Nutrition*, 51(2), 241-247.
pub mod bmr {
    /// kcal per kilogram of body weight
    pub const WEIGHT_COEF: f64 = 10.0;
    /// kcal per centimeter of height
    pub const HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age (subtracted)
    pub const AGE_COEF: f64 = -5.0;
    /// Male constant
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Female constant
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// TDEE activity multipliers
///
/// These intentionally differ from the McArdle reference table
/// (1.2/1.375/1.55/1.725/1.9). Existing plans depend on them.
pub mod activity_factors {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.35;
    /// Light exercise
    pub const LIGHTLY_ACTIVE: f64 = 1.65;
    /// Moderate exercise
    pub const MODERATELY_ACTIVE: f64 = 1.9;
    /// Hard training
    pub const HIGHLY_ACTIVE: f64 = 2.1;
}

/// Calorie multipliers applied to TDEE for the three canonical plans
pub mod plan_multipliers {
    /// Surplus plan
    pub const BULK: f64 = 1.10;
    /// Deficit plan
    pub const CUT: f64 = 0.90;
    /// Energy balance
    pub const MAINTAIN: f64 = 1.0;
}

/// Gender-specific body-fat bands used for macro interpolation
pub mod body_fat_bands {
    /// Male band lower bound (%)
    pub const MALE_MIN: f64 = 10.0;
    /// Male band upper bound (%)
    pub const MALE_MAX: f64 = 20.0;
    /// Female band lower bound (%)
    pub const FEMALE_MIN: f64 = 18.0;
    /// Female band upper bound (%)
    pub const FEMALE_MAX: f64 = 28.0;
}

/// Protein multipliers in g/kg, interpolated over the body-fat band
pub mod protein {
    /// Cut multiplier at the lean end of the band
    pub const CUT_BASE_G_PER_KG: f64 = 2.7;
    /// Reduction across the full band for cut
    pub const CUT_SPAN_G_PER_KG: f64 = 0.9;
    /// Bulk multiplier at the lean end of the band
    pub const BULK_BASE_G_PER_KG: f64 = 2.2;
    /// Reduction across the full band for bulk
    pub const BULK_SPAN_G_PER_KG: f64 = 0.6;
    /// Flat maintenance multiplier
    pub const MAINTAIN_G_PER_KG: f64 = 1.6;
}

/// Fat share of calories, interpolated over the body-fat band
pub mod fat {
    /// Fat percentage at the lean end of the band
    pub const BASE_PERCENT: f64 = 20.0;
    /// Added percentage across the full band
    pub const SPAN_PERCENT: f64 = 10.0;
}

/// Fiber step function
pub mod fiber {
    /// Floor (g/day)
    pub const MIN_G: f64 = 25.0;
    /// Cap (g/day)
    pub const MAX_G: f64 = 75.0;
    /// Carbohydrate grams per step
    pub const CARBS_PER_STEP_G: f64 = 50.0;
    /// Fiber grams added per step
    pub const G_PER_STEP: f64 = 5.0;
}

/// Energy density of macronutrients (kcal/g)
pub mod energy {
    /// Protein
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Carbohydrate
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Fat
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Hydration targets
pub mod hydration {
    /// Baseline liters per kcal of TDEE (1 ml/kcal)
    pub const LITERS_PER_KCAL: f64 = 0.001;
    /// Pre-workout ml per kg of body weight
    pub const PRE_WORKOUT_ML_PER_KG: f64 = 5.0;
    /// Fixed intra-workout liters
    pub const INTRA_WORKOUT_L: f64 = 0.4;
    /// Fixed post-workout liters
    pub const POST_WORKOUT_L: f64 = 1.25;
}

/// Heart-rate derivations
pub mod heart_rate {
    /// Fox formula base: maximum = 220 - age
    pub const MAX_HR_BASE: u32 = 220;
    /// LISS zone as a fraction of maximum heart rate
    pub const LISS_FRACTION: f64 = 0.6;
}
