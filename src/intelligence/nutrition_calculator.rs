// ABOUTME: Nutrition calculation algorithms turning biometric input into daily targets
// ABOUTME: BMR, TDEE, body-fat interpolated macros, hydration, and heart-rate derivations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Pure, deterministic functions from [`UserMetrics`] to [`CalculationResults`].
//! Nothing here validates input: weight, height, and body fat are assumed
//! finite and metric. Degenerate values (zero height, NaN weight) propagate as
//! non-finite numbers rather than errors; see [`CalculationResults::is_finite`].
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! Protein and fat targets interpolate linearly over a gender-specific
//! body-fat band: leaner individuals get more protein per kilogram and a lower
//! fat share. These are product rules, not a published guideline.

use crate::config::nutrition::{
    ActivityFactorsConfig, BmrConfig, BodyFatBandsConfig, FiberConfig, HeartRateConfig,
    HydrationConfig, NutritionConfig,
};
use nutriplan_core::constants::nutrition::energy;
use nutriplan_core::constants::units::CM_PER_METER;
use nutriplan_core::models::{
    ActivityLevel, BodyComposition, CalculationResults, Gender, Goal, HeartRate, Hydration,
    HydrationPlan, NutritionPlan, NutritionPlans, PlanEstimate, UserMetrics,
};

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
#[must_use]
pub fn calculate_bmr(metrics: &UserMetrics, config: &BmrConfig) -> f64 {
    let weight_component = config.weight_coef * metrics.weight;
    let height_component = config.height_coef * metrics.height;
    let age_component = config.age_coef * f64::from(metrics.age);

    weight_component + height_component + age_component + config.constant_for(metrics.gender)
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x activity multiplier
/// (sedentary 1.35, lightly active 1.65, moderately active 1.9, highly active 2.1)
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * config.factor_for(activity_level)
}

/// Position of a body-fat percentage within the gender band, in `[0, 1]`
///
/// The percentage is clamped to the band before the ratio is taken, so values
/// outside the band behave exactly like the nearest edge.
#[must_use]
pub fn body_fat_ratio(body_fat_percentage: f64, gender: Gender, bands: &BodyFatBandsConfig) -> f64 {
    let (min, max) = bands.band_for(gender);
    // f64::clamp panics on an inverted or NaN band, which only an unvalidated config can carry
    if min.is_nan() || max.is_nan() || min > max {
        return f64::NAN;
    }
    let clamped = body_fat_percentage.clamp(min, max);
    (clamped - min) / (max - min)
}

/// Calculate daily protein target (g) for a goal
///
/// Formula: protein = `weight_kg` x multiplier, where the multiplier is
/// - cut: 2.7 - ratio x 0.9 (1.8-2.7 g/kg)
/// - bulk: 2.2 - ratio x 0.6 (1.6-2.2 g/kg)
/// - maintain: 1.6 g/kg
#[must_use]
pub fn calculate_protein(metrics: &UserMetrics, goal: Goal, config: &NutritionConfig) -> f64 {
    let ratio = body_fat_ratio(
        metrics.body_fat_percentage,
        metrics.gender,
        &config.body_fat_bands,
    );
    metrics.weight * config.protein.multiplier_for(goal, ratio)
}

/// Calculate daily fat target (g) for a calorie budget
///
/// Formula: fat = (calories x (20 + ratio x 10) / 100) / 9 kcal/g
#[must_use]
pub fn calculate_fat(
    calories: f64,
    body_fat_percentage: f64,
    gender: Gender,
    config: &NutritionConfig,
) -> f64 {
    let ratio = body_fat_ratio(body_fat_percentage, gender, &config.body_fat_bands);
    let fat_percent = ratio.mul_add(config.fat.span_percent, config.fat.base_percent);
    (calories * fat_percent / 100.0) / energy::KCAL_PER_G_FAT
}

/// Calculate fiber target (g) from carbohydrate grams
///
/// Step function: 25 g plus 5 g per full 50 g of carbs, held within 25-75 g.
#[must_use]
pub fn calculate_fiber(carbs: f64, config: &FiberConfig) -> f64 {
    let steps = (carbs / config.carbs_per_step_g).floor();
    steps
        .mul_add(config.g_per_step, config.min_g)
        .min(config.max_g)
        .max(config.min_g)
}

/// Build one rounded plan at `calorie_multiplier` x TDEE
///
/// Protein follows `goal`; fat comes from the rounded calorie budget; carbs
/// fill the remaining energy.
#[must_use]
pub fn build_plan(
    metrics: &UserMetrics,
    tdee: f64,
    goal: Goal,
    calorie_multiplier: f64,
    config: &NutritionConfig,
) -> NutritionPlan {
    estimate_plan(metrics, tdee, goal, calorie_multiplier, config).to_plan()
}

/// Rounded plan values, still as `f64`
#[must_use]
pub fn estimate_plan(
    metrics: &UserMetrics,
    tdee: f64,
    goal: Goal,
    calorie_multiplier: f64,
    config: &NutritionConfig,
) -> PlanEstimate {
    let calories = (tdee * calorie_multiplier).round();
    let protein = calculate_protein(metrics, goal, config).round();
    let fat = calculate_fat(
        calories,
        metrics.body_fat_percentage,
        metrics.gender,
        config,
    )
    .round();
    let committed = protein.mul_add(
        energy::KCAL_PER_G_PROTEIN,
        fat * energy::KCAL_PER_G_FAT,
    );
    let carbs = ((calories - committed) / energy::KCAL_PER_G_CARBS).round();
    let fiber = calculate_fiber(carbs, &config.fiber).round();

    PlanEstimate {
        calories,
        protein,
        fat,
        carbs,
        fiber,
    }
}

/// First canonical plan whose values are not all finite, if any
///
/// [`calculate_nutrition`] converts plans to whole units, which hides NaN and
/// infinity; callers that need to reject degenerate results check here.
#[must_use]
pub fn first_non_finite_plan(
    metrics: &UserMetrics,
    tdee: f64,
    config: &NutritionConfig,
) -> Option<Goal> {
    Goal::ALL.into_iter().find(|&goal| {
        !estimate_plan(
            metrics,
            tdee,
            goal,
            config.plan_multipliers.multiplier_for(goal),
            config,
        )
        .is_finite()
    })
}

/// Lean body mass (kg): weight x (1 - body fat / 100)
#[must_use]
pub fn calculate_lean_body_mass(weight: f64, body_fat_percentage: f64) -> f64 {
    weight * (1.0 - body_fat_percentage / 100.0)
}

/// Body mass index: weight / height(m)²
#[must_use]
pub fn calculate_bmi(weight: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / CM_PER_METER;
    weight / (height_m * height_m)
}

/// Rest-day and training-day hydration (liters)
///
/// Baseline is 1 ml per kcal of TDEE. Training adds 5 ml/kg before, 0.4 L
/// during, and 1.25 L after the session.
#[must_use]
pub fn calculate_hydration(tdee: f64, weight: f64, config: &HydrationConfig) -> Hydration {
    let baseline = tdee * config.liters_per_kcal;
    let pre_workout = config.pre_workout_ml_per_kg * weight / 1000.0;
    let fixed = config.intra_workout_l + config.post_workout_l;

    Hydration {
        regular: HydrationPlan {
            baseline,
            total: baseline,
            ..HydrationPlan::default()
        },
        training: HydrationPlan {
            baseline,
            pre_workout,
            intra_workout: config.intra_workout_l,
            post_workout: config.post_workout_l,
            total: baseline + pre_workout + fixed,
        },
    }
}

/// Age-derived heart-rate targets: max = 220 - age, LISS = 60% of max
#[must_use]
pub fn calculate_heart_rate(age: u32, config: &HeartRateConfig) -> HeartRate {
    let maximum = i64::from(config.max_hr_base) - i64::from(age);
    let liss_zone = (maximum as f64 * config.liss_fraction).round();

    HeartRate {
        maximum: maximum as i32,
        liss_zone: liss_zone as i32,
    }
}

/// Calculate the complete result bundle
///
/// This is the main entry point: BMR, TDEE, the bulk/cut/maintain plans,
/// hydration, and heart-rate targets.
#[must_use]
pub fn calculate_nutrition(metrics: &UserMetrics, config: &NutritionConfig) -> CalculationResults {
    let bmr = calculate_bmr(metrics, &config.bmr);
    let tdee = calculate_tdee(bmr, metrics.activity_level, &config.activity_factors);

    let plan = |goal: Goal| {
        build_plan(
            metrics,
            tdee,
            goal,
            config.plan_multipliers.multiplier_for(goal),
            config,
        )
    };

    CalculationResults {
        body_composition: BodyComposition {
            bmr,
            tdee,
            lean_body_mass: calculate_lean_body_mass(metrics.weight, metrics.body_fat_percentage),
            bmi: calculate_bmi(metrics.weight, metrics.height),
        },
        nutrition: NutritionPlans {
            bulk: plan(Goal::Bulk),
            cut: plan(Goal::Cut),
            maintain: plan(Goal::Maintain),
        },
        hydration: calculate_hydration(tdee, metrics.weight, &config.hydration),
        heart_rate: calculate_heart_rate(metrics.age, &config.heart_rate),
    }
}
