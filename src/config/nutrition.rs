// ABOUTME: Nutrition calculator configuration with environment overrides and validation
// ABOUTME: BMR coefficients, activity multipliers, plan multipliers, body-fat bands, macro and hydration factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Configuration
//!
//! Every coefficient the calculator uses lives here. `Default` reproduces the
//! production values exactly; `from_env` lets a deployment override individual
//! values through `NUTRIPLAN_*` variables, and `validate` rejects combinations
//! that would break result invariants (for example a bulk multiplier at or
//! below maintenance).
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Max HR: Fox et al. (1971), 220 - age

use super::error::ConfigError;
use nutriplan_core::constants::nutrition::{
    activity_factors, body_fat_bands, bmr, fat, fiber, heart_rate, hydration, plan_multipliers,
    protein,
};
use nutriplan_core::models::{ActivityLevel, Gender, Goal};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::warn;

/// Values accepted as `NUTRIPLAN_*` overrides
trait OverrideValue: FromStr + Copy {
    /// Whether a successfully parsed value may be used
    fn is_usable(self) -> bool {
        true
    }
}

impl OverrideValue for u32 {}

impl OverrideValue for f64 {
    // "NaN" and "inf" parse as f64 but never make a usable coefficient
    fn is_usable(self) -> bool {
        self.is_finite()
    }
}

/// Read `key` from the environment, falling back to `default` when unset, unparsable or non-finite
fn env_or<T: OverrideValue>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .ok()
            .filter(|value| value.is_usable())
            .unwrap_or_else(|| {
                warn!(env.key = %key, env.value = %raw, "Ignoring unparsable configuration override");
                default
            }),
        Err(_) => default,
    }
}

/// Reject NaN and infinite coefficients before any range check sees them
fn ensure_finite(section: &str, values: &[(&str, f64)]) -> Result<(), ConfigError> {
    for &(name, value) in values {
        if !value.is_finite() {
            return Err(ConfigError::ValueOutOfRange(format!(
                "{section} {name} must be finite, got {value}"
            )));
        }
    }
    Ok(())
}

/// Complete calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// TDEE multipliers per activity level
    pub activity_factors: ActivityFactorsConfig,
    /// TDEE multipliers for the bulk/cut/maintain plans
    pub plan_multipliers: PlanMultipliersConfig,
    /// Gender-specific body-fat interpolation bands
    pub body_fat_bands: BodyFatBandsConfig,
    /// Protein g/kg multipliers
    pub protein: ProteinConfig,
    /// Fat share of calories
    pub fat: FatConfig,
    /// Fiber step function
    pub fiber: FiberConfig,
    /// Hydration factors
    pub hydration: HydrationConfig,
    /// Heart-rate derivation
    pub heart_rate: HeartRateConfig,
}

impl NutritionConfig {
    /// Defaults with environment overrides applied, then validated
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the resulting configuration is inconsistent
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_env();
        config.validate()?;
        Ok(config)
    }

    /// Defaults with `NUTRIPLAN_*` environment overrides applied (not validated)
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            bmr: BmrConfig::from_env(),
            activity_factors: ActivityFactorsConfig::from_env(),
            plan_multipliers: PlanMultipliersConfig::from_env(),
            body_fat_bands: BodyFatBandsConfig::from_env(),
            protein: ProteinConfig::from_env(),
            fat: FatConfig::from_env(),
            fiber: FiberConfig::from_env(),
            hydration: HydrationConfig::from_env(),
            heart_rate: HeartRateConfig::from_env(),
        }
    }

    /// Validate cross-field invariants
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bmr.validate()?;
        self.activity_factors.validate()?;
        self.plan_multipliers.validate()?;
        self.body_fat_bands.validate()?;
        self.protein.validate()?;
        self.fat.validate()?;
        self.fiber.validate()?;
        self.hydration.validate()?;
        self.heart_rate.validate()
    }
}

/// Mifflin-St Jeor coefficients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub weight_coef: f64,
    /// Height coefficient (6.25)
    pub height_coef: f64,
    /// Age coefficient (-5.0)
    pub age_coef: f64,
    /// Male constant (+5)
    pub male_constant: f64,
    /// Female constant (-161)
    pub female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coef: bmr::WEIGHT_COEF,
            height_coef: bmr::HEIGHT_COEF,
            age_coef: bmr::AGE_COEF,
            male_constant: bmr::MALE_CONSTANT,
            female_constant: bmr::FEMALE_CONSTANT,
        }
    }
}

impl BmrConfig {
    /// Load from environment
    #[must_use]
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            weight_coef: env_or("NUTRIPLAN_BMR_WEIGHT_COEF", d.weight_coef),
            height_coef: env_or("NUTRIPLAN_BMR_HEIGHT_COEF", d.height_coef),
            age_coef: env_or("NUTRIPLAN_BMR_AGE_COEF", d.age_coef),
            male_constant: env_or("NUTRIPLAN_BMR_MALE_CONSTANT", d.male_constant),
            female_constant: env_or("NUTRIPLAN_BMR_FEMALE_CONSTANT", d.female_constant),
        }
    }

    /// Gender constant
    #[must_use]
    pub const fn constant_for(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male_constant,
            Gender::Female => self.female_constant,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite(
            "bmr",
            &[
                ("weight_coef", self.weight_coef),
                ("height_coef", self.height_coef),
                ("age_coef", self.age_coef),
                ("male_constant", self.male_constant),
                ("female_constant", self.female_constant),
            ],
        )
    }
}

/// TDEE multipliers per activity level
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.35
    pub sedentary: f64,
    /// Lightly active: 1.65
    pub lightly_active: f64,
    /// Moderately active: 1.9
    pub moderately_active: f64,
    /// Highly active: 2.1
    pub highly_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: activity_factors::SEDENTARY,
            lightly_active: activity_factors::LIGHTLY_ACTIVE,
            moderately_active: activity_factors::MODERATELY_ACTIVE,
            highly_active: activity_factors::HIGHLY_ACTIVE,
        }
    }
}

impl ActivityFactorsConfig {
    /// Load from environment
    #[must_use]
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            sedentary: env_or("NUTRIPLAN_ACTIVITY_SEDENTARY", d.sedentary),
            lightly_active: env_or("NUTRIPLAN_ACTIVITY_LIGHTLY_ACTIVE", d.lightly_active),
            moderately_active: env_or("NUTRIPLAN_ACTIVITY_MODERATELY_ACTIVE", d.moderately_active),
            highly_active: env_or("NUTRIPLAN_ACTIVITY_HIGHLY_ACTIVE", d.highly_active),
        }
    }

    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::HighlyActive => self.highly_active,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite(
            "activity factor",
            &[
                ("sedentary", self.sedentary),
                ("lightly_active", self.lightly_active),
                ("moderately_active", self.moderately_active),
                ("highly_active", self.highly_active),
            ],
        )?;
        if self.sedentary <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "sedentary activity factor must be positive, got {}",
                self.sedentary
            )));
        }
        if !(self.sedentary <= self.lightly_active
            && self.lightly_active <= self.moderately_active
            && self.moderately_active <= self.highly_active)
        {
            return Err(ConfigError::InvalidOrdering(
                "activity factors must not decrease with activity level",
            ));
        }
        Ok(())
    }
}

/// TDEE multipliers for the canonical plans
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanMultipliersConfig {
    /// Bulk: 1.10
    pub bulk: f64,
    /// Cut: 0.90
    pub cut: f64,
    /// Maintain: 1.0
    pub maintain: f64,
}

impl Default for PlanMultipliersConfig {
    fn default() -> Self {
        Self {
            bulk: plan_multipliers::BULK,
            cut: plan_multipliers::CUT,
            maintain: plan_multipliers::MAINTAIN,
        }
    }
}

impl PlanMultipliersConfig {
    /// Load from environment
    #[must_use]
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            bulk: env_or("NUTRIPLAN_PLAN_BULK", d.bulk),
            cut: env_or("NUTRIPLAN_PLAN_CUT", d.cut),
            maintain: env_or("NUTRIPLAN_PLAN_MAINTAIN", d.maintain),
        }
    }

    /// Multiplier for a goal
    #[must_use]
    pub const fn multiplier_for(&self, goal: Goal) -> f64 {
        match goal {
            Goal::Bulk => self.bulk,
            Goal::Cut => self.cut,
            Goal::Maintain => self.maintain,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite(
            "plan multiplier",
            &[("bulk", self.bulk), ("cut", self.cut), ("maintain", self.maintain)],
        )?;
        if self.cut <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "cut plan multiplier must be positive, got {}",
                self.cut
            )));
        }
        if !(self.bulk > self.maintain && self.maintain > self.cut) {
            return Err(ConfigError::InvalidOrdering(
                "plan multipliers must satisfy bulk > maintain > cut",
            ));
        }
        Ok(())
    }
}

/// Gender-specific body-fat bands (%)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyFatBandsConfig {
    /// Male lower bound: 10
    pub male_min: f64,
    /// Male upper bound: 20
    pub male_max: f64,
    /// Female lower bound: 18
    pub female_min: f64,
    /// Female upper bound: 28
    pub female_max: f64,
}

impl Default for BodyFatBandsConfig {
    fn default() -> Self {
        Self {
            male_min: body_fat_bands::MALE_MIN,
            male_max: body_fat_bands::MALE_MAX,
            female_min: body_fat_bands::FEMALE_MIN,
            female_max: body_fat_bands::FEMALE_MAX,
        }
    }
}

impl BodyFatBandsConfig {
    /// Load from environment
    #[must_use]
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            male_min: env_or("NUTRIPLAN_BODY_FAT_MALE_MIN", d.male_min),
            male_max: env_or("NUTRIPLAN_BODY_FAT_MALE_MAX", d.male_max),
            female_min: env_or("NUTRIPLAN_BODY_FAT_FEMALE_MIN", d.female_min),
            female_max: env_or("NUTRIPLAN_BODY_FAT_FEMALE_MAX", d.female_max),
        }
    }

    /// `(min, max)` band for a gender
    #[must_use]
    pub const fn band_for(&self, gender: Gender) -> (f64, f64) {
        match gender {
            Gender::Male => (self.male_min, self.male_max),
            Gender::Female => (self.female_min, self.female_max),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite(
            "body-fat band",
            &[
                ("male_min", self.male_min),
                ("male_max", self.male_max),
                ("female_min", self.female_min),
                ("female_max", self.female_max),
            ],
        )?;
        if self.male_min >= self.male_max {
            return Err(ConfigError::InvalidRange(
                "male body-fat band: min must be < max",
            ));
        }
        if self.female_min >= self.female_max {
            return Err(ConfigError::InvalidRange(
                "female body-fat band: min must be < max",
            ));
        }
        Ok(())
    }
}

/// Protein multipliers (g/kg)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProteinConfig {
    /// Cut multiplier at the lean edge: 2.7
    pub cut_base_g_per_kg: f64,
    /// Cut reduction across the band: 0.9
    pub cut_span_g_per_kg: f64,
    /// Bulk multiplier at the lean edge: 2.2
    pub bulk_base_g_per_kg: f64,
    /// Bulk reduction across the band: 0.6
    pub bulk_span_g_per_kg: f64,
    /// Flat maintenance multiplier: 1.6
    pub maintain_g_per_kg: f64,
}

impl Default for ProteinConfig {
    fn default() -> Self {
        Self {
            cut_base_g_per_kg: protein::CUT_BASE_G_PER_KG,
            cut_span_g_per_kg: protein::CUT_SPAN_G_PER_KG,
            bulk_base_g_per_kg: protein::BULK_BASE_G_PER_KG,
            bulk_span_g_per_kg: protein::BULK_SPAN_G_PER_KG,
            maintain_g_per_kg: protein::MAINTAIN_G_PER_KG,
        }
    }
}

impl ProteinConfig {
    /// Load from environment
    #[must_use]
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            cut_base_g_per_kg: env_or("NUTRIPLAN_PROTEIN_CUT_BASE", d.cut_base_g_per_kg),
            cut_span_g_per_kg: env_or("NUTRIPLAN_PROTEIN_CUT_SPAN", d.cut_span_g_per_kg),
            bulk_base_g_per_kg: env_or("NUTRIPLAN_PROTEIN_BULK_BASE", d.bulk_base_g_per_kg),
            bulk_span_g_per_kg: env_or("NUTRIPLAN_PROTEIN_BULK_SPAN", d.bulk_span_g_per_kg),
            maintain_g_per_kg: env_or("NUTRIPLAN_PROTEIN_MAINTAIN", d.maintain_g_per_kg),
        }
    }

    /// g/kg multiplier for a goal at a band ratio in `[0, 1]`
    #[must_use]
    pub fn multiplier_for(&self, goal: Goal, bf_ratio: f64) -> f64 {
        match goal {
            Goal::Cut => bf_ratio.mul_add(-self.cut_span_g_per_kg, self.cut_base_g_per_kg),
            Goal::Bulk => bf_ratio.mul_add(-self.bulk_span_g_per_kg, self.bulk_base_g_per_kg),
            Goal::Maintain => self.maintain_g_per_kg,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite(
            "protein",
            &[
                ("cut_base_g_per_kg", self.cut_base_g_per_kg),
                ("cut_span_g_per_kg", self.cut_span_g_per_kg),
                ("bulk_base_g_per_kg", self.bulk_base_g_per_kg),
                ("bulk_span_g_per_kg", self.bulk_span_g_per_kg),
                ("maintain_g_per_kg", self.maintain_g_per_kg),
            ],
        )?;
        if self.cut_span_g_per_kg > self.cut_base_g_per_kg
            || self.bulk_span_g_per_kg > self.bulk_base_g_per_kg
        {
            return Err(ConfigError::InvalidRange(
                "protein span must not exceed its base multiplier",
            ));
        }
        if self.maintain_g_per_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "maintenance protein must be positive, got {}",
                self.maintain_g_per_kg
            )));
        }
        Ok(())
    }
}

/// Fat share of calories (%)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FatConfig {
    /// Share at the lean edge: 20
    pub base_percent: f64,
    /// Added share across the band: 10
    pub span_percent: f64,
}

impl Default for FatConfig {
    fn default() -> Self {
        Self {
            base_percent: fat::BASE_PERCENT,
            span_percent: fat::SPAN_PERCENT,
        }
    }
}

impl FatConfig {
    /// Load from environment
    #[must_use]
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            base_percent: env_or("NUTRIPLAN_FAT_BASE_PERCENT", d.base_percent),
            span_percent: env_or("NUTRIPLAN_FAT_SPAN_PERCENT", d.span_percent),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite(
            "fat",
            &[
                ("base_percent", self.base_percent),
                ("span_percent", self.span_percent),
            ],
        )?;
        let top = self.base_percent + self.span_percent;
        if self.base_percent < 0.0 || self.span_percent < 0.0 || top > 100.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "fat share must stay within 0-100%, got {}-{top}%",
                self.base_percent
            )));
        }
        Ok(())
    }
}

/// Fiber step function (g/day)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FiberConfig {
    /// Floor: 25
    pub min_g: f64,
    /// Cap: 75
    pub max_g: f64,
    /// Carbohydrate grams per step: 50
    pub carbs_per_step_g: f64,
    /// Fiber grams per step: 5
    pub g_per_step: f64,
}

impl Default for FiberConfig {
    fn default() -> Self {
        Self {
            min_g: fiber::MIN_G,
            max_g: fiber::MAX_G,
            carbs_per_step_g: fiber::CARBS_PER_STEP_G,
            g_per_step: fiber::G_PER_STEP,
        }
    }
}

impl FiberConfig {
    /// Load from environment
    #[must_use]
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            min_g: env_or("NUTRIPLAN_FIBER_MIN_G", d.min_g),
            max_g: env_or("NUTRIPLAN_FIBER_MAX_G", d.max_g),
            carbs_per_step_g: env_or("NUTRIPLAN_FIBER_CARBS_PER_STEP_G", d.carbs_per_step_g),
            g_per_step: env_or("NUTRIPLAN_FIBER_G_PER_STEP", d.g_per_step),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite(
            "fiber",
            &[
                ("min_g", self.min_g),
                ("max_g", self.max_g),
                ("carbs_per_step_g", self.carbs_per_step_g),
                ("g_per_step", self.g_per_step),
            ],
        )?;
        if self.min_g > self.max_g {
            return Err(ConfigError::InvalidRange("fiber: min_g must be <= max_g"));
        }
        if self.carbs_per_step_g <= 0.0 || self.g_per_step < 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "fiber step must be positive, got {}g carbs / {}g fiber",
                self.carbs_per_step_g, self.g_per_step
            )));
        }
        Ok(())
    }
}

/// Hydration factors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HydrationConfig {
    /// Baseline liters per kcal of TDEE: 0.001
    pub liters_per_kcal: f64,
    /// Pre-workout ml per kg: 5
    pub pre_workout_ml_per_kg: f64,
    /// Fixed intra-workout liters: 0.4
    pub intra_workout_l: f64,
    /// Fixed post-workout liters: 1.25
    pub post_workout_l: f64,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            liters_per_kcal: hydration::LITERS_PER_KCAL,
            pre_workout_ml_per_kg: hydration::PRE_WORKOUT_ML_PER_KG,
            intra_workout_l: hydration::INTRA_WORKOUT_L,
            post_workout_l: hydration::POST_WORKOUT_L,
        }
    }
}

impl HydrationConfig {
    /// Load from environment
    #[must_use]
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            liters_per_kcal: env_or("NUTRIPLAN_HYDRATION_LITERS_PER_KCAL", d.liters_per_kcal),
            pre_workout_ml_per_kg: env_or(
                "NUTRIPLAN_HYDRATION_PRE_WORKOUT_ML_PER_KG",
                d.pre_workout_ml_per_kg,
            ),
            intra_workout_l: env_or("NUTRIPLAN_HYDRATION_INTRA_WORKOUT_L", d.intra_workout_l),
            post_workout_l: env_or("NUTRIPLAN_HYDRATION_POST_WORKOUT_L", d.post_workout_l),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            ("liters_per_kcal", self.liters_per_kcal),
            ("pre_workout_ml_per_kg", self.pre_workout_ml_per_kg),
            ("intra_workout_l", self.intra_workout_l),
            ("post_workout_l", self.post_workout_l),
        ];
        ensure_finite("hydration", &values)?;
        for (name, value) in values {
            if value < 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "hydration {name} must not be negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Heart-rate derivation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeartRateConfig {
    /// Maximum heart rate base: 220
    pub max_hr_base: u32,
    /// LISS fraction of maximum: 0.6
    pub liss_fraction: f64,
}

impl Default for HeartRateConfig {
    fn default() -> Self {
        Self {
            max_hr_base: heart_rate::MAX_HR_BASE,
            liss_fraction: heart_rate::LISS_FRACTION,
        }
    }
}

impl HeartRateConfig {
    /// Load from environment
    #[must_use]
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            max_hr_base: env_or("NUTRIPLAN_HR_MAX_BASE", d.max_hr_base),
            liss_fraction: env_or("NUTRIPLAN_HR_LISS_FRACTION", d.liss_fraction),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.liss_fraction > 0.0 && self.liss_fraction <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "liss_fraction must be in (0, 1], got {}",
                self.liss_fraction
            )));
        }
        Ok(())
    }
}
