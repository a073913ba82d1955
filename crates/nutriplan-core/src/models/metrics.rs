// ABOUTME: Biometric input models with string parsing for every enum
// ABOUTME: Gender, ActivityLevel, Goal, UnitSystem, UserMetrics, and unvalidated RawMetrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lower-case a user string and drop separators so `lightly_active`,
/// `lightly-active` and `lightlyActive` compare equal.
fn normalize_token(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Gender for BMR and body-fat band selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal BMR constant, 10-20% band)
    Male,
    /// Female (-161 kcal BMR constant, 18-28% band)
    Female,
}

impl Gender {
    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(AppError::invalid_input(format!("unknown gender: {s}")).with_field("gender")),
        }
    }
}

/// Activity level for the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise
    #[serde(alias = "lightlyActive")]
    LightlyActive,
    /// Moderate exercise
    #[serde(alias = "moderatelyActive")]
    ModeratelyActive,
    /// Hard training
    #[serde(alias = "highlyActive")]
    HighlyActive,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [Self; 4] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::HighlyActive,
    ];

    /// Stable snake_case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::HighlyActive => "highly_active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightlyactive" | "light" => Ok(Self::LightlyActive),
            "moderatelyactive" | "moderate" => Ok(Self::ModeratelyActive),
            "highlyactive" | "high" => Ok(Self::HighlyActive),
            _ => Err(
                AppError::invalid_input(format!("unknown activity level: {s}"))
                    .with_field("activity_level"),
            ),
        }
    }
}

/// Calorie goal of a nutrition plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric surplus
    Bulk,
    /// Caloric deficit
    Cut,
    /// Energy balance
    Maintain,
}

impl Goal {
    /// All goals in display order
    pub const ALL: [Self; 3] = [Self::Bulk, Self::Cut, Self::Maintain];

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bulk => "Bulk",
            Self::Cut => "Cut",
            Self::Maintain => "Maintain",
        }
    }

    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bulk => "bulk",
            Self::Cut => "cut",
            Self::Maintain => "maintain",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "bulk" => Ok(Self::Bulk),
            "cut" => Ok(Self::Cut),
            "maintain" | "maintenance" => Ok(Self::Maintain),
            _ => Err(AppError::invalid_input(format!("unknown goal: {s}")).with_field("goal")),
        }
    }
}

/// Unit system of user-entered weight and height
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Kilograms and centimeters
    #[default]
    Metric,
    /// Pounds and decimal feet
    Imperial,
}

impl UnitSystem {
    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "metric" | "si" => Ok(Self::Metric),
            "imperial" | "us" => Ok(Self::Imperial),
            _ => Err(AppError::invalid_input(format!("unknown unit system: {s}")).with_field("units")),
        }
    }
}

/// Validated, metric biometric input to the calculator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UserMetrics {
    /// Gender
    pub gender: Gender,
    /// Body weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
    /// Age in years
    pub age: u32,
    /// Body-fat percentage (0-100)
    pub body_fat_percentage: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
}

/// Unvalidated biometric input in the caller's unit system
///
/// Imperial weight is pounds, imperial height is decimal feet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RawMetrics {
    /// Gender
    pub gender: Gender,
    /// Body weight (kg or lb)
    pub weight: f64,
    /// Height (cm or ft)
    pub height: f64,
    /// Age in years
    pub age: u32,
    /// Body-fat percentage
    #[serde(alias = "bodyFatPercentage", alias = "body_fat")]
    pub body_fat_percentage: f64,
    /// Activity level
    #[serde(alias = "activityLevel", alias = "activity")]
    pub activity_level: ActivityLevel,
}

impl From<UserMetrics> for RawMetrics {
    fn from(metrics: UserMetrics) -> Self {
        Self {
            gender: metrics.gender,
            weight: metrics.weight,
            height: metrics.height,
            age: metrics.age,
            body_fat_percentage: metrics.body_fat_percentage,
            activity_level: metrics.activity_level,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_activity_level_accepts_common_spellings() {
        for spelling in ["lightlyActive", "lightly_active", "Lightly-Active", "light"] {
            assert_eq!(
                spelling.parse::<ActivityLevel>().unwrap(),
                ActivityLevel::LightlyActive
            );
        }
        assert_eq!(
            "highlyActive".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::HighlyActive
        );
    }

    #[test]
    fn test_unknown_activity_level_is_rejected() {
        let err = "couch_potato".parse::<ActivityLevel>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.context.field.as_deref(), Some("activity_level"));
    }

    #[test]
    fn test_serde_accepts_camel_case_activity_alias() {
        let level: ActivityLevel = serde_json::from_str("\"moderatelyActive\"").unwrap();
        assert_eq!(level, ActivityLevel::ModeratelyActive);
        assert_eq!(
            serde_json::to_string(&level).unwrap(),
            "\"moderately_active\""
        );
    }

    #[test]
    fn test_gender_and_goal_parsing() {
        assert_eq!("F".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("maintenance".parse::<Goal>().unwrap(), Goal::Maintain);
        assert!("other".parse::<Gender>().is_err());
        assert_eq!("imperial".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
    }
}
