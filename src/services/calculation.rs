// ABOUTME: Calculation service validating raw metrics and producing complete nutrition reports
// ABOUTME: Adds request ids, logging, display variants, and error mapping around the pure calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::nutrition::NutritionConfig;
use crate::intelligence::nutrition_calculator::{calculate_nutrition, first_non_finite_plan};
use crate::logging::CalculationLogger;
use crate::presentation::{display_variants, DisplayPlan};
use crate::units::normalize;
use crate::validation::{MetricsValidator, ValidationReport};
use nutriplan_core::errors::{AppError, AppResult, ErrorCode};
use nutriplan_core::models::{CalculationResults, RawMetrics, UnitSystem, UserMetrics};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// A calculation request as read from JSON
///
/// Metric fields sit at the top level next to an optional `units` key:
/// `{"units": "imperial", "gender": "male", "weight": 180, ...}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalculationRequest {
    /// Unit system of `weight`/`height` (metric when absent)
    #[serde(default)]
    pub units: UnitSystem,
    /// Raw metrics
    #[serde(flatten)]
    pub metrics: RawMetrics,
}

impl CalculationRequest {
    /// Parse a request from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the JSON is malformed or a field is missing
    /// or has an unknown value.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            AppError::new(ErrorCode::InvalidFormat, format!("invalid request: {e}")).with_source(e)
        })
    }

    /// Read and parse a request file
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the file cannot be read, otherwise the
    /// errors of [`Self::from_json_str`].
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("cannot read {}: {e}", path.display())).with_source(e)
        })?;
        Self::from_json_str(&contents)
    }
}

/// Optional extras for a calculation
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculationOptions {
    /// Also compute the display-only bulk/cut variants
    pub include_display_variants: bool,
}

/// Everything produced for one calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationReport {
    /// Correlation id, also present in log events
    pub request_id: String,
    /// Unit system of the original input
    pub unit_system: UnitSystem,
    /// Normalized metric input the calculator used
    pub metrics: UserMetrics,
    /// Calculator output
    pub results: CalculationResults,
    /// Validation warnings
    pub warnings: Vec<String>,
    /// Display-only variants, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_variants: Option<Vec<DisplayPlan>>,
}

/// Validates input and runs the calculator against one configuration
#[derive(Debug, Clone)]
pub struct CalculationService {
    config: Arc<NutritionConfig>,
    validator: MetricsValidator,
}

impl Default for CalculationService {
    fn default() -> Self {
        Self::new(Arc::new(NutritionConfig::default()))
    }
}

impl CalculationService {
    /// Create a service for the given configuration
    #[must_use]
    pub fn new(config: Arc<NutritionConfig>) -> Self {
        let validator = MetricsValidator::new(config.body_fat_bands.clone());
        Self { config, validator }
    }

    /// Create a service from `NUTRIPLAN_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns a config error when the overrides break an ordering invariant
    pub fn from_env() -> AppResult<Self> {
        let config = NutritionConfig::load()?;
        Ok(Self::new(Arc::new(config)))
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &NutritionConfig {
        &self.config
    }

    /// Validate without calculating
    #[must_use]
    pub fn validate(&self, raw: &RawMetrics, unit_system: UnitSystem) -> ValidationReport {
        self.validator.validate_user_metrics(raw, unit_system)
    }

    /// Validate, normalize, and calculate
    ///
    /// # Errors
    ///
    /// See [`Self::calculate_with_options`].
    pub fn calculate(
        &self,
        raw: &RawMetrics,
        unit_system: UnitSystem,
    ) -> AppResult<CalculationReport> {
        self.calculate_with_options(raw, unit_system, CalculationOptions::default())
    }

    /// Run a parsed request
    ///
    /// # Errors
    ///
    /// See [`Self::calculate_with_options`].
    pub fn calculate_request(
        &self,
        request: &CalculationRequest,
        options: CalculationOptions,
    ) -> AppResult<CalculationReport> {
        self.calculate_with_options(&request.metrics, request.units, options)
    }

    /// Validate, normalize, and calculate with extras
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when validation reports errors (all messages
    /// are in the error details), and `InternalError` if the calculator produces
    /// a non-finite number.
    pub fn calculate_with_options(
        &self,
        raw: &RawMetrics,
        unit_system: UnitSystem,
        options: CalculationOptions,
    ) -> AppResult<CalculationReport> {
        let request_id = Uuid::new_v4().to_string();
        debug!(request.id = %request_id, units = %unit_system, "Validating metrics");

        let report = self.validate(raw, unit_system);
        for warning in &report.warnings {
            warn!(request.id = %request_id, "{warning}");
        }
        if !report.is_valid {
            debug!(request.id = %request_id, errors = report.errors.len(), "Rejected metrics");
            return Err(AppError::out_of_range(report.errors.join("; "))
                .with_request_id(&request_id)
                .with_details(json!({
                    "errors": report.errors,
                    "warnings": report.warnings,
                })));
        }

        let metrics = normalize(raw, unit_system);
        debug!(
            request.id = %request_id,
            weight_kg = metrics.weight,
            height_cm = metrics.height,
            "Normalized metrics"
        );

        let results = calculate_nutrition(&metrics, &self.config);
        if !results.is_finite() {
            return Err(AppError::internal("calculation produced a non-finite value")
                .with_request_id(&request_id));
        }
        if let Some(goal) =
            first_non_finite_plan(&metrics, results.body_composition.tdee, &self.config)
        {
            return Err(AppError::internal(format!(
                "{} plan produced a non-finite value",
                goal.label()
            ))
            .with_request_id(&request_id));
        }

        let variants = options
            .include_display_variants
            .then(|| display_variants(&metrics, &results, &self.config));

        CalculationLogger::log_calculation(
            &request_id,
            metrics.gender,
            metrics.activity_level,
            results.body_composition.tdee,
            report.warnings.len(),
        );

        Ok(CalculationReport {
            request_id,
            unit_system,
            metrics,
            results,
            warnings: report.warnings,
            display_variants: variants,
        })
    }
}
