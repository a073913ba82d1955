// ABOUTME: Unit conversion commands for nutriplan-cli
// ABOUTME: Converts weight between pounds and kilograms and height between feet/inches and centimeters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::print_json;
use nutriplan::errors::{AppError, AppResult};
use nutriplan::units::{cm_to_feet, cm_to_feet_inches, feet_inches_to_cm, kg_to_lbs, lbs_to_kg};
use serde_json::json;

/// Convert a weight given in exactly one unit
pub fn weight(lbs: Option<f64>, kg: Option<f64>) -> AppResult<()> {
    let (lbs, kg) = match (lbs, kg) {
        (Some(lbs), None) => (lbs, lbs_to_kg(lbs)),
        (None, Some(kg)) => (kg_to_lbs(kg), kg),
        _ => return Err(AppError::invalid_input("pass exactly one of --lbs or --kg")),
    };
    print_json(&json!({ "lbs": lbs, "kg": kg }))
}

/// Convert a height given in exactly one unit
pub fn height(feet: Option<f64>, inches: Option<f64>, cm: Option<f64>) -> AppResult<()> {
    let cm = match (feet, cm) {
        (Some(feet), None) => feet_inches_to_cm(feet, inches.unwrap_or(0.0)),
        (None, Some(cm)) => cm,
        _ => return Err(AppError::invalid_input("pass exactly one of --feet or --cm")),
    };
    print_json(&json!({
        "cm": cm,
        "feet": cm_to_feet(cm),
        "feet_inches": cm_to_feet_inches(cm),
    }))
}
