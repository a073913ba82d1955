// ABOUTME: Integration tests for display variants and report formatting
// ABOUTME: Covers variant multipliers, protein rules, and JSON/text rendering of reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{reference_male, reference_raw};
use nutriplan::config::NutritionConfig;
use nutriplan::formatters::{format_report, OutputFormat};
use nutriplan::intelligence::{calculate_nutrition, calculate_protein};
use nutriplan::models::{Goal, UnitSystem};
use nutriplan::presentation::{display_variants, DisplayVariant};
use nutriplan::services::{CalculationOptions, CalculationReport, CalculationService};

fn report_with_variants() -> CalculationReport {
    CalculationService::default()
        .calculate_with_options(
            &reference_raw(),
            UnitSystem::Metric,
            CalculationOptions {
                include_display_variants: true,
            },
        )
        .unwrap()
}

#[test]
fn test_variant_calories_follow_display_multipliers() {
    let config = NutritionConfig::default();
    let metrics = reference_male();
    let results = calculate_nutrition(&metrics, &config);
    let variants = display_variants(&metrics, &results, &config);

    let calories: Vec<i32> = variants.iter().map(|v| v.plan.calories).collect();
    // TDEE 3382 x 1.05 / 1.15 / 0.95 / 0.85
    assert_eq!(calories, vec![3551, 3889, 3213, 2875]);

    let order: Vec<DisplayVariant> = variants.iter().map(|v| v.variant).collect();
    assert_eq!(order, DisplayVariant::ALL.to_vec());
}

#[test]
fn test_variants_use_goal_protein_rules() {
    let config = NutritionConfig::default();
    let metrics = reference_male();
    let results = calculate_nutrition(&metrics, &config);
    let bulk_protein = calculate_protein(&metrics, Goal::Bulk, &config).round() as i32;
    let cut_protein = calculate_protein(&metrics, Goal::Cut, &config).round() as i32;

    for variant in display_variants(&metrics, &results, &config) {
        let expected = match variant.variant.goal() {
            Goal::Bulk => bulk_protein,
            Goal::Cut => cut_protein,
            Goal::Maintain => unreachable!("no maintain display variant"),
        };
        assert_eq!(variant.plan.protein, expected);
        assert!((variant.plan.macro_calories() - f64::from(variant.plan.calories)).abs() <= 4.0);
    }
}

#[test]
fn test_variants_do_not_touch_canonical_plans() {
    let config = NutritionConfig::default();
    let metrics = reference_male();
    let results = calculate_nutrition(&metrics, &config);
    let before = results;
    let _ = display_variants(&metrics, &results, &config);
    assert_eq!(results, before);
}

#[test]
fn test_json_report_parses_back() {
    let report = report_with_variants();
    let output = format_report(&report, OutputFormat::Json).unwrap();
    assert_eq!(output.content_type, "application/json");

    let parsed: CalculationReport = serde_json::from_str(&output.data).unwrap();
    assert_eq!(parsed.request_id, report.request_id);
    assert_eq!(parsed.results.nutrition, report.results.nutrition);
    assert_eq!(parsed.display_variants, report.display_variants);

    let value: serde_json::Value = serde_json::from_str(&output.data).unwrap();
    assert_eq!(value["results"]["nutrition"]["bulk"]["calories"], 3720);
    assert_eq!(value["display_variants"][0]["variant"], "lean_bulk");
}

#[test]
fn test_text_report_lists_plans_and_warnings() {
    let mut report = report_with_variants();
    report.warnings.push("Body fat looks unusual".to_owned());

    let output = format_report(&report, OutputFormat::Text).unwrap();
    for needle in [
        "Bulk",
        "Cut",
        "Maintain",
        "Lean bulk",
        "Aggressive cut",
        "3382",
        "190 bpm",
        "Body fat looks unusual",
    ] {
        assert!(output.data.contains(needle), "missing {needle:?} in\n{}", output.data);
    }
}
