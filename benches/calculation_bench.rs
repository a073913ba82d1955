// ABOUTME: Criterion benchmarks for the nutrition calculator and calculation service
// ABOUTME: Measures the pure formulas, the validated service path, and report serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for nutrition calculation.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutriplan::config::NutritionConfig;
use nutriplan::formatters::{format_report, OutputFormat};
use nutriplan::intelligence::{build_plan, calculate_nutrition};
use nutriplan::models::{ActivityLevel, Gender, Goal, RawMetrics, UnitSystem, UserMetrics};
use nutriplan::services::{CalculationOptions, CalculationService};

fn sample_metrics(index: usize) -> UserMetrics {
    let gender = if index % 2 == 0 {
        Gender::Male
    } else {
        Gender::Female
    };
    UserMetrics {
        gender,
        weight: 50.0 + (index % 90) as f64,
        height: 150.0 + (index % 50) as f64,
        age: 16 + (index % 64) as u32,
        body_fat_percentage: 8.0 + (index % 27) as f64,
        activity_level: ActivityLevel::ALL[index % ActivityLevel::ALL.len()],
    }
}

fn bench_calculator(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculator");
    let config = NutritionConfig::default();
    let metrics = sample_metrics(0);

    group.bench_function("calculate_nutrition", |b| {
        b.iter(|| calculate_nutrition(black_box(&metrics), black_box(&config)));
    });

    group.bench_function("build_plan_bulk", |b| {
        b.iter(|| build_plan(black_box(&metrics), black_box(3382.0), Goal::Bulk, 1.10, &config));
    });

    for count in [100_usize, 1_000] {
        let batch: Vec<UserMetrics> = (0..count).map(sample_metrics).collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("batch", count), &batch, |b, batch| {
            b.iter(|| {
                batch
                    .iter()
                    .map(|m| calculate_nutrition(m, &config).nutrition.maintain.calories)
                    .sum::<i32>()
            });
        });
    }

    group.finish();
}

fn bench_service(c: &mut Criterion) {
    let mut group = c.benchmark_group("service");
    let service = CalculationService::default();
    let raw: RawMetrics = sample_metrics(0).into();
    let options = CalculationOptions {
        include_display_variants: true,
    };

    group.bench_function("validate_and_calculate", |b| {
        b.iter(|| service.calculate(black_box(&raw), UnitSystem::Metric));
    });

    group.bench_function("with_display_variants", |b| {
        b.iter(|| service.calculate_with_options(black_box(&raw), UnitSystem::Metric, options));
    });

    if let Ok(report) = service.calculate_with_options(&raw, UnitSystem::Metric, options) {
        group.bench_function("format_json", |b| {
            b.iter(|| format_report(black_box(&report), OutputFormat::Json));
        });
        group.bench_function("format_text", |b| {
            b.iter(|| format_report(black_box(&report), OutputFormat::Text));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_calculator, bench_service);
criterion_main!(benches);
