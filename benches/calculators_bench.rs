// ABOUTME: Criterion benchmarks for the calculator formulas and tools page dispatch
// ABOUTME: Measures conversion breakdowns, 1RM tables, tier progress and registry execution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

//! Criterion benchmarks for the calculators.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ironbox::constants::percentages::TRAINING_PERCENTAGES;
use ironbox::constants::tools;
use ironbox::permissions::UserRole;
use ironbox::tools::ToolRegistry;
use ironbox_calculators::conversion::convert_field;
use ironbox_calculators::{tier_progress, OneRepMaxEstimate, WodCatalog};
use ironbox_core::models::{LiftEntry, MassUnit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    for input in ["82.5", "225", "1000"] {
        group.bench_with_input(BenchmarkId::new("convert_field", input), input, |b, raw| {
            b.iter(|| convert_field(black_box(raw), MassUnit::Pounds));
        });
    }
    group.finish();
}

fn bench_one_rep_max(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_rep_max");
    for reps in [1_u32, 5, 10] {
        group.bench_with_input(BenchmarkId::new("estimate_with_table", reps), &reps, |b, &reps| {
            b.iter(|| {
                LiftEntry::from_input(Some(black_box(100.0)), Some(reps))
                    .and_then(|entry| OneRepMaxEstimate::new(entry, &TRAINING_PERCENTAGES))
            });
        });
    }
    group.finish();
}

fn bench_tiers(c: &mut Criterion) {
    c.bench_function("tier_progress", |b| {
        b.iter(|| tier_progress(black_box(312.5)));
    });
}

fn bench_registry(c: &mut Criterion) {
    let registry = ToolRegistry::with_builtin_tools(WodCatalog::reference());
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let params = json!({});
    c.bench_function("registry_wod_generator", |b| {
        b.iter(|| registry.execute(tools::WOD_GENERATOR, UserRole::Athlete, &params, &mut rng));
    });
}

criterion_group!(
    benches,
    bench_conversion,
    bench_one_rep_max,
    bench_tiers,
    bench_registry
);
criterion_main!(benches);
