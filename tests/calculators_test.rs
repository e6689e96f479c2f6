// ABOUTME: Integration tests for the calculator formulas through their public API
// ABOUTME: Covers the round-trip law, Epley values, tier boundaries, table rounding and pick uniformity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use std::collections::HashMap;

use ironbox_calculators::{
    classify_tier, convert_mass, estimate_one_rep_max, percentage_table, pick_random_template,
    PercentageRow, WodCatalog,
};
use ironbox_core::errors::ErrorCode;
use ironbox_core::models::{AvatarTier, MassUnit, WodKind, WodTemplate};

// === Unit conversion ===

#[test]
fn test_round_trip_law_over_range() {
    for tenth in 0..=5_000_u32 {
        let value = f64::from(tenth) / 10.0;
        let lb = convert_mass(value, MassUnit::Kilograms).unwrap();
        let back = convert_mass(lb, MassUnit::Pounds).unwrap();
        assert!(
            (back - value).abs() <= 0.01,
            "round trip drifted: {value} kg -> {lb} lb -> {back} kg"
        );
    }
}

#[test]
fn test_negative_mass_is_invalid_input() {
    let err = convert_mass(-0.01, MassUnit::Pounds).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_overflowing_conversion_is_rejected() {
    assert!(convert_mass(1e307, MassUnit::Pounds).unwrap().is_finite());
    let err = convert_mass(f64::MAX, MassUnit::Kilograms).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

// === One-rep max ===

#[test]
fn test_single_rep_short_circuit() {
    assert_eq!(estimate_one_rep_max(100.0, 1), Some(100.0));
}

#[test]
fn test_ten_reps() {
    assert_eq!(estimate_one_rep_max(100.0, 10), Some(133.0));
}

#[test]
fn test_incomplete_input_is_absent() {
    assert_eq!(estimate_one_rep_max(0.0, 3), None);
    assert_eq!(estimate_one_rep_max(-1.0, 3), None);
    assert_eq!(estimate_one_rep_max(80.0, 0), None);
}

#[test]
fn test_overflowing_estimate_is_absent() {
    assert_eq!(estimate_one_rep_max(f64::MAX, 10), None);
}

#[test]
fn test_percentage_table_rounds_half_away_from_zero() {
    assert_eq!(
        percentage_table(133.0, &[100, 50]),
        vec![
            PercentageRow {
                percent: 100,
                value: 133.0
            },
            PercentageRow {
                percent: 50,
                value: 67.0
            },
        ]
    );
}

// === Avatar tiers ===

#[test]
fn test_tier_boundaries() {
    assert_eq!(classify_tier(99.9).unwrap(), AvatarTier::Novice);
    assert_eq!(classify_tier(100.0).unwrap(), AvatarTier::Intermediate);
    assert_eq!(classify_tier(250.0).unwrap(), AvatarTier::Advanced);
    assert_eq!(classify_tier(400.0).unwrap(), AvatarTier::Elite);
}

#[test]
fn test_every_total_maps_to_exactly_one_tier() {
    for total in (0..600).map(f64::from) {
        let tier = classify_tier(total).unwrap();
        let matching: Vec<AvatarTier> = AvatarTier::ALL
            .into_iter()
            .filter(|candidate| {
                total >= candidate.min_total_kg()
                    && candidate
                        .next()
                        .map_or(true, |next| total < next.min_total_kg())
            })
            .collect();
        assert_eq!(matching, vec![tier], "total {total}");
    }
}

#[test]
fn test_tier_levels_are_ordered() {
    let levels: Vec<u8> = AvatarTier::ALL.iter().map(|t| t.level()).collect();
    assert_eq!(levels, vec![1, 2, 3, 4]);
    assert!(AvatarTier::Novice < AvatarTier::Elite);
}

// === WOD selection ===

#[test]
fn test_pick_is_uniform_over_reference_catalog() {
    let catalog = WodCatalog::reference();
    let mut rng = common::seeded_rng(2025);
    let trials = 10_000;
    let mut counts: HashMap<String, u32> = HashMap::new();
    for _ in 0..trials {
        let template = catalog.pick_random(&mut rng);
        *counts.entry(template.title()).or_default() += 1;
    }

    assert_eq!(counts.len(), catalog.len());
    let expected = f64::from(trials) / catalog.len() as f64;
    for (title, count) in &counts {
        let deviation = (f64::from(*count) - expected).abs() / expected;
        assert!(
            deviation < 0.1,
            "{title} picked {count} times, expected about {expected:.0}"
        );
    }
}

#[test]
fn test_injected_catalog_is_used() {
    let catalog = common::sample_catalog();
    let mut rng = common::seeded_rng(3);
    for _ in 0..50 {
        let template = catalog.pick_random(&mut rng);
        assert!(catalog.templates().contains(template));
    }
}

#[test]
fn test_free_function_pick() {
    let templates = vec![WodTemplate::new(WodKind::Emom, "6 min", &["4 Cleans"])];
    let mut rng = common::seeded_rng(11);
    assert_eq!(
        pick_random_template(&templates, &mut rng),
        Some(&templates[0])
    );
}
