// ABOUTME: Shared helpers for IronBox integration tests
// ABOUTME: Seeded random sources and sample workout catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

#![allow(dead_code, clippy::unwrap_used)]

use ironbox_calculators::WodCatalog;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic random source for reproducible picks
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Two-template catalog in the JSON shape accepted by `IRONBOX_WOD_CATALOG`
pub const SAMPLE_CATALOG_JSON: &str = r#"[
    {"type": "AMRAP", "duration": "12 min", "movements": ["10 Burpees", "15 Sit-ups"]},
    {"type": "For Time", "duration": "3 rounds", "movements": ["500 m Row", "21 Kettlebell Swings"]}
]"#;

/// Parsed [`SAMPLE_CATALOG_JSON`]
pub fn sample_catalog() -> WodCatalog {
    WodCatalog::from_json(SAMPLE_CATALOG_JSON).unwrap()
}
