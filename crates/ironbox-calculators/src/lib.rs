// ABOUTME: Fitness calculator engine: conversions, strength estimates, workout picks, tiers
// ABOUTME: Every operation is a pure function of its inputs plus an injected random source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

#![deny(unsafe_code)]

//! # IronBox Calculators
//!
//! Closed-form formulas behind the tools page:
//!
//! - **conversion**: kilogram/pound conversion with a percentage breakdown
//! - **`one_rep_max`**: Epley one-rep-max estimate
//! - **percentage**: whole-number percentage tables of a base load
//! - **`wod_selector`**: uniform pick from an injected workout catalog
//! - **`tier_classifier`**: avatar tier bands and progress toward the next band
//!
//! None of these keep state between calls.

/// Kilogram/pound conversion and breakdown tables
pub mod conversion;
/// Epley one-rep-max estimation
pub mod one_rep_max;
/// Percentage tables
pub mod percentage;
/// Avatar tier classification
pub mod tier_classifier;
/// Random workout selection
pub mod wod_selector;

pub use conversion::{convert_mass, parse_mass_input, ConversionRow, UnitConversion};
pub use one_rep_max::{estimate_one_rep_max, OneRepMaxEstimate};
pub use percentage::{percentage_table, PercentageRow};
pub use tier_classifier::{
    classify_lifts, classify_tier, tier_progress, TierClassification, TierProgress,
};
pub use wod_selector::{pick_random_template, WodCatalog};
