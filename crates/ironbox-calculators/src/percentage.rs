// ABOUTME: Whole-number percentage tables of a base load
// ABOUTME: Used to show working weights at fixed fractions of an estimated one-rep max
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

use ironbox_core::constants::units::PERCENT_SCALE;
use serde::{Deserialize, Serialize};

/// One row of a percentage table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageRow {
    /// Percentage of the base
    pub percent: u8,
    /// `round(base * percent / 100)`
    pub value: f64,
}

/// Build `{percent, round(base * percent / 100)}` rows in the order given
///
/// Rounding is half away from zero, so `133 @ 50%` is 67.
#[must_use]
pub fn percentage_table(base: f64, percents: &[u8]) -> Vec<PercentageRow> {
    percents
        .iter()
        .map(|&percent| PercentageRow {
            percent,
            value: scale(base, percent).round(),
        })
        .collect()
}

fn scale(base: f64, percent: u8) -> f64 {
    let scaled = base * f64::from(percent) / PERCENT_SCALE;
    if scaled.is_finite() {
        scaled
    } else {
        base * (f64::from(percent) / PERCENT_SCALE)
    }
}
