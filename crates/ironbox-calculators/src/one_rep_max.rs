// ABOUTME: One-rep-max estimation using the Epley formula
// ABOUTME: Produces no result for incomplete input rather than an error value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

//! One-rep-max estimator
//!
//! Formula: `1RM = round(weight x (1 + reps / 30))`
//!
//! A single rep is already a one-rep max and is returned unchanged. Rounding
//! is half away from zero.
//!
//! # Scientific References
//!
//! - Epley, B. (1985). "Poundage Chart". *Boyd Epley Workout*. Lincoln, NE.

use ironbox_core::constants::reps::{EPLEY_DIVISOR, MAX_PRACTICAL_REPS};
use ironbox_core::models::LiftEntry;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::percentage::{percentage_table, PercentageRow};

/// Estimate a one-rep max from `weight` lifted for `reps`
///
/// Returns `None` when `weight` is not a positive finite number, `reps` is
/// zero, or the estimate overflows.
#[must_use]
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> Option<f64> {
    LiftEntry::from_input(Some(weight), Some(reps)).and_then(|entry| estimate_for_entry(&entry))
}

/// Estimate a one-rep max for a validated entry
///
/// `None` if the estimate is not finite.
#[must_use]
pub fn estimate_for_entry(entry: &LiftEntry) -> Option<f64> {
    if entry.reps() == 1 {
        return Some(entry.weight());
    }
    let estimate = (entry.weight() * (1.0 + f64::from(entry.reps()) / EPLEY_DIVISOR)).round();
    if !estimate.is_finite() {
        warn!(weight = entry.weight(), reps = entry.reps(), "one-rep max overflows");
        return None;
    }
    Some(estimate)
}

/// Parse raw weight and rep fields into an entry
///
/// Non-numeric or blank text is treated as missing.
#[must_use]
pub fn parse_lift_input(weight: &str, reps: &str) -> Option<LiftEntry> {
    LiftEntry::from_input(weight.trim().parse().ok(), reps.trim().parse().ok())
}

/// An estimate together with its working-weight table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneRepMaxEstimate {
    /// Set the estimate was derived from
    pub entry: LiftEntry,
    /// Estimated one-rep max
    pub one_rep_max: f64,
    /// Working weights at fixed percentages of the estimate
    pub table: Vec<PercentageRow>,
}

impl OneRepMaxEstimate {
    /// Estimate and tabulate `entry` over `percents`
    ///
    /// `None` if the estimate overflows.
    #[must_use]
    pub fn new(entry: LiftEntry, percents: &[u8]) -> Option<Self> {
        if entry.reps() > MAX_PRACTICAL_REPS {
            warn!(
                reps = entry.reps(),
                "Epley estimates drift above {MAX_PRACTICAL_REPS} reps"
            );
        }
        let one_rep_max = estimate_for_entry(&entry)?;
        debug!(
            weight = entry.weight(),
            reps = entry.reps(),
            one_rep_max,
            "estimated one-rep max"
        );
        Some(Self {
            entry,
            one_rep_max,
            table: percentage_table(one_rep_max, percents),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use ironbox_core::constants::percentages::TRAINING_PERCENTAGES;

    #[test]
    fn test_single_rep_is_unchanged() {
        assert_eq!(estimate_one_rep_max(100.0, 1), Some(100.0));
        assert_eq!(estimate_one_rep_max(102.5, 1), Some(102.5));
    }

    #[test]
    fn test_epley() {
        assert_eq!(estimate_one_rep_max(100.0, 10), Some(133.0));
        assert_eq!(estimate_one_rep_max(100.0, 5), Some(117.0));
        assert_eq!(estimate_one_rep_max(60.0, 2), Some(64.0));
    }

    #[test]
    fn test_absent_for_bad_input() {
        assert_eq!(estimate_one_rep_max(0.0, 5), None);
        assert_eq!(estimate_one_rep_max(-50.0, 5), None);
        assert_eq!(estimate_one_rep_max(100.0, 0), None);
        assert_eq!(estimate_one_rep_max(f64::NAN, 3), None);
    }

    #[test]
    fn test_overflowing_estimate_is_absent() {
        assert_eq!(estimate_one_rep_max(f64::MAX, 10), None);
        assert_eq!(estimate_one_rep_max(f64::MAX, 1), Some(f64::MAX));

        let entry = LiftEntry::from_input(Some(f64::MAX), Some(5)).unwrap();
        assert!(OneRepMaxEstimate::new(entry, &TRAINING_PERCENTAGES).is_none());
    }

    #[test]
    fn test_parse_lift_input() {
        assert!(parse_lift_input("", "5").is_none());
        assert!(parse_lift_input("abc", "5").is_none());
        assert!(parse_lift_input("100", "-1").is_none());
        let entry = parse_lift_input(" 100 ", "10").unwrap();
        assert_eq!(estimate_for_entry(&entry), Some(133.0));
    }

    #[test]
    fn test_estimate_with_table() {
        let entry = LiftEntry::from_input(Some(100.0), Some(10)).unwrap();
        let estimate = OneRepMaxEstimate::new(entry, &TRAINING_PERCENTAGES).unwrap();
        assert_eq!(estimate.one_rep_max, 133.0);
        assert_eq!(estimate.table.len(), 10);
        assert_eq!(estimate.table[0].value, 133.0);
        assert_eq!(estimate.table[9].value, 67.0);
        assert_eq!(estimate.table[1].value, 126.0);
    }
}
