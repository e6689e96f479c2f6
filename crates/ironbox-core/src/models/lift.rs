// ABOUTME: Lift input types for the one-rep-max estimator and avatar progress
// ABOUTME: LiftEntry is a single weight x reps set; LiftTotals sums the four tracked lifts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

use serde::{Deserialize, Serialize};

use crate::constants::reps::MIN_REPS;
use crate::errors::{AppError, AppResult};

/// A single set: weight moved for a number of reps
///
/// Only valid entries can be built; incomplete input is represented by the
/// absence of an entry rather than by a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftEntry {
    weight: f64,
    reps: u32,
}

impl LiftEntry {
    /// Build an entry from raw form input
    ///
    /// Returns `None` when either value is missing, non-finite, zero, or
    /// negative.
    #[must_use]
    pub fn from_input(weight: Option<f64>, reps: Option<u32>) -> Option<Self> {
        let weight = weight.filter(|w| w.is_finite() && *w > 0.0)?;
        let reps = reps.filter(|r| *r >= MIN_REPS)?;
        Some(Self { weight, reps })
    }

    /// Weight lifted
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Reps performed
    #[must_use]
    pub const fn reps(&self) -> u32 {
        self.reps
    }
}

/// Best lifts in the four tracked categories, in kilograms
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftTotals {
    /// Back squat
    pub back_squat: f64,
    /// Bench press
    pub bench_press: f64,
    /// Deadlift
    pub deadlift: f64,
    /// Overhead press
    pub overhead_press: f64,
}

impl LiftTotals {
    /// Cumulative total across all four lifts
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any lift is negative or not a finite number,
    /// or if the sum overflows.
    pub fn total(&self) -> AppResult<f64> {
        let lifts = [
            ("back_squat", self.back_squat),
            ("bench_press", self.bench_press),
            ("deadlift", self.deadlift),
            ("overhead_press", self.overhead_press),
        ];
        let total = lifts.iter().try_fold(0.0, |sum, (name, value)| {
            if !value.is_finite() || *value < 0.0 {
                return Err(AppError::invalid_input(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
            Ok(sum + value)
        })?;
        if !total.is_finite() {
            return Err(AppError::invalid_input("lift total is too large"));
        }
        Ok(total)
    }
}
