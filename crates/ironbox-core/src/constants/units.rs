// ABOUTME: Unit conversion constants for body mass and load measurements
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.20462;

/// Decimal places kept by mass conversions
pub const MASS_DECIMALS: i32 = 2;

/// Percent scale divisor
pub const PERCENT_SCALE: f64 = 100.0;
