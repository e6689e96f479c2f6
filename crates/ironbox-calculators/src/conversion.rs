// ABOUTME: Kilogram/pound conversion with a percentage breakdown in both units
// ABOUTME: Rejects negative, non-finite and non-numeric input instead of producing NaN
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

//! Unit converter
//!
//! Conversions use the fixed factor `1 kg = 2.20462 lb` and are rounded to two
//! decimal places, so `kg -> lb -> kg` lands within 0.01 of the input.
//!
//! The converter has two linked fields. Editing one recomputes the other; a
//! cleared field clears its partner. The breakdown table is always built in the
//! unit that was edited last, with the cross-unit value alongside.

use ironbox_core::constants::percentages::TRAINING_PERCENTAGES;
use ironbox_core::constants::units::{LB_PER_KG, MASS_DECIMALS, PERCENT_SCALE};
use ironbox_core::errors::{AppError, AppResult};
use ironbox_core::models::{Mass, MassUnit};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Round half away from zero to `decimals` places
///
/// Values too large to scale by `10^decimals` have no fractional part and are
/// returned unchanged.
#[must_use]
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

fn convert_unrounded(value: f64, from: MassUnit) -> f64 {
    match from {
        MassUnit::Kilograms => value * LB_PER_KG,
        MassUnit::Pounds => value / LB_PER_KG,
    }
}

/// Convert `value` from `from` into the other unit
///
/// # Errors
///
/// Returns `InvalidInput` if `value` is negative or not finite, or if the
/// converted mass does not fit in an `f64`.
pub fn convert_mass(value: f64, from: MassUnit) -> AppResult<f64> {
    let mass = Mass::new(value, from)?;
    let converted = round_to_decimals(convert_unrounded(mass.value(), from), MASS_DECIMALS);
    if !converted.is_finite() {
        warn!(value, unit = %from, "converted mass overflows");
        return Err(AppError::invalid_input(format!(
            "{value} {} is too large to convert to {}",
            from.symbol(),
            from.other().symbol()
        )));
    }
    Ok(converted)
}

/// Parse the raw text of a converter field
///
/// Blank input is `Ok(None)`: the paired field should be cleared.
///
/// # Errors
///
/// Returns `InvalidFormat` for text that is not a number and `InvalidInput`
/// for negative or non-finite numbers.
pub fn parse_mass_input(raw: &str) -> AppResult<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: f64 = trimmed.parse().map_err(|_| {
        warn!(input = %trimmed, "rejected non-numeric mass input");
        AppError::invalid_format(format!("'{trimmed}' is not a number"))
    })?;
    if !value.is_finite() || value < 0.0 {
        warn!(input = %trimmed, "rejected out-of-contract mass input");
        return Err(AppError::invalid_input(format!(
            "mass must be a non-negative finite number, got '{trimmed}'"
        )));
    }
    Ok(Some(value))
}

/// One row of the converter breakdown table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRow {
    /// Percentage of the entered mass
    pub percent: u8,
    /// Scaled mass in the edited unit
    pub value: f64,
    /// Same mass in the other unit
    pub converted: f64,
}

/// Result of editing one converter field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitConversion {
    /// Mass as entered
    pub source: Mass,
    /// Mass in the other unit
    pub converted: Mass,
    /// Percentage breakdown in the edited unit
    pub breakdown: Vec<ConversionRow>,
}

impl UnitConversion {
    /// Convert `mass` and build its breakdown over `percents`
    ///
    /// # Errors
    ///
    /// Only fails if the converted value cannot form a valid [`Mass`], which a
    /// valid source never produces.
    pub fn from_mass(mass: Mass, percents: &[u8]) -> AppResult<Self> {
        let converted = Mass::new(
            convert_mass(mass.value(), mass.unit())?,
            mass.unit().other(),
        )?;
        let breakdown = conversion_breakdown(mass, percents);
        debug!(
            source = %mass,
            converted = %converted,
            rows = breakdown.len(),
            "converted mass"
        );
        Ok(Self {
            source: mass,
            converted,
            breakdown,
        })
    }
}

/// Scale `mass` by each percentage and pair it with its cross-unit value
#[must_use]
pub fn conversion_breakdown(mass: Mass, percents: &[u8]) -> Vec<ConversionRow> {
    percents
        .iter()
        .map(|&percent| {
            let scaled = mass.value() * f64::from(percent) / PERCENT_SCALE;
            ConversionRow {
                percent,
                value: round_to_decimals(scaled, MASS_DECIMALS),
                converted: round_to_decimals(
                    convert_unrounded(scaled, mass.unit()),
                    MASS_DECIMALS,
                ),
            }
        })
        .collect()
}

/// Handle an edit of the converter field for `unit`
///
/// Uses the standard training percentage set for the breakdown.
///
/// # Errors
///
/// Propagates the parse errors of [`parse_mass_input`].
pub fn convert_field(raw: &str, unit: MassUnit) -> AppResult<Option<UnitConversion>> {
    parse_mass_input(raw)?
        .map(|value| {
            Mass::new(value, unit)
                .and_then(|mass| UnitConversion::from_mass(mass, &TRAINING_PERCENTAGES))
        })
        .transpose()
}
