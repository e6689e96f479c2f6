// ABOUTME: Mass value and unit types for kilogram/pound conversions
// ABOUTME: Validates that a mass is finite and non-negative before any formula sees it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Unit a mass value is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassUnit {
    /// Kilograms
    #[serde(alias = "kg")]
    Kilograms,
    /// Pounds
    #[serde(alias = "lb")]
    Pounds,
}

impl MassUnit {
    /// The unit on the other side of the converter
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Kilograms => Self::Pounds,
            Self::Pounds => Self::Kilograms,
        }
    }

    /// Short label used in tables
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Kilograms => "kg",
            Self::Pounds => "lb",
        }
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for MassUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(Self::Kilograms),
            "lb" | "lbs" | "pound" | "pounds" => Ok(Self::Pounds),
            other => Err(AppError::invalid_input(format!(
                "unknown mass unit '{other}' (expected kg or lb)"
            ))),
        }
    }
}

/// A non-negative, finite mass tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mass {
    value: f64,
    unit: MassUnit,
}

impl Mass {
    /// Build a mass value
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `value` is negative, NaN, or infinite.
    pub fn new(value: f64, unit: MassUnit) -> AppResult<Self> {
        if !value.is_finite() {
            return Err(AppError::invalid_input(format!(
                "mass must be a finite number, got {value}"
            )));
        }
        if value < 0.0 {
            return Err(AppError::invalid_input(format!(
                "mass must not be negative, got {value} {unit}"
            )));
        }
        Ok(Self { value, unit })
    }

    /// Numeric value in [`Self::unit`]
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Unit of the value
    #[must_use]
    pub const fn unit(&self) -> MassUnit {
        self.unit
    }
}

impl fmt::Display for Mass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative_and_nan() {
        assert!(Mass::new(-1.0, MassUnit::Kilograms).is_err());
        assert!(Mass::new(f64::NAN, MassUnit::Pounds).is_err());
        assert!(Mass::new(f64::INFINITY, MassUnit::Pounds).is_err());
        assert!(Mass::new(0.0, MassUnit::Pounds).is_ok());
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("KG".parse::<MassUnit>().ok(), Some(MassUnit::Kilograms));
        assert_eq!(" lbs ".parse::<MassUnit>().ok(), Some(MassUnit::Pounds));
        assert!("stone".parse::<MassUnit>().is_err());
        assert_eq!(MassUnit::Pounds.other(), MassUnit::Kilograms);
    }
}
