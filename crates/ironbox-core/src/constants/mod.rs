// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for conversion factors, percentage sets, rep ranges and tier bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat file.

/// Unit conversion and measurement constants
pub mod units;

/// Percentage sets used by the breakdown tables
pub mod percentages {
    /// Fixed descending percentage set shared by the converter and 1RM tables
    pub const TRAINING_PERCENTAGES: [u8; 10] = [100, 95, 90, 85, 80, 75, 70, 65, 60, 50];
}

/// Rep-count limits for the one-rep-max estimator
pub mod reps {
    /// Smallest rep count accepted by the Epley formula
    pub const MIN_REPS: u32 = 1;
    /// Largest rep count offered by rep pickers
    pub const MAX_PRACTICAL_REPS: u32 = 10;
    /// Epley denominator: `1RM = w * (1 + reps / 30)`
    pub const EPLEY_DIVISOR: f64 = 30.0;
}

/// Lower bounds (inclusive, kilograms) of each avatar tier band
pub mod tiers {
    /// Total at which the Intermediate band starts
    pub const INTERMEDIATE_MIN_KG: f64 = 100.0;
    /// Total at which the Advanced band starts
    pub const ADVANCED_MIN_KG: f64 = 250.0;
    /// Total at which the Elite band starts
    pub const ELITE_MIN_KG: f64 = 400.0;
}

/// Tool identifiers used by the tools page
pub mod tools {
    /// Kilogram/pound converter
    pub const UNIT_CONVERTER: &str = "unit_converter";
    /// One-rep-max estimator
    pub const ONE_REP_MAX: &str = "one_rep_max";
    /// Random workout generator
    pub const WOD_GENERATOR: &str = "wod_generator";
    /// Avatar tier and progress display
    pub const AVATAR_PROGRESS: &str = "avatar_progress";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Path to a JSON WOD catalog
    pub const WOD_CATALOG_PATH: &str = "IRONBOX_WOD_CATALOG";
    /// Seed for reproducible WOD selection
    pub const WOD_SEED: &str = "IRONBOX_WOD_SEED";
    /// Role used when the caller does not supply one
    pub const DEFAULT_ROLE: &str = "IRONBOX_DEFAULT_ROLE";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name reported by the CLI at startup
    pub const IRONBOX_CLI: &str = "ironbox-cli";
}
