// ABOUTME: Core data models for IronBox fitness tools
// ABOUTME: Mass values and units, lift entries, workout templates, and avatar tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

//! # Data Models
//!
//! Plain value types consumed by the calculators. None of them are persisted;
//! they exist for the duration of a single computation.

/// Lift entries and cumulative lift totals
pub mod lift;
/// Mass values tagged with a unit
pub mod mass;
/// Avatar tier bands
pub mod tier;
/// Workout-of-the-day templates
pub mod wod;

pub use lift::{LiftEntry, LiftTotals};
pub use mass::{Mass, MassUnit};
pub use tier::AvatarTier;
pub use wod::{WodKind, WodTemplate};
