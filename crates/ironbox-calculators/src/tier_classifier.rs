// ABOUTME: Avatar tier classification for cumulative lift totals
// ABOUTME: Maps a total in kilograms onto four closed bands and reports progress to the next band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

//! Avatar tier classifier
//!
//! | total (kg)      | tier             |
//! |-----------------|------------------|
//! | `>= 400`        | 4 Elite          |
//! | `250 ..< 400`   | 3 Advanced       |
//! | `100 ..< 250`   | 2 Intermediate   |
//! | `< 100`         | 1 Novice         |
//!
//! Bands are checked from the top down and each lower bound is inclusive.
//! Negative or non-finite totals are rejected.

use ironbox_core::constants::tiers::{ADVANCED_MIN_KG, ELITE_MIN_KG, INTERMEDIATE_MIN_KG};
use ironbox_core::errors::{AppError, AppResult};
use ironbox_core::models::{AvatarTier, LiftTotals};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Classify a cumulative lift total in kilograms
///
/// # Errors
///
/// Returns `InvalidInput` if `total_kg` is negative or not finite.
pub fn classify_tier(total_kg: f64) -> AppResult<AvatarTier> {
    if !total_kg.is_finite() || total_kg < 0.0 {
        return Err(AppError::invalid_input(format!(
            "lift total must be a non-negative number, got {total_kg}"
        )));
    }
    let tier = if total_kg >= ELITE_MIN_KG {
        AvatarTier::Elite
    } else if total_kg >= ADVANCED_MIN_KG {
        AvatarTier::Advanced
    } else if total_kg >= INTERMEDIATE_MIN_KG {
        AvatarTier::Intermediate
    } else {
        AvatarTier::Novice
    };
    debug!(total_kg, tier = %tier, "classified lift total");
    Ok(tier)
}

/// Serializable `{tier, name}` view of a classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierClassification {
    /// Tier rank, 1 through 4
    pub tier: u8,
    /// Tier display name
    pub name: String,
    /// Presentation colour hint
    pub color: String,
}

impl From<AvatarTier> for TierClassification {
    fn from(tier: AvatarTier) -> Self {
        Self {
            tier: tier.level(),
            name: tier.name().to_owned(),
            color: tier.color_hint().to_owned(),
        }
    }
}

/// Where a total sits within its band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierProgress {
    /// Total the progress was computed for
    pub total_kg: f64,
    /// Current tier
    pub tier: AvatarTier,
    /// Next tier up, `None` at Elite
    pub next_tier: Option<AvatarTier>,
    /// Kilograms still needed to reach `next_tier`
    pub remaining_kg: Option<f64>,
    /// Share of the current band already covered, 0 to 100
    pub band_percent: f64,
}

/// Classify `total_kg` and measure the distance to the next tier
///
/// # Errors
///
/// Same conditions as [`classify_tier`].
pub fn tier_progress(total_kg: f64) -> AppResult<TierProgress> {
    let tier = classify_tier(total_kg)?;
    let next_tier = tier.next();
    let (remaining_kg, band_percent) = next_tier.map_or((None, 100.0), |next| {
        let floor = tier.min_total_kg();
        let ceiling = next.min_total_kg();
        let covered = ((total_kg - floor) / (ceiling - floor) * 100.0).clamp(0.0, 100.0);
        (Some(ceiling - total_kg), covered)
    });
    Ok(TierProgress {
        total_kg,
        tier,
        next_tier,
        remaining_kg,
        band_percent,
    })
}

/// Sum the four tracked lifts and report tier progress for the total
///
/// # Errors
///
/// Returns `InvalidInput` if any lift is negative or not finite.
pub fn classify_lifts(lifts: &LiftTotals) -> AppResult<TierProgress> {
    tier_progress(lifts.total()?)
}
