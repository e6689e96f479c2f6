// ABOUTME: Avatar tier bands for cumulative lift totals
// ABOUTME: Four ordered tiers with display names and cosmetic colour hints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::tiers::{ADVANCED_MIN_KG, ELITE_MIN_KG, INTERMEDIATE_MIN_KG};

/// Named band a cumulative lift total falls into
///
/// Variants are declared lowest first so the derived `Ord` follows tier rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvatarTier {
    /// Tier 1, total below 100 kg
    Novice,
    /// Tier 2, 100 kg up to 250 kg
    Intermediate,
    /// Tier 3, 250 kg up to 400 kg
    Advanced,
    /// Tier 4, 400 kg and above
    Elite,
}

impl AvatarTier {
    /// All tiers from lowest to highest
    pub const ALL: [Self; 4] = [Self::Novice, Self::Intermediate, Self::Advanced, Self::Elite];

    /// Tier rank, 1 through 4
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Novice => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
            Self::Elite => 4,
        }
    }

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Elite => "Elite",
        }
    }

    /// Presentation colour hint (hex). Not part of the classification rule.
    #[must_use]
    pub const fn color_hint(self) -> &'static str {
        match self {
            Self::Novice => "#9CA3AF",
            Self::Intermediate => "#3B82F6",
            Self::Advanced => "#8B5CF6",
            Self::Elite => "#F59E0B",
        }
    }

    /// Inclusive lower bound of this tier's band in kilograms
    #[must_use]
    pub const fn min_total_kg(self) -> f64 {
        match self {
            Self::Novice => 0.0,
            Self::Intermediate => INTERMEDIATE_MIN_KG,
            Self::Advanced => ADVANCED_MIN_KG,
            Self::Elite => ELITE_MIN_KG,
        }
    }

    /// The tier above this one, if any
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Novice => Some(Self::Intermediate),
            Self::Intermediate => Some(Self::Advanced),
            Self::Advanced => Some(Self::Elite),
            Self::Elite => None,
        }
    }
}

impl fmt::Display for AvatarTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
