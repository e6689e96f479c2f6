// ABOUTME: Role-based tool visibility for the IronBox tools page
// ABOUTME: Maps each user role to a bitflags set of tools it is allowed to see and run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

//! # Role Permissions
//!
//! Visibility is a pure capability check: a role maps to a [`ToolAccess`]
//! flag set and the page layer filters its tool list against it. There is no
//! session, token, or lookup table behind it.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

bitflags! {
    /// Tools a role is allowed to see on the tools page
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ToolAccess: u8 {
        /// Kilogram/pound converter
        const UNIT_CONVERTER = 0b0001;
        /// One-rep-max estimator
        const ONE_REP_MAX = 0b0010;
        /// Random workout generator
        const WOD_GENERATOR = 0b0100;
        /// Avatar tier and progress display
        const AVATAR_PROGRESS = 0b1000;
        /// Calculators that need no athlete profile
        const CALCULATORS = Self::UNIT_CONVERTER.bits() | Self::ONE_REP_MAX.bits();
    }
}

impl ToolAccess {
    /// Names of the enabled flags, for logging
    #[must_use]
    pub fn describe(self) -> String {
        let parts: Vec<&str> = self
            .iter_names()
            .filter(|(name, _)| *name != "CALCULATORS")
            .map(|(name, _)| name)
            .collect();
        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(",").to_lowercase()
        }
    }
}

/// Role of the user viewing the tools page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Not signed in
    Guest,
    /// Regular member
    #[default]
    Athlete,
    /// Coach managing athletes
    Coach,
    /// Gym administrator
    Admin,
}

impl UserRole {
    /// Tools this role may see
    #[must_use]
    pub const fn tool_access(self) -> ToolAccess {
        match self {
            Self::Guest => ToolAccess::CALCULATORS,
            Self::Athlete | Self::Coach | Self::Admin => ToolAccess::all(),
        }
    }

    /// Whether this role can see every tool in `required`
    #[must_use]
    pub const fn can_access(self, required: ToolAccess) -> bool {
        self.tool_access().contains(required)
    }

    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Athlete => "athlete",
            Self::Coach => "coach",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "guest" => Ok(Self::Guest),
            "athlete" | "user" | "member" => Ok(Self::Athlete),
            "coach" => Ok(Self::Coach),
            "admin" => Ok(Self::Admin),
            other => Err(AppError::invalid_input(format!("unknown role '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_sees_only_calculators() {
        let access = UserRole::Guest.tool_access();
        assert!(access.contains(ToolAccess::UNIT_CONVERTER));
        assert!(access.contains(ToolAccess::ONE_REP_MAX));
        assert!(!access.contains(ToolAccess::WOD_GENERATOR));
        assert!(!UserRole::Guest.can_access(ToolAccess::AVATAR_PROGRESS));
    }

    #[test]
    fn test_members_see_everything() {
        for role in [UserRole::Athlete, UserRole::Coach, UserRole::Admin] {
            assert_eq!(role.tool_access(), ToolAccess::all());
        }
    }

    #[test]
    fn test_describe_skips_composite_flag() {
        assert_eq!(
            ToolAccess::CALCULATORS.describe(),
            "unit_converter,one_rep_max"
        );
        assert_eq!(ToolAccess::empty().describe(), "none");
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("Coach".parse::<UserRole>().ok(), Some(UserRole::Coach));
        assert_eq!("user".parse::<UserRole>().ok(), Some(UserRole::Athlete));
        assert!("owner".parse::<UserRole>().is_err());
    }
}
