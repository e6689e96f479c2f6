// ABOUTME: Core types and constants for the IronBox fitness tools workspace
// ABOUTME: Foundation crate with error handling, unit constants, data models and role permissions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

#![deny(unsafe_code)]

//! # IronBox Core
//!
//! Foundation crate providing the shared types and constants for the IronBox
//! fitness tools. It changes rarely so the calculator crate and the main crate
//! can compile against a stable base.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the JSON error response shape
//! - **constants**: conversion factors, percentage sets, rep limits, tier bands
//! - **models**: mass values, lift entries, workout templates, avatar tiers
//! - **permissions**: role to tool visibility mapping

/// Unified error handling with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Mass, LiftEntry, WodTemplate, AvatarTier)
pub mod models;

/// Role-based tool visibility with bitflags
pub mod permissions;
