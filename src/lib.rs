// ABOUTME: Main library entry point for the IronBox fitness tools
// ABOUTME: Composes the calculators into a role-gated tools page with config and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

#![deny(unsafe_code)]

//! # IronBox
//!
//! Fitness calculator tools for a gym member portal:
//!
//! - **Unit converter**: kilograms and pounds with a percentage breakdown
//! - **1RM calculator**: Epley estimate with a working-weight table
//! - **WOD generator**: random pick from a configurable workout catalog
//! - **Avatar progress**: tier classification of a four-lift total
//!
//! The formulas live in `ironbox-calculators`; this crate adds the tools page
//! (role gating and dispatch), configuration, logging, and the `ironbox-cli`
//! binary.
//!
//! ## Example Usage
//!
//! ```rust
//! use ironbox::permissions::UserRole;
//! use ironbox::tools::ToolRegistry;
//! use ironbox_calculators::WodCatalog;
//!
//! let registry = ToolRegistry::with_builtin_tools(WodCatalog::reference());
//! let page = registry.list_for_role(UserRole::Guest);
//! assert_eq!(page.len(), 2);
//! ```

/// Configuration management from environment variables
pub mod config;

/// Application constants re-exported from `ironbox-core`
pub mod constants;

/// Unified error handling re-exported from `ironbox-core`
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Role-based tool visibility re-exported from `ironbox-core`
pub mod permissions;

/// Tools page: calculator tools, registry, and dispatch
pub mod tools;
