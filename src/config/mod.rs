// ABOUTME: Configuration module for the IronBox tools
// ABOUTME: Environment-driven settings for catalogs, random seeding and default roles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

//! Configuration is read from environment variables only; there is no config
//! file format beyond the optional JSON workout catalog.

/// Environment-based configuration
pub mod environment;

pub use environment::{Environment, ToolsConfig};
