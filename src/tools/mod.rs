// ABOUTME: Tools page composition: calculator tools, role gating, and dispatch
// ABOUTME: Registers the four calculators and exposes them through a single registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

//! # Tools Page
//!
//! Each calculator is wrapped in a [`traits::CalculatorTool`] that declares the
//! [`ToolAccess`](ironbox_core::permissions::ToolAccess) flag it needs. The
//! [`registry::ToolRegistry`] lists the tools a role may see and refuses to run
//! the others.

/// Built-in calculator tools
pub mod implementations;
/// Tool registry with role filtering
pub mod registry;
/// Tool trait and execution context
pub mod traits;

pub use registry::ToolRegistry;
pub use traits::{CalculatorTool, ToolContext, ToolDescriptor};
