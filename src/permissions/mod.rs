// ABOUTME: Role-based tool visibility re-exported from ironbox-core
// ABOUTME: Provides the role to ToolAccess capability check consumed by the tools page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

pub use ironbox_core::permissions::*;
