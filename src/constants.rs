// ABOUTME: Application constants re-exported from ironbox-core
// ABOUTME: Conversion factors, percentage sets, rep limits, tier bands and tool identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

pub use ironbox_core::constants::*;
