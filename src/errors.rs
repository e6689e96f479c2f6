// ABOUTME: Unified error handling re-exported from ironbox-core
// ABOUTME: Keeps `ironbox::errors` paths stable for binaries and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

pub use ironbox_core::errors::*;
