// ABOUTME: Helper modules for ironbox-cli
// ABOUTME: Output formatting shared by the command handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

pub mod display;
