// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Exercises env var parsing, custom catalog files, and seeded workout picks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;
use std::io::Write;

use ironbox::config::{Environment, ToolsConfig};
use ironbox::errors::ErrorCode;
use ironbox::permissions::UserRole;
use serial_test::serial;
use tempfile::NamedTempFile;

const VARS: [&str; 4] = [
    "IRONBOX_WOD_CATALOG",
    "IRONBOX_WOD_SEED",
    "IRONBOX_DEFAULT_ROLE",
    "ENVIRONMENT",
];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_vars();
    let config = ToolsConfig::from_env().unwrap();
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.default_role, UserRole::Athlete);
    assert!(config.wod_seed.is_none());
    assert_eq!(config.load_catalog().unwrap().len(), 6);
}

#[test]
#[serial]
fn test_from_env_reads_catalog_file() {
    clear_vars();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(common::SAMPLE_CATALOG_JSON.as_bytes())
        .unwrap();
    env::set_var("IRONBOX_WOD_CATALOG", file.path());
    env::set_var("IRONBOX_DEFAULT_ROLE", "coach");

    let config = ToolsConfig::from_env().unwrap();
    assert_eq!(config.default_role, UserRole::Coach);
    let catalog = config.load_catalog().unwrap();
    assert_eq!(catalog, common::sample_catalog());
    clear_vars();
}

#[test]
#[serial]
fn test_invalid_catalog_file() {
    clear_vars();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[]").unwrap();
    env::set_var("IRONBOX_WOD_CATALOG", file.path());

    let err = ToolsConfig::from_env().unwrap().load_catalog().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    clear_vars();
}

#[test]
#[serial]
fn test_seeded_rng_is_reproducible() {
    clear_vars();
    env::set_var("IRONBOX_WOD_SEED", "1234");
    let config = ToolsConfig::from_env().unwrap();
    let catalog = config.load_catalog().unwrap();

    let first: Vec<String> = {
        let mut rng = config.rng();
        (0..5)
            .map(|_| catalog.pick_random(&mut *rng).title())
            .collect()
    };
    let second: Vec<String> = {
        let mut rng = config.rng();
        (0..5)
            .map(|_| catalog.pick_random(&mut *rng).title())
            .collect()
    };
    assert_eq!(first, second);
    clear_vars();
}

#[test]
#[serial]
fn test_bad_seed_is_config_error() {
    clear_vars();
    env::set_var("IRONBOX_WOD_SEED", "-1");
    let err = ToolsConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    clear_vars();
}
