// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses catalog path, RNG seed, default role and environment from variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 IronBox Fitness Tools

//! Environment-based configuration

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use ironbox_calculators::WodCatalog;
use ironbox_core::constants::env_config;
use ironbox_core::errors::{AppError, AppResult, ErrorCode};
use ironbox_core::permissions::UserRole;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        })
    }
}

/// Runtime settings for the tools page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ToolsConfig {
    /// Deployment environment
    pub environment: Environment,
    /// JSON file with a custom workout catalog; the built-in one is used when unset
    pub wod_catalog_path: Option<PathBuf>,
    /// Seed for reproducible workout picks
    pub wod_seed: Option<u64>,
    /// Role assumed when the caller does not give one
    pub default_role: UserRole,
}

impl ToolsConfig {
    /// Load configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is set to an unparseable value.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is set to an unparseable value.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let environment = read(env_config::ENVIRONMENT)
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let wod_catalog_path = read(env_config::WOD_CATALOG_PATH).map(PathBuf::from);

        let wod_seed = read(env_config::WOD_SEED)
            .map(|value| {
                value.trim().parse::<u64>().map_err(|e| {
                    invalid_config(format!("{}='{value}' is not a u64: {e}", env_config::WOD_SEED))
                })
            })
            .transpose()?;

        let default_role = read(env_config::DEFAULT_ROLE)
            .map(|value| {
                value.parse::<UserRole>().map_err(|e| {
                    invalid_config(format!("{}: {}", env_config::DEFAULT_ROLE, e.message))
                })
            })
            .transpose()?
            .unwrap_or_default();

        let config = Self {
            environment,
            wod_catalog_path,
            wod_seed,
            default_role,
        };
        debug!(?config, "loaded tools configuration");
        Ok(config)
    }

    /// Load the workout catalog this configuration points at
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the catalog file cannot be read, and the
    /// catalog's own parse or validation errors otherwise.
    pub fn load_catalog(&self) -> AppResult<WodCatalog> {
        self.wod_catalog_path
            .as_deref()
            .map_or_else(|| Ok(WodCatalog::reference()), load_catalog_file)
    }

    /// Random source for workout picks
    ///
    /// Seeded configurations always produce the same sequence.
    #[must_use]
    pub fn rng(&self) -> Box<dyn RngCore + Send> {
        match self.wod_seed {
            Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
            None => Box::new(StdRng::from_entropy()),
        }
    }
}

fn invalid_config(message: String) -> AppError {
    AppError::new(ErrorCode::ConfigInvalid, message)
}

fn load_catalog_file(path: &Path) -> AppResult<WodCatalog> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::config(format!(
            "failed to read workout catalog {}: {e}",
            path.display()
        ))
    })?;
    let catalog = WodCatalog::from_json(&contents)?;
    info!(
        path = %path.display(),
        templates = catalog.len(),
        "loaded workout catalog"
    );
    Ok(catalog)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ToolsConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ToolsConfig::default());
        assert_eq!(config.default_role, UserRole::Athlete);
        assert_eq!(config.load_catalog().unwrap().len(), 6);
    }

    #[test]
    fn test_parses_values() {
        let config = ToolsConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "prod"),
            ("IRONBOX_WOD_SEED", "99"),
            ("IRONBOX_DEFAULT_ROLE", "guest"),
        ]))
        .unwrap();
        assert!(config.environment.is_production());
        assert_eq!(config.wod_seed, Some(99));
        assert_eq!(config.default_role, UserRole::Guest);
    }

    #[test]
    fn test_blank_values_ignored() {
        let config =
            ToolsConfig::from_lookup(lookup_from(&[("IRONBOX_WOD_SEED", "  ")])).unwrap();
        assert_eq!(config.wod_seed, None);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = ToolsConfig::from_lookup(lookup_from(&[("IRONBOX_WOD_SEED", "soon")]))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);

        let err = ToolsConfig::from_lookup(lookup_from(&[("IRONBOX_DEFAULT_ROLE", "owner")]))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = ToolsConfig {
            wod_catalog_path: Some(PathBuf::from("/nonexistent/ironbox/wods.json")),
            ..ToolsConfig::default()
        };
        assert_eq!(config.load_catalog().unwrap_err().code, ErrorCode::ConfigError);
    }
}
