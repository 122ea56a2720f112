// ABOUTME: Environment-based application configuration for storage, cache and scoring
// ABOUTME: Reads VITALOG_* variables with defaults and reports parse failures as config errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::cache::CacheConfig;
use crate::errors::{config_error, AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;
use vitalog_core::constants::{bmi, cache, storage};
use vitalog_intelligence::ScoringConfig;

/// Where health logs are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// `health_data.json` in the data directory
    File,
    /// Process memory only; nothing survives exit
    Memory,
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.to_lowercase().as_str() {
            "file" | "json" => Ok(Self::File),
            "memory" | "mem" => Ok(Self::Memory),
            other => Err(AppError::config(format!(
                "Unknown storage backend '{other}', expected 'file' or 'memory'"
            ))),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding `health_data.json`
    pub data_dir: PathBuf,
    /// Storage backend
    pub storage: StorageBackend,
    /// Query cache settings
    pub cache: CacheConfig,
    /// Scoring parameters
    pub scoring: ScoringConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage: StorageBackend::File,
            cache: CacheConfig::default(),
            scoring: ScoringConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `VITALOG_DATA_DIR` | platform data dir + `/vitalog` |
    /// | `VITALOG_STORAGE` | `file` |
    /// | `VITALOG_CACHE_STALE_SECS` | 300 |
    /// | `VITALOG_CACHE_MAX_ENTRIES` | 256 |
    /// | `VITALOG_ASSUMED_HEIGHT_M` | 1.75 |
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is set but cannot be parsed, or
    /// the resulting scoring configuration is out of range
    pub fn from_env() -> AppResult<Self> {
        let data_dir = env::var("VITALOG_DATA_DIR").map_or_else(|_| default_data_dir(), PathBuf::from);
        let storage = env_parse("VITALOG_STORAGE", StorageBackend::File)?;
        let stale_secs = env_parse("VITALOG_CACHE_STALE_SECS", cache::DEFAULT_STALE_TIME_SECS)?;
        let max_entries =
            env_parse("VITALOG_CACHE_MAX_ENTRIES", cache::DEFAULT_CACHE_MAX_ENTRIES)?;
        let assumed_height_m = env_parse("VITALOG_ASSUMED_HEIGHT_M", bmi::DEFAULT_HEIGHT_M)?;

        let scoring = ScoringConfig {
            assumed_height_m,
            ..ScoringConfig::default()
        };
        scoring.validate().map_err(config_error)?;

        let config = Self {
            data_dir,
            storage,
            cache: CacheConfig {
                max_entries,
                stale_time: Duration::from_secs(stale_secs),
            },
            scoring,
        };
        debug!(?config, "Loaded configuration from environment");
        Ok(config)
    }
}

/// Platform local data directory joined with the application directory,
/// falling back to `./vitalog` when the platform has none
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(storage::APP_DIR_NAME)
}

/// Parse `key` if set, else use `default`
fn env_parse<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {key} value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}
