// ABOUTME: Tracing subscriber setup for the library and the vitalog-cli binary
// ABOUTME: One stderr fmt layer in json, full or compact shape behind an EnvFilter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Log lines go to stderr so command output on stdout stays machine-readable.
//!
//! | Variable | Effect |
//! |---|---|
//! | `RUST_LOG` | Filter directives, overrides `level` |
//! | `LOG_FORMAT` | `json`, `compact`, anything else is `pretty` |
//! | `ENVIRONMENT` | `production` turns on source locations |
//! | `SERVICE_NAME` | Name attached to the startup event |
//! | `LOG_INCLUDE_LOCATION` | Any value turns on source locations |

use anyhow::{anyhow, Result};
use std::env;
use std::io;
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::{
    filter::Directive, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
    Registry,
};
use vitalog_core::constants::service_names;

const PRODUCTION: &str = "production";

/// Shape of each log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line
    Json,
    /// Full human readable output with target
    #[default]
    Pretty,
    /// Single-line output without target
    Compact,
}

impl FromStr for LogFormat {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        })
    }
}

/// Where and how log events are written
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default filter level when `RUST_LOG` is unset
    pub level: String,
    /// Line shape
    pub format: LogFormat,
    /// Attach source file and line to each event, in every format
    pub include_location: bool,
    /// Name attached to the startup event
    pub service_name: String,
    /// Deployment label, `production` implies locations
    pub environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::default(),
            include_location: false,
            service_name: service_names::VITALOG.into(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Read the variables listed in the module docs
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);

        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.format),
            include_location: environment == PRODUCTION
                || env::var_os("LOG_INCLUDE_LOCATION").is_some(),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            environment,
        }
    }

    /// Compact lines at `warn`, or `debug` when `verbose`; locations follow
    /// the environment
    #[must_use]
    pub fn for_cli(verbose: bool) -> Self {
        Self {
            level: if verbose { "debug" } else { "warn" }.into(),
            format: LogFormat::Compact,
            ..Self::from_env()
        }
    }

    /// `RUST_LOG` directives when set, else `level`, plus a `vitalog=<level>`
    /// directive
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let base = env::var("RUST_LOG").map_or_else(|_| EnvFilter::new(&self.level), EnvFilter::new);
        format!("vitalog={}", self.level)
            .parse::<Directive>()
            .into_iter()
            .fold(base, EnvFilter::add_directive)
    }

    fn fmt_layer(&self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let layer = fmt::layer()
            .with_writer(io::stderr)
            .with_file(self.include_location)
            .with_line_number(self.include_location);

        match self.format {
            LogFormat::Json => layer.json().boxed(),
            LogFormat::Pretty => layer.with_target(true).boxed(),
            LogFormat::Compact => layer.compact().with_target(false).boxed(),
        }
    }

    /// Install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        tracing_subscriber::registry()
            .with(self.fmt_layer())
            .with(self.env_filter())
            .try_init()
            .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

        info!(
            service = %self.service_name,
            version = env!("CARGO_PKG_VERSION"),
            environment = %self.environment,
            level = %self.level,
            format = ?self.format,
            location = self.include_location,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Install the subscriber described by [`LoggingConfig::from_env`]
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
