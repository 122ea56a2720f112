// ABOUTME: Unified error handling for the Vitalog application crate
// ABOUTME: Re-exports the core error taxonomy and adds conversions for root-crate error sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in this crate returns [`AppResult`]. The error
//! taxonomy itself lives in `vitalog-core` so the intelligence crate and the
//! application share one set of codes.

pub use vitalog_core::errors::{AppError, AppResult, ErrorCode};

use vitalog_intelligence::ConfigError;

/// Map a scoring configuration error onto `ConfigInvalid`
#[must_use]
pub fn config_error(error: ConfigError) -> AppError {
    AppError::config(error.to_string()).with_source(error)
}

/// Map a glob compilation failure onto `InvalidInput`
#[must_use]
pub fn pattern_error(pattern: &str, error: glob::PatternError) -> AppError {
    AppError::invalid_input(format!("Invalid glob pattern '{pattern}': {error}")).with_source(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_code() {
        let error = config_error(ConfigError::InvalidRange("trend_window_days must be at least 1"));
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
        assert!(error.message.contains("trend_window_days"));
    }

    #[test]
    fn test_pattern_error_code() {
        let Err(raw) = glob::Pattern::new("[") else {
            unreachable!("unterminated class must not compile");
        };
        let error = pattern_error("[", raw);
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }
}
