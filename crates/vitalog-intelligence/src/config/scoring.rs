// ABOUTME: Scoring configuration for the metric analyzer, aggregator, and trend analyzer
// ABOUTME: Holds the assumed height for BMI, trend window size, and recommendation limit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring Configuration
//!
//! The threshold tables are fixed; only the parameters with no per-user
//! input behind them are configurable here.

use super::ConfigError;
use serde::{Deserialize, Serialize};
use vitalog_core::constants::{bmi, scoring, trends};

/// Scoring Configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Height (m) used for BMI since logs carry no height
    pub assumed_height_m: f64,
    /// Records per trend window
    pub trend_window_days: usize,
    /// Maximum recommendations attached to an overall score
    pub max_recommendations: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            assumed_height_m: bmi::DEFAULT_HEIGHT_M,
            trend_window_days: trends::WINDOW_SIZE,
            max_recommendations: scoring::MAX_RECOMMENDATIONS,
        }
    }
}

impl ScoringConfig {
    /// Check that every parameter is usable
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the height is not a positive finite number or
    /// either limit is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.assumed_height_m.is_finite() || self.assumed_height_m <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "assumed_height_m must be a positive number of meters",
            ));
        }
        if self.trend_window_days == 0 {
            return Err(ConfigError::InvalidRange(
                "trend_window_days must be at least 1",
            ));
        }
        if self.max_recommendations == 0 {
            return Err(ConfigError::InvalidRange(
                "max_recommendations must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ScoringConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.assumed_height_m - 1.75).abs() < f64::EPSILON);
        assert_eq!(config.trend_window_days, 7);
        assert_eq!(config.max_recommendations, 3);
    }

    #[test]
    fn test_rejects_bad_height() {
        for height in [0.0, -1.7, f64::NAN, f64::INFINITY] {
            let config = ScoringConfig {
                assumed_height_m: height,
                ..ScoringConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::ValueOutOfRange(_))
            ));
        }
    }

    #[test]
    fn test_rejects_zero_limits() {
        let config = ScoringConfig {
            trend_window_days: 0,
            ..ScoringConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

        let config = ScoringConfig {
            max_recommendations: 0,
            ..ScoringConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }
}
