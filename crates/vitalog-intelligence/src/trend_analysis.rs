// ABOUTME: Week-over-week trend analysis comparing the latest window of logs with the one before
// ABOUTME: Reports percent change and direction for steps, water, sleep and heart rate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Trend Analysis
//!
//! Windows are taken by position from the end of the slice, not by
//! calendar date: the recent window is the last `window` records and the
//! previous window is up to `window` records before it. Callers pass logs
//! in ascending date order.

use crate::config::ScoringConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::FpCategory;
use tracing::debug;
use vitalog_core::constants::trends;
use vitalog_core::models::HealthLog;

/// Metrics that carry a trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrendMetric {
    /// Daily step count
    Steps,
    /// Water intake
    Water,
    /// Sleep duration
    Sleep,
    /// Resting heart rate
    HeartRate,
}

impl TrendMetric {
    /// All trend metrics in reporting order
    pub const ALL: [Self; 4] = [Self::Steps, Self::Water, Self::Sleep, Self::HeartRate];

    /// Wire name of the metric
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::Water => "water",
            Self::Sleep => "sleep",
            Self::HeartRate => "heartRate",
        }
    }

    fn value_of(self, log: &HealthLog) -> f64 {
        match self {
            Self::Steps => f64::from(log.steps),
            Self::Water => log.water_intake,
            Self::Sleep => log.sleep_duration,
            Self::HeartRate => f64::from(log.heart_rate),
        }
    }
}

impl fmt::Display for TrendMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of change between windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Recent mean strictly greater than previous mean
    Up,
    /// Anything else, including no change
    Down,
}

/// Change in one metric between the two windows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTrend {
    /// Percent change; `None` when the previous mean is zero
    pub change: Option<f64>,
    /// Direction of change
    pub trend: TrendDirection,
    /// Mean over the recent window
    pub recent_average: f64,
    /// Mean over the previous window
    pub previous_average: f64,
}

impl MetricTrend {
    fn between(recent: f64, previous: f64) -> Self {
        let change = match previous.classify() {
            FpCategory::Zero | FpCategory::Nan | FpCategory::Infinite => None,
            FpCategory::Normal | FpCategory::Subnormal => {
                Some((recent - previous) / previous * 100.0).filter(|value| value.is_finite())
            }
        };
        let trend = if recent > previous {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        };
        Self {
            change,
            trend,
            recent_average: recent,
            previous_average: previous,
        }
    }
}

/// Trends for every [`TrendMetric`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendAnalysis {
    /// Steps trend
    pub steps: MetricTrend,
    /// Water trend
    pub water: MetricTrend,
    /// Sleep trend
    pub sleep: MetricTrend,
    /// Heart rate trend
    pub heart_rate: MetricTrend,
}

impl TrendAnalysis {
    /// Trend for one metric
    #[must_use]
    pub const fn get(&self, metric: TrendMetric) -> &MetricTrend {
        match metric {
            TrendMetric::Steps => &self.steps,
            TrendMetric::Water => &self.water,
            TrendMetric::Sleep => &self.sleep,
            TrendMetric::HeartRate => &self.heart_rate,
        }
    }

    /// Every trend in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (TrendMetric, &MetricTrend)> + '_ {
        TrendMetric::ALL
            .into_iter()
            .map(move |metric| (metric, self.get(metric)))
    }
}

/// Compares the latest window of logs with the window before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendAnalyzer {
    window: usize,
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendAnalyzer {
    /// Analyzer with the default seven-record window
    #[must_use]
    pub const fn new() -> Self {
        Self {
            window: trends::WINDOW_SIZE,
        }
    }

    /// Analyzer using the configured window size
    #[must_use]
    pub const fn with_config(config: &ScoringConfig) -> Self {
        Self {
            window: config.trend_window_days,
        }
    }

    /// Compare the last `window` logs with up to `window` logs before them.
    ///
    /// Returns `None` unless there is at least one record beyond the recent
    /// window (8 records for the default window).
    #[must_use]
    pub fn analyze(&self, logs: &[HealthLog]) -> Option<TrendAnalysis> {
        if self.window == 0 || logs.len() <= self.window {
            debug!(
                records = logs.len(),
                window = self.window,
                "Not enough history for trend analysis"
            );
            return None;
        }

        let split = logs.len() - self.window;
        let recent = &logs[split..];
        let previous = &logs[split.saturating_sub(self.window)..split];

        let trend = |metric: TrendMetric| {
            MetricTrend::between(mean(recent, metric), mean(previous, metric))
        };

        Some(TrendAnalysis {
            steps: trend(TrendMetric::Steps),
            water: trend(TrendMetric::Water),
            sleep: trend(TrendMetric::Sleep),
            heart_rate: trend(TrendMetric::HeartRate),
        })
    }
}

fn mean(logs: &[HealthLog], metric: TrendMetric) -> f64 {
    if logs.is_empty() {
        return 0.0;
    }
    let sum: f64 = logs.iter().map(|log| metric.value_of(log)).sum();
    sum / logs.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::log_on;

    fn history(previous_steps: u32, recent_steps: u32) -> Vec<HealthLog> {
        (0..14)
            .map(|day| log_on(day, if day < 7 { previous_steps } else { recent_steps }))
            .collect()
    }

    #[test]
    fn test_requires_more_than_one_window() {
        let analyzer = TrendAnalyzer::new();
        let seven: Vec<_> = (0..7).map(|d| log_on(d, 5_000)).collect();
        assert!(analyzer.analyze(&seven).is_none());
        assert!(analyzer.analyze(&[]).is_none());

        let eight: Vec<_> = (0..8).map(|d| log_on(d, 5_000)).collect();
        assert!(analyzer.analyze(&eight).is_some());
    }

    #[test]
    fn test_steps_increase() {
        let analysis = TrendAnalyzer::new().analyze(&history(6_000, 9_000)).unwrap();
        let change = analysis.steps.change.unwrap();
        assert!((change - 50.0).abs() < 1e-9);
        assert_eq!(analysis.steps.trend, TrendDirection::Up);
    }

    #[test]
    fn test_equal_means_are_down() {
        let analysis = TrendAnalyzer::new().analyze(&history(8_000, 8_000)).unwrap();
        assert_eq!(analysis.steps.change, Some(0.0));
        assert_eq!(analysis.steps.trend, TrendDirection::Down);
    }

    #[test]
    fn test_zero_previous_mean_has_no_change() {
        let analysis = TrendAnalyzer::new().analyze(&history(0, 4_000)).unwrap();
        assert_eq!(analysis.steps.change, None);
        assert_eq!(analysis.steps.trend, TrendDirection::Up);
    }

    #[test]
    fn test_tiny_nonzero_previous_mean_has_change() {
        let trend = MetricTrend::between(3e-17, 1e-17);
        assert!((trend.change.unwrap() - 200.0).abs() < 1e-9);
        assert_eq!(trend.trend, TrendDirection::Up);

        assert_eq!(MetricTrend::between(1.0, 0.0).change, None);
        assert_eq!(MetricTrend::between(1.0, -0.0).change, None);
        assert_eq!(MetricTrend::between(1.0, f64::NAN).change, None);
    }

    #[test]
    fn test_short_previous_window() {
        // 9 records: recent = last 7, previous = first 2
        let logs: Vec<_> = (0..9)
            .map(|d| log_on(d, if d < 2 { 5_000 } else { 10_000 }))
            .collect();
        let analysis = TrendAnalyzer::new().analyze(&logs).unwrap();
        assert!((analysis.steps.previous_average - 5_000.0).abs() < f64::EPSILON);
        assert!((analysis.steps.change.unwrap() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_serialized_direction() {
        let analysis = TrendAnalyzer::new().analyze(&history(6_000, 9_000)).unwrap();
        let json = serde_json::to_value(analysis).unwrap();
        assert_eq!(json["steps"]["trend"], "up");
        assert_eq!(json["heartRate"]["trend"], "down");
    }
}
