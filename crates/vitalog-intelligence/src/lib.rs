// ABOUTME: Health scoring engine for daily logs: per-metric analysis, overall score, trends
// ABOUTME: Pure, synchronous computation with no I/O, safe to call from any thread
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vitalog Intelligence
//!
//! Scoring and trend analysis over [`HealthLog`](vitalog_core::models::HealthLog)
//! records.
//!
//! - [`MetricAnalyzer`] scores one log across six sub-metrics using fixed
//!   threshold tables.
//! - [`HealthScoreAggregator`] folds the six scores into one 0-100 score with
//!   a category and up to three recommendations.
//! - [`TrendAnalyzer`] compares the latest week of logs with the week before.
//! - [`history`] builds the chart series and progress read models.
//!
//! Every function here is total: empty or out-of-range input produces a
//! defined degenerate result, never an error or a panic. Same input gives
//! the same output, so callers may recompute freely.

/// Body mass index and weight categories
pub mod bmi;
/// Scoring configuration and validation
pub mod config;
/// Overall health score aggregation
pub mod health_score;
/// Chart series, averages and daily goal progress
pub mod history;
/// Per-metric threshold scoring
pub mod metric_analyzer;
/// Week-over-week trend analysis
pub mod trend_analysis;

#[cfg(test)]
mod test_fixtures;

pub use bmi::{calculate_bmi, BmiCategory};
pub use config::{ConfigError, ScoringConfig};
pub use health_score::{status_color, HealthCategory, HealthScore, HealthScoreAggregator};
pub use history::{ChartMetric, ChartPoint, DailyProgress};
pub use metric_analyzer::{HealthMetric, MetricAnalysis, MetricAnalyzer, MetricAssessment};
pub use trend_analysis::{MetricTrend, TrendAnalysis, TrendAnalyzer, TrendDirection, TrendMetric};
