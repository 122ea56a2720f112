// ABOUTME: Overall health score aggregated from the six per-metric scores of a log
// ABOUTME: Maps the mean to a category and color and collects up to three recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health Score Aggregation
//!
//! The overall score is the mean of the six metric scores rounded half up,
//! computed in integer arithmetic so 0.5 boundaries never drift. Only the
//! most recent log of a history contributes; earlier logs are ignored.

use crate::config::ScoringConfig;
use crate::metric_analyzer::{MetricAnalysis, MetricAnalyzer};
use serde::{Deserialize, Serialize};
use vitalog_core::constants::{colors, health_score, scoring};
use vitalog_core::models::HealthLog;

/// Overall score band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthCategory {
    /// 90 and above
    Excellent,
    /// 75 to 89
    Good,
    /// 60 to 74
    Fair,
    /// Below 60
    Poor,
}

impl HealthCategory {
    /// Band for an overall score
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= health_score::EXCELLENT_MIN {
            Self::Excellent
        } else if score >= health_score::GOOD_MIN {
            Self::Good
        } else if score >= health_score::FAIR_MIN {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    /// Display color token
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Excellent => colors::EMERALD,
            Self::Good => colors::BLUE,
            Self::Fair => colors::AMBER,
            Self::Poor => colors::RED,
        }
    }
}

/// Badge color for a single metric score
#[must_use]
pub const fn status_color(score: u8) -> &'static str {
    match HealthCategory::from_score(score) {
        HealthCategory::Excellent => colors::STATUS_SUCCESS,
        HealthCategory::Good => colors::STATUS_PRIMARY,
        HealthCategory::Fair => colors::STATUS_WARNING,
        HealthCategory::Poor => colors::STATUS_ERROR,
    }
}

/// Overall score with its category, color and advice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthScore {
    /// 0-100
    pub overall: u8,
    /// Band of `overall`
    pub category: HealthCategory,
    /// Color token of `category`
    pub color: String,
    /// At most `max_recommendations` entries, in metric order
    pub recommendations: Vec<String>,
}

/// Folds a metric analysis into one overall score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthScoreAggregator {
    analyzer: MetricAnalyzer,
    max_recommendations: usize,
}

impl Default for HealthScoreAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthScoreAggregator {
    /// Aggregator with default height and recommendation limit
    #[must_use]
    pub const fn new() -> Self {
        Self {
            analyzer: MetricAnalyzer::new(),
            max_recommendations: scoring::MAX_RECOMMENDATIONS,
        }
    }

    /// Aggregator using the configured height and recommendation limit
    #[must_use]
    pub const fn with_config(config: &ScoringConfig) -> Self {
        Self {
            analyzer: MetricAnalyzer::with_config(config),
            max_recommendations: config.max_recommendations,
        }
    }

    /// Score the most recent log of `logs`.
    ///
    /// An empty history scores 0 (Poor) with a single prompt to start
    /// logging; the analyzer is not invoked.
    #[must_use]
    pub fn overall_score(&self, logs: &[HealthLog]) -> HealthScore {
        logs.last().map_or_else(Self::empty_history, |latest| self.score_log(latest))
    }

    /// Score a single log
    #[must_use]
    pub fn score_log(&self, log: &HealthLog) -> HealthScore {
        self.score_analysis(&self.analyzer.analyze(log))
    }

    /// Aggregate an existing analysis
    #[must_use]
    pub fn score_analysis(&self, analysis: &MetricAnalysis) -> HealthScore {
        let scores: Vec<u32> = analysis
            .iter()
            .map(|(_, assessment)| u32::from(assessment.score))
            .collect();
        let overall = rounded_mean(&scores);
        let category = HealthCategory::from_score(overall);

        let recommendations = analysis
            .iter()
            .filter(|(_, assessment)| assessment.score < scoring::RECOMMENDATION_THRESHOLD)
            .map(|(_, assessment)| assessment.recommendation.clone())
            .take(self.max_recommendations)
            .collect();

        HealthScore {
            overall,
            category,
            color: category.color().to_owned(),
            recommendations,
        }
    }

    fn empty_history() -> HealthScore {
        let category = HealthCategory::Poor;
        HealthScore {
            overall: 0,
            category,
            color: category.color().to_owned(),
            recommendations: vec![health_score::EMPTY_HISTORY_RECOMMENDATION.to_owned()],
        }
    }
}

/// Mean of 0-100 scores rounded half up
fn rounded_mean(scores: &[u32]) -> u8 {
    let Ok(count) = u32::try_from(scores.len()) else {
        return 0;
    };
    if count == 0 {
        return 0;
    }
    let sum: u32 = scores.iter().sum();
    let mean = (2 * sum + count) / (2 * count);
    u8::try_from(mean.min(100)).unwrap_or(100)
}
