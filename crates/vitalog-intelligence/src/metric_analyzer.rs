// ABOUTME: Per-metric scoring of a daily health log against fixed threshold tables
// ABOUTME: Produces a score, status label and recommendation for each of six metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metric Analyzer
//!
//! Scores steps, water intake, sleep duration, resting heart rate, blood
//! pressure and weight (via BMI) independently. Bands are checked top-down
//! and the first match wins; lower bounds are inclusive. Anything that does
//! not match a band, including NaN, lands in the lowest tier.
//!
//! A `heart_rate` of 0 means "not recorded" on the entry form but is scored
//! like any other value, so an unrecorded heart rate reads as Concerning.

use crate::bmi::{calculate_bmi, BmiCategory};
use crate::config::ScoringConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use vitalog_core::constants::{bmi, scoring};
use vitalog_core::models::{BloodPressure, HealthLog};

/// The six scored metrics, in their fixed reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HealthMetric {
    /// Daily step count
    Steps,
    /// Water intake in liters
    Water,
    /// Sleep duration in hours
    Sleep,
    /// Resting heart rate in bpm
    HeartRate,
    /// Systolic/diastolic pressure in mmHg
    BloodPressure,
    /// Body weight scored by BMI
    Weight,
}

impl HealthMetric {
    /// All metrics in reporting order
    pub const ALL: [Self; 6] = [
        Self::Steps,
        Self::Water,
        Self::Sleep,
        Self::HeartRate,
        Self::BloodPressure,
        Self::Weight,
    ];

    /// Wire name of the metric
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::Water => "water",
            Self::Sleep => "sleep",
            Self::HeartRate => "heartRate",
            Self::BloodPressure => "bloodPressure",
            Self::Weight => "weight",
        }
    }
}

impl fmt::Display for HealthMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score, status label and advice for a single metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricAssessment {
    /// 0-100
    pub score: u8,
    /// Tier label, e.g. "Excellent" or "Concerning"
    pub status: String,
    /// Advice text for this tier, never empty
    pub recommendation: String,
}

impl MetricAssessment {
    fn new(score: u8, status: &str, recommendation: &str) -> Self {
        Self {
            score,
            status: status.to_owned(),
            recommendation: recommendation.to_owned(),
        }
    }
}

/// Assessment of every metric for one log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricAnalysis {
    /// Steps assessment
    pub steps: MetricAssessment,
    /// Water intake assessment
    pub water: MetricAssessment,
    /// Sleep duration assessment
    pub sleep: MetricAssessment,
    /// Heart rate assessment
    pub heart_rate: MetricAssessment,
    /// Blood pressure assessment
    pub blood_pressure: MetricAssessment,
    /// Weight (BMI) assessment
    pub weight: MetricAssessment,
}

impl MetricAnalysis {
    /// Assessment for one metric
    #[must_use]
    pub const fn get(&self, metric: HealthMetric) -> &MetricAssessment {
        match metric {
            HealthMetric::Steps => &self.steps,
            HealthMetric::Water => &self.water,
            HealthMetric::Sleep => &self.sleep,
            HealthMetric::HeartRate => &self.heart_rate,
            HealthMetric::BloodPressure => &self.blood_pressure,
            HealthMetric::Weight => &self.weight,
        }
    }

    /// Every assessment in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (HealthMetric, &MetricAssessment)> + '_ {
        HealthMetric::ALL
            .into_iter()
            .map(move |metric| (metric, self.get(metric)))
    }
}

/// Scores a single log against the threshold tables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricAnalyzer {
    height_m: f64,
}

impl Default for MetricAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricAnalyzer {
    /// Analyzer using the default assumed height
    #[must_use]
    pub const fn new() -> Self {
        Self {
            height_m: bmi::DEFAULT_HEIGHT_M,
        }
    }

    /// Analyzer using the configured assumed height
    #[must_use]
    pub const fn with_config(config: &ScoringConfig) -> Self {
        Self {
            height_m: config.assumed_height_m,
        }
    }

    /// Score every metric of `log`
    #[must_use]
    pub fn analyze(&self, log: &HealthLog) -> MetricAnalysis {
        MetricAnalysis {
            steps: Self::score_steps(log.steps),
            water: Self::score_water(log.water_intake),
            sleep: Self::score_sleep(log.sleep_duration),
            heart_rate: Self::score_heart_rate(log.heart_rate),
            blood_pressure: Self::score_blood_pressure(log.blood_pressure),
            weight: self.score_weight(log.weight),
        }
    }

    /// Steps: ≥10000 / ≥7500 / ≥5000 / below
    #[must_use]
    pub fn score_steps(steps: u32) -> MetricAssessment {
        if steps >= scoring::STEPS_EXCELLENT {
            MetricAssessment::new(
                scoring::SCORE_EXCELLENT,
                "Excellent",
                "Great job! Keep up the active lifestyle.",
            )
        } else if steps >= scoring::STEPS_GOOD {
            MetricAssessment::new(
                scoring::SCORE_GOOD,
                "Good",
                "You're doing well! Try to reach 10,000 steps.",
            )
        } else if steps >= scoring::STEPS_FAIR {
            MetricAssessment::new(
                scoring::SCORE_FAIR,
                "Fair",
                "Increase daily activity. Take stairs, walk more.",
            )
        } else {
            MetricAssessment::new(
                scoring::SCORE_POOR,
                "Poor",
                "Start with short walks. Aim for 5,000 steps daily.",
            )
        }
    }

    /// Water (L): ≥2.5 / ≥2.0 / ≥1.5 / below
    #[must_use]
    pub fn score_water(liters: f64) -> MetricAssessment {
        if liters >= scoring::WATER_EXCELLENT_L {
            MetricAssessment::new(
                scoring::SCORE_EXCELLENT,
                "Excellent",
                "Perfect hydration! Keep it up.",
            )
        } else if liters >= scoring::WATER_GOOD_L {
            MetricAssessment::new(
                scoring::SCORE_GOOD,
                "Good",
                "Good hydration. Try to reach 2.5L daily.",
            )
        } else if liters >= scoring::WATER_FAIR_L {
            MetricAssessment::new(
                scoring::SCORE_FAIR,
                "Fair",
                "Increase water intake. Set hourly reminders.",
            )
        } else {
            MetricAssessment::new(
                scoring::SCORE_POOR,
                "Poor",
                "Drink more water! Start with a glass every hour.",
            )
        }
    }

    /// Sleep (h): 7-9 / 6-10 / 5-11 / outside, all bands inclusive
    #[must_use]
    pub fn score_sleep(hours: f64) -> MetricAssessment {
        if in_band(hours, scoring::SLEEP_EXCELLENT_H) {
            MetricAssessment::new(
                scoring::SCORE_EXCELLENT,
                "Excellent",
                "Perfect sleep duration! Maintain this routine.",
            )
        } else if in_band(hours, scoring::SLEEP_GOOD_H) {
            MetricAssessment::new(
                scoring::SCORE_GOOD,
                "Good",
                "Good sleep. Aim for 7-9 hours consistently.",
            )
        } else if in_band(hours, scoring::SLEEP_FAIR_H) {
            MetricAssessment::new(
                scoring::SCORE_FAIR,
                "Fair",
                "Improve sleep schedule. Create a bedtime routine.",
            )
        } else {
            MetricAssessment::new(
                scoring::SCORE_POOR,
                "Poor",
                "Poor sleep pattern. Consult a sleep specialist.",
            )
        }
    }

    /// Heart rate (bpm): 60-100 / 50-110 / outside
    #[must_use]
    pub fn score_heart_rate(bpm: u32) -> MetricAssessment {
        let (normal_low, normal_high) = scoring::HEART_RATE_NORMAL_BPM;
        let (ok_low, ok_high) = scoring::HEART_RATE_ACCEPTABLE_BPM;

        if (normal_low..=normal_high).contains(&bpm) {
            MetricAssessment::new(
                scoring::SCORE_EXCELLENT,
                "Normal",
                "Heart rate is in normal range.",
            )
        } else if (ok_low..=ok_high).contains(&bpm) {
            MetricAssessment::new(
                scoring::SCORE_GOOD,
                "Acceptable",
                "Heart rate is acceptable. Monitor regularly.",
            )
        } else {
            MetricAssessment::new(
                scoring::SCORE_POOR,
                "Concerning",
                "Consult your doctor about heart rate.",
            )
        }
    }

    /// Blood pressure: both readings at or under 120/80, then 130/85
    #[must_use]
    pub fn score_blood_pressure(reading: BloodPressure) -> MetricAssessment {
        let within = |(max_sys, max_dia): (u32, u32)| {
            reading.systolic <= max_sys && reading.diastolic <= max_dia
        };

        if within(scoring::BP_NORMAL_MAX) {
            MetricAssessment::new(
                scoring::SCORE_EXCELLENT,
                "Normal",
                "Blood pressure is optimal.",
            )
        } else if within(scoring::BP_ELEVATED_MAX) {
            MetricAssessment::new(
                scoring::SCORE_GOOD,
                "Elevated",
                "Monitor blood pressure. Reduce sodium intake.",
            )
        } else {
            MetricAssessment::new(
                scoring::SCORE_BP_HIGH,
                "High",
                "Consult doctor. Monitor blood pressure daily.",
            )
        }
    }

    /// Weight (kg), scored by BMI at the analyzer's assumed height
    #[must_use]
    pub fn score_weight(&self, weight_kg: f64) -> MetricAssessment {
        match BmiCategory::from_bmi(calculate_bmi(weight_kg, self.height_m)) {
            BmiCategory::Normal => MetricAssessment::new(
                scoring::SCORE_EXCELLENT,
                "Healthy",
                "Maintain current weight with balanced diet.",
            ),
            BmiCategory::Overweight => MetricAssessment::new(
                scoring::SCORE_WEIGHT_OVERWEIGHT,
                "Overweight",
                "Consider gradual weight loss through diet and exercise.",
            ),
            other @ (BmiCategory::Underweight | BmiCategory::Obese) => MetricAssessment::new(
                scoring::SCORE_WEIGHT_OTHER,
                other.label(),
                "Consult healthcare provider for weight management.",
            ),
        }
    }
}

fn in_band(value: f64, (low, high): (f64, f64)) -> bool {
    (low..=high).contains(&value)
}
