// ABOUTME: History chart series, per-metric averages, and daily goal progress
// ABOUTME: Read models derived from stored logs for the history and dashboard views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use vitalog_core::constants::goals;
use vitalog_core::models::HealthLog;

/// Metrics that can be charted over the history window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartMetric {
    /// Daily steps
    Steps,
    /// Water intake
    Water,
    /// Sleep duration
    Sleep,
    /// Resting heart rate
    HeartRate,
    /// Body weight
    Weight,
    /// Calories consumed
    Calories,
}

impl ChartMetric {
    /// All chartable metrics
    pub const ALL: [Self; 6] = [
        Self::Steps,
        Self::Water,
        Self::Sleep,
        Self::HeartRate,
        Self::Weight,
        Self::Calories,
    ];

    /// Wire name of the metric
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::Water => "water",
            Self::Sleep => "sleep",
            Self::HeartRate => "heartRate",
            Self::Weight => "weight",
            Self::Calories => "calories",
        }
    }

    /// Chart title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Steps => "Daily Steps",
            Self::Water => "Water Intake",
            Self::Sleep => "Sleep Duration",
            Self::HeartRate => "Heart Rate",
            Self::Weight => "Weight",
            Self::Calories => "Calories",
        }
    }

    /// Unit suffix
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Steps => "",
            Self::Water => "L",
            Self::Sleep => "h",
            Self::HeartRate => "BPM",
            Self::Weight => "kg",
            Self::Calories => "kcal",
        }
    }

    /// Value of this metric at a chart point
    #[must_use]
    pub fn value_of(self, point: &ChartPoint) -> f64 {
        match self {
            Self::Steps => f64::from(point.steps),
            Self::Water => point.water_intake,
            Self::Sleep => point.sleep_duration,
            Self::HeartRate => f64::from(point.heart_rate),
            Self::Weight => point.weight,
            Self::Calories => f64::from(point.calories),
        }
    }
}

/// One calendar day on a history chart; zero when nothing was logged
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// Day
    pub date: NaiveDate,
    /// Steps
    pub steps: u32,
    /// Water intake (L)
    pub water_intake: f64,
    /// Sleep (h)
    pub sleep_duration: f64,
    /// Heart rate (bpm)
    pub heart_rate: u32,
    /// Weight (kg)
    pub weight: f64,
    /// Calories
    pub calories: u32,
}

impl ChartPoint {
    const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            steps: 0,
            water_intake: 0.0,
            sleep_duration: 0.0,
            heart_rate: 0,
            weight: 0.0,
            calories: 0,
        }
    }

    fn from_log(log: &HealthLog) -> Self {
        Self {
            date: log.date,
            steps: log.steps,
            water_intake: log.water_intake,
            sleep_duration: log.sleep_duration,
            heart_rate: log.heart_rate,
            weight: log.weight,
            calories: log.calories,
        }
    }
}

/// One point per calendar day from `end - days + 1` through `end`.
///
/// Days without a log are zero-filled. If several logs share a date the
/// first one wins.
#[must_use]
pub fn chart_series(logs: &[HealthLog], end: NaiveDate, days: u32) -> Vec<ChartPoint> {
    (0..days)
        .rev()
        .filter_map(|back| end.checked_sub_days(Days::new(u64::from(back))))
        .map(|date| {
            logs.iter()
                .find(|log| log.date == date)
                .map_or_else(|| ChartPoint::empty(date), ChartPoint::from_log)
        })
        .collect()
}

/// Series over the default seven-day window
#[must_use]
pub fn weekly_series(logs: &[HealthLog], end: NaiveDate) -> Vec<ChartPoint> {
    chart_series(logs, end, goals::HISTORY_DAYS)
}

/// Mean of `metric` across `points`; 0 when there are none
#[must_use]
pub fn average(points: &[ChartPoint], metric: ChartMetric) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let sum: f64 = points.iter().map(|point| metric.value_of(point)).sum();
    sum / points.len() as f64
}

/// Percent of each daily goal reached, capped at 100
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    /// Steps vs 10,000
    pub steps: f64,
    /// Water vs 2.5 L
    pub water: f64,
    /// Sleep vs 8 h
    pub sleep: f64,
    /// Mood vs 5
    pub mood: f64,
}

impl DailyProgress {
    /// Progress for one log
    #[must_use]
    pub fn from_log(log: &HealthLog) -> Self {
        Self {
            steps: percent_of(f64::from(log.steps), goals::STEPS),
            water: percent_of(log.water_intake, goals::WATER_L),
            sleep: percent_of(log.sleep_duration, goals::SLEEP_H),
            mood: percent_of(f64::from(log.mood), goals::MOOD_MAX),
        }
    }
}

fn percent_of(value: f64, goal: f64) -> f64 {
    (value / goal * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{day, log_on, reference_log};

    #[test]
    fn test_series_zero_fills_missing_days() {
        let logs = vec![log_on(2, 4_000), log_on(6, 12_000)];
        let series = chart_series(&logs, day(6), 7);

        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, day(0));
        assert_eq!(series[6].date, day(6));
        assert_eq!(series[2].steps, 4_000);
        assert_eq!(series[6].steps, 12_000);
        assert_eq!(series[3], ChartPoint::empty(day(3)));
    }

    #[test]
    fn test_average_over_series() {
        let logs = vec![log_on(5, 3_000), log_on(6, 11_000)];
        let series = chart_series(&logs, day(6), 2);
        assert!((average(&series, ChartMetric::Steps) - 7_000.0).abs() < f64::EPSILON);
        assert!(average(&[], ChartMetric::Weight).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weekly_series_length() {
        assert_eq!(weekly_series(&[], day(10)).len(), 7);
    }

    #[test]
    fn test_progress_is_capped() {
        let log = HealthLog {
            steps: 15_000,
            water_intake: 1.25,
            sleep_duration: 4.0,
            mood: 3,
            ..reference_log()
        };
        let progress = DailyProgress::from_log(&log);
        assert!((progress.steps - 100.0).abs() < f64::EPSILON);
        assert!((progress.water - 50.0).abs() < 1e-9);
        assert!((progress.sleep - 50.0).abs() < 1e-9);
        assert!((progress.mood - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_chart_metric_labels() {
        assert_eq!(ChartMetric::Water.title(), "Water Intake");
        assert_eq!(ChartMetric::HeartRate.unit(), "BPM");
        assert_eq!(ChartMetric::ALL.len(), 6);
    }
}
