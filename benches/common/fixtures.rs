// ABOUTME: Deterministic health log generators for benchmarks
// ABOUTME: Produces daily histories of configurable length with varied measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Days, NaiveDate, TimeZone, Utc};
use vitalog_core::models::{BloodPressure, HealthLog};

/// History lengths used across benchmarks
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// Two weeks, the minimum for full trend windows
    TwoWeeks,
    /// About three months
    Quarter,
    /// Three years of daily logs
    ThreeYears,
}

impl HistorySize {
    /// Number of daily logs
    pub const fn days(self) -> u32 {
        match self {
            Self::TwoWeeks => 14,
            Self::Quarter => 90,
            Self::ThreeYears => 1_095,
        }
    }
}

/// One log per day ending 2025-06-30, values cycling through every scoring tier
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
pub fn generate_history(size: HistorySize) -> Vec<HealthLog> {
    let end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 6, 30, 8, 0, 0).unwrap();
    let days = size.days();

    (0..days)
        .map(|i| {
            let date = end.checked_sub_days(Days::new(u64::from(days - 1 - i))).unwrap();
            HealthLog {
                id: format!("bench-{i}"),
                date,
                steps: 3_000 + (i * 617) % 9_000,
                water_intake: 1.0 + f64::from(i % 20) / 10.0,
                sleep_duration: 4.5 + f64::from(i % 12) / 2.0,
                heart_rate: 48 + (i * 7) % 70,
                weight: 60.0 + f64::from(i % 40) / 2.0,
                blood_pressure: BloodPressure::new(105 + (i * 3) % 40, 65 + (i * 5) % 30),
                mood: (1 + i % 5) as u8,
                calories: 1_600 + (i * 37) % 1_400,
                exercise: String::new(),
                notes: String::new(),
                created_at: now,
                updated_at: now,
            }
        })
        .collect()
}
