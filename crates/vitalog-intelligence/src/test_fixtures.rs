// ABOUTME: Shared log builders for unit tests in the intelligence crate
// ABOUTME: Provides an all-optimal reference log and per-day variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{Days, NaiveDate, TimeZone, Utc};
use vitalog_core::models::{BloodPressure, HealthLog};

pub fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .checked_add_days(Days::new(offset))
        .unwrap()
}

/// Every metric scores 100 on this log
pub fn reference_log() -> HealthLog {
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
    HealthLog {
        id: "ref".into(),
        date: day(0),
        steps: 10_000,
        water_intake: 2.5,
        sleep_duration: 8.0,
        heart_rate: 70,
        weight: 68.0,
        blood_pressure: BloodPressure::new(118, 78),
        mood: 4,
        calories: 2_000,
        exercise: String::new(),
        notes: String::new(),
        created_at: now,
        updated_at: now,
    }
}

pub fn log_on(offset: u64, steps: u32) -> HealthLog {
    HealthLog {
        id: format!("log-{offset}"),
        date: day(offset),
        steps,
        ..reference_log()
    }
}
