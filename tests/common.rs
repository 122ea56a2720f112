// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides dated health logs, filled drafts, and in-memory service setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `vitalog`

use chrono::{Days, NaiveDate, TimeZone, Utc};
use std::sync::Once;
use vitalog::cache::{CacheConfig, QueryCache};
use vitalog::service::HealthDataService;
use vitalog::store::InMemoryHealthLogStore;
use vitalog::validation::HealthLogDraft;
use vitalog_core::models::{BloodPressure, FieldUpdate, HealthLog};
use vitalog_intelligence::ScoringConfig;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 2025-01-01 plus `offset` days
pub fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .checked_add_days(Days::new(offset))
        .unwrap()
}

/// A log on which every metric scores 100
pub fn healthy_log(date: NaiveDate) -> HealthLog {
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap();
    HealthLog {
        id: format!("log-{date}"),
        date,
        steps: 10_000,
        water_intake: 2.5,
        sleep_duration: 8.0,
        heart_rate: 70,
        weight: 68.0,
        blood_pressure: BloodPressure::new(118, 78),
        mood: 4,
        calories: 2_100,
        exercise: "30 min run".into(),
        notes: String::new(),
        created_at: now,
        updated_at: now,
    }
}

/// Healthy log with a custom step count
pub fn log_with_steps(date: NaiveDate, steps: u32) -> HealthLog {
    HealthLog {
        steps,
        ..healthy_log(date)
    }
}

/// `count` consecutive daily logs starting at `day(0)`, steps from `steps_for(index)`
pub fn daily_logs(count: u64, steps_for: impl Fn(u64) -> u32) -> Vec<HealthLog> {
    (0..count)
        .map(|i| log_with_steps(day(i), steps_for(i)))
        .collect()
}

/// Draft filled with healthy values through the typed update path
pub fn healthy_draft() -> HealthLogDraft {
    let mut draft = HealthLogDraft::default();
    for update in [
        FieldUpdate::Steps(10_000),
        FieldUpdate::WaterIntake(2.5),
        FieldUpdate::SleepDuration(8.0),
        FieldUpdate::HeartRate(70),
        FieldUpdate::Weight(68.0),
        FieldUpdate::Systolic(118),
        FieldUpdate::Diastolic(78),
        FieldUpdate::Mood(4),
        FieldUpdate::Calories(2_100),
    ] {
        draft.apply(update);
    }
    draft
}

/// Service over an empty in-memory store with default settings
pub fn memory_service() -> HealthDataService<InMemoryHealthLogStore> {
    memory_service_with(Vec::new())
}

/// Service over an in-memory store seeded with `logs`
pub fn memory_service_with(logs: Vec<HealthLog>) -> HealthDataService<InMemoryHealthLogStore> {
    init_test_logging();
    HealthDataService::new(
        InMemoryHealthLogStore::with_logs(logs),
        QueryCache::with_config(&CacheConfig::default()),
        &ScoringConfig::default(),
    )
}
