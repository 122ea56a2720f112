// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for scoring bands, form limits, and display tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file. Scoring thresholds live here so the analyzer, the tests and the
//! benchmarks all read the same numbers.

/// Cache-related constants (stale time, capacity)
pub mod cache;

/// Per-metric scoring thresholds. Every band's lower bound is inclusive.
pub mod scoring {
    /// Steps for the Excellent tier
    pub const STEPS_EXCELLENT: u32 = 10_000;
    /// Steps for the Good tier
    pub const STEPS_GOOD: u32 = 7_500;
    /// Steps for the Fair tier
    pub const STEPS_FAIR: u32 = 5_000;

    /// Water intake (L) for the Excellent tier
    pub const WATER_EXCELLENT_L: f64 = 2.5;
    /// Water intake (L) for the Good tier
    pub const WATER_GOOD_L: f64 = 2.0;
    /// Water intake (L) for the Fair tier
    pub const WATER_FAIR_L: f64 = 1.5;

    /// Sleep band (hours, inclusive) for the Excellent tier
    pub const SLEEP_EXCELLENT_H: (f64, f64) = (7.0, 9.0);
    /// Sleep band (hours, inclusive) for the Good tier
    pub const SLEEP_GOOD_H: (f64, f64) = (6.0, 10.0);
    /// Sleep band (hours, inclusive) for the Fair tier
    pub const SLEEP_FAIR_H: (f64, f64) = (5.0, 11.0);

    /// Resting heart rate band (bpm, inclusive) scored Normal
    pub const HEART_RATE_NORMAL_BPM: (u32, u32) = (60, 100);
    /// Resting heart rate band (bpm, inclusive) scored Acceptable
    pub const HEART_RATE_ACCEPTABLE_BPM: (u32, u32) = (50, 110);

    /// Upper systolic/diastolic bound (mmHg) for Normal blood pressure
    pub const BP_NORMAL_MAX: (u32, u32) = (120, 80);
    /// Upper systolic/diastolic bound (mmHg) for Elevated blood pressure
    pub const BP_ELEVATED_MAX: (u32, u32) = (130, 85);

    /// Top tier score
    pub const SCORE_EXCELLENT: u8 = 100;
    /// Second tier score
    pub const SCORE_GOOD: u8 = 80;
    /// Third tier score
    pub const SCORE_FAIR: u8 = 60;
    /// Fallback score for steps, water, sleep and heart rate
    pub const SCORE_POOR: u8 = 30;
    /// Fallback score for blood pressure
    pub const SCORE_BP_HIGH: u8 = 40;
    /// Weight score when BMI is Overweight
    pub const SCORE_WEIGHT_OVERWEIGHT: u8 = 70;
    /// Weight score when BMI is Underweight or Obese
    pub const SCORE_WEIGHT_OTHER: u8 = 50;

    /// Metrics scoring below this contribute a recommendation
    pub const RECOMMENDATION_THRESHOLD: u8 = 80;
    /// Maximum recommendations in an overall health score
    pub const MAX_RECOMMENDATIONS: usize = 3;
}

/// Overall health score category bands
pub mod health_score {
    /// Minimum overall score for Excellent
    pub const EXCELLENT_MIN: u8 = 90;
    /// Minimum overall score for Good
    pub const GOOD_MIN: u8 = 75;
    /// Minimum overall score for Fair
    pub const FAIR_MIN: u8 = 60;
    /// Recommendation returned when there is no history at all
    pub const EMPTY_HISTORY_RECOMMENDATION: &str =
        "Start logging your health data to get insights";
}

/// Body mass index parameters
pub mod bmi {
    /// Assumed height (m); there is no per-user height input
    pub const DEFAULT_HEIGHT_M: f64 = 1.75;
    /// BMI below this is Underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// BMI below this (and not Underweight) is Normal
    pub const NORMAL_BELOW: f64 = 25.0;
    /// BMI below this (and not Normal) is Overweight
    pub const OVERWEIGHT_BELOW: f64 = 30.0;
}

/// Week-over-week trend parameters
pub mod trends {
    /// Records per window (recent and previous)
    pub const WINDOW_SIZE: usize = 7;
}

/// Daily goals used for the dashboard progress bars
pub mod goals {
    /// Daily step goal
    pub const STEPS: f64 = 10_000.0;
    /// Daily water goal (L)
    pub const WATER_L: f64 = 2.5;
    /// Nightly sleep goal (h)
    pub const SLEEP_H: f64 = 8.0;
    /// Best mood rating
    pub const MOOD_MAX: f64 = 5.0;
    /// Days shown in history charts
    pub const HISTORY_DAYS: u32 = 7;
}

/// Accepted ranges for manual log entry (inclusive)
pub mod form_limits {
    /// Maximum steps per day
    pub const MAX_STEPS: u32 = 100_000;
    /// Maximum water intake (L)
    pub const MAX_WATER_L: f64 = 10.0;
    /// Maximum sleep duration (h)
    pub const MAX_SLEEP_H: f64 = 24.0;
    /// Maximum heart rate (bpm)
    pub const MAX_HEART_RATE_BPM: u32 = 300;
    /// Maximum weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 500.0;
    /// Maximum calories per day
    pub const MAX_CALORIES: u32 = 10_000;
    /// Maximum systolic pressure (mmHg)
    pub const MAX_SYSTOLIC: u32 = 300;
    /// Maximum diastolic pressure (mmHg)
    pub const MAX_DIASTOLIC: u32 = 200;
    /// Mood rating range
    pub const MOOD_RANGE: (u8, u8) = (1, 5);
    /// Mood preselected on an empty form
    pub const DEFAULT_MOOD: u8 = 3;
}

/// Display color tokens
pub mod colors {
    /// Emerald, used for Excellent and Normal BMI
    pub const EMERALD: &str = "#10b981";
    /// Blue, used for Good and Underweight BMI
    pub const BLUE: &str = "#3b82f6";
    /// Amber, used for Fair and Overweight BMI
    pub const AMBER: &str = "#f59e0b";
    /// Red, used for Poor and Obese BMI
    pub const RED: &str = "#ef4444";

    /// Metric badge: score at least 90
    pub const STATUS_SUCCESS: &str = "#34C759";
    /// Metric badge: score at least 75
    pub const STATUS_PRIMARY: &str = "#007AFF";
    /// Metric badge: score at least 60
    pub const STATUS_WARNING: &str = "#FF9500";
    /// Metric badge: anything lower
    pub const STATUS_ERROR: &str = "#FF3B30";
}

/// Local storage
pub mod storage {
    /// File holding the serialized log collection
    pub const HEALTH_DATA_FILE: &str = "health_data.json";
    /// Directory created under the platform data dir
    pub const APP_DIR_NAME: &str = "vitalog";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Default service name
    pub const VITALOG: &str = "vitalog";
}
