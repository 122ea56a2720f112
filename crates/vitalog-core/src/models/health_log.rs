// ABOUTME: Daily health log record with creation payload and partial update patch
// ABOUTME: HealthLog, NewHealthLog, HealthLogPatch, and BloodPressure definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Blood pressure reading in mmHg
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressure {
    /// Systolic pressure (the higher number)
    pub systolic: u32,
    /// Diastolic pressure (the lower number)
    pub diastolic: u32,
}

impl BloodPressure {
    /// Create a reading
    #[must_use]
    pub const fn new(systolic: u32, diastolic: u32) -> Self {
        Self {
            systolic,
            diastolic,
        }
    }
}

/// One day of self-reported health measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthLog {
    /// Unique identifier assigned at creation, never reused
    pub id: String,
    /// Calendar day this log covers (`YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Step count
    pub steps: u32,
    /// Water intake in liters
    pub water_intake: f64,
    /// Sleep duration in hours
    pub sleep_duration: f64,
    /// Resting heart rate in bpm; 0 means "not recorded"
    pub heart_rate: u32,
    /// Body weight in kilograms
    pub weight: f64,
    /// Blood pressure reading
    pub blood_pressure: BloodPressure,
    /// Mood rating, 1 (very bad) to 5 (excellent)
    pub mood: u8,
    /// Calories consumed
    pub calories: u32,
    /// Free-text exercise description
    pub exercise: String,
    /// Free-text notes
    pub notes: String,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record was last changed
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a log; identity and timestamps are assigned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHealthLog {
    /// Calendar day this log covers
    pub date: NaiveDate,
    /// Step count
    pub steps: u32,
    /// Water intake in liters
    pub water_intake: f64,
    /// Sleep duration in hours
    pub sleep_duration: f64,
    /// Resting heart rate in bpm
    pub heart_rate: u32,
    /// Body weight in kilograms
    pub weight: f64,
    /// Blood pressure reading
    pub blood_pressure: BloodPressure,
    /// Mood rating
    pub mood: u8,
    /// Calories consumed
    pub calories: u32,
    /// Free-text exercise description
    pub exercise: String,
    /// Free-text notes
    pub notes: String,
}

/// Partial update; `None` fields keep their current value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthLogPatch {
    /// New step count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    /// New water intake
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_intake: Option<f64>,
    /// New sleep duration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_duration: Option<f64>,
    /// New heart rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u32>,
    /// New weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// New blood pressure reading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<BloodPressure>,
    /// New mood rating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<u8>,
    /// New calories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    /// New exercise text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise: Option<String>,
    /// New notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl HealthLogPatch {
    /// True when the patch would change nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.steps.is_none()
            && self.water_intake.is_none()
            && self.sleep_duration.is_none()
            && self.heart_rate.is_none()
            && self.weight.is_none()
            && self.blood_pressure.is_none()
            && self.mood.is_none()
            && self.calories.is_none()
            && self.exercise.is_none()
            && self.notes.is_none()
    }
}

impl HealthLog {
    /// Build a stored record from a creation payload
    #[must_use]
    pub fn from_new(new: NewHealthLog, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            date: new.date,
            steps: new.steps,
            water_intake: new.water_intake,
            sleep_duration: new.sleep_duration,
            heart_rate: new.heart_rate,
            weight: new.weight,
            blood_pressure: new.blood_pressure,
            mood: new.mood,
            calories: new.calories,
            exercise: new.exercise,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Return a copy with the patch applied and `updated_at` set to `now`.
    ///
    /// `id`, `date` and `created_at` are never touched.
    #[must_use]
    pub fn apply_patch(&self, patch: &HealthLogPatch, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            date: self.date,
            steps: patch.steps.unwrap_or(self.steps),
            water_intake: patch.water_intake.unwrap_or(self.water_intake),
            sleep_duration: patch.sleep_duration.unwrap_or(self.sleep_duration),
            heart_rate: patch.heart_rate.unwrap_or(self.heart_rate),
            weight: patch.weight.unwrap_or(self.weight),
            blood_pressure: patch.blood_pressure.unwrap_or(self.blood_pressure),
            mood: patch.mood.unwrap_or(self.mood),
            calories: patch.calories.unwrap_or(self.calories),
            exercise: patch
                .exercise
                .clone()
                .unwrap_or_else(|| self.exercise.clone()),
            notes: patch.notes.clone().unwrap_or_else(|| self.notes.clone()),
            created_at: self.created_at,
            updated_at: now,
        }
    }

    /// Name of the first decimal field holding NaN or infinity.
    ///
    /// JSON has no encoding for those values, so a record carrying one
    /// cannot be stored.
    #[must_use]
    pub fn non_finite_field(&self) -> Option<&'static str> {
        [
            ("waterIntake", self.water_intake),
            ("sleepDuration", self.sleep_duration),
            ("weight", self.weight),
        ]
        .into_iter()
        .find_map(|(name, value)| (!value.is_finite()).then_some(name))
    }
}
