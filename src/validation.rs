// ABOUTME: Health log entry form model with per-field validation against accepted ranges
// ABOUTME: Converts a valid draft into a creation payload or a full update patch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Log Entry Validation
//!
//! A [`HealthLogDraft`] is edited one [`FieldUpdate`] at a time. Editing a
//! field clears any error recorded against it; [`HealthLogDraft::validate`]
//! re-checks every field and records the full set of errors.

use crate::errors::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use vitalog_core::constants::form_limits;
use vitalog_core::models::{
    BloodPressure, FieldUpdate, HealthLog, HealthLogPatch, LogField, NewHealthLog,
};

const MOOD_LABELS: [&str; 5] = ["Very Bad", "Bad", "Neutral", "Good", "Excellent"];
const MOOD_EMOJIS: [&str; 5] = ["😢", "😞", "😐", "😊", "😄"];

/// Label for a 1-5 mood rating; "Neutral" outside the range
#[must_use]
pub fn mood_label(mood: u8) -> &'static str {
    mood_entry(&MOOD_LABELS, mood).unwrap_or(MOOD_LABELS[2])
}

/// Emoji for a 1-5 mood rating; the neutral face outside the range
#[must_use]
pub fn mood_emoji(mood: u8) -> &'static str {
    mood_entry(&MOOD_EMOJIS, mood).unwrap_or(MOOD_EMOJIS[2])
}

fn mood_entry(table: &[&'static str; 5], mood: u8) -> Option<&'static str> {
    usize::from(mood)
        .checked_sub(1)
        .and_then(|index| table.get(index))
        .copied()
}

/// Field errors keyed by field, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(BTreeMap<LogField, String>);

impl ValidationErrors {
    /// True when no field failed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for one field
    #[must_use]
    pub fn get(&self, field: LogField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Failing fields with their messages
    pub fn iter(&self) -> impl Iterator<Item = (LogField, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: LogField, message: &str) {
        self.0.insert(field, message.to_owned());
    }

    fn remove(&mut self, field: LogField) {
        self.0.remove(&field);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::out_of_range(errors.to_string()).with_source(errors)
    }
}

/// Editable log entry form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthLogDraft {
    /// Step count
    pub steps: u32,
    /// Water intake (L)
    pub water_intake: f64,
    /// Sleep duration (h)
    pub sleep_duration: f64,
    /// Heart rate (bpm)
    pub heart_rate: u32,
    /// Weight (kg)
    pub weight: f64,
    /// Blood pressure
    pub blood_pressure: BloodPressure,
    /// Mood rating
    pub mood: u8,
    /// Calories
    pub calories: u32,
    /// Exercise text
    pub exercise: String,
    /// Notes
    pub notes: String,
    #[serde(skip)]
    errors: ValidationErrors,
}

impl Default for HealthLogDraft {
    fn default() -> Self {
        Self {
            steps: 0,
            water_intake: 0.0,
            sleep_duration: 0.0,
            heart_rate: 0,
            weight: 0.0,
            blood_pressure: BloodPressure::default(),
            mood: form_limits::DEFAULT_MOOD,
            calories: 0,
            exercise: String::new(),
            notes: String::new(),
            errors: ValidationErrors::default(),
        }
    }
}

impl HealthLogDraft {
    /// Form prefilled from an existing log
    #[must_use]
    pub fn from_log(log: &HealthLog) -> Self {
        Self {
            steps: log.steps,
            water_intake: log.water_intake,
            sleep_duration: log.sleep_duration,
            heart_rate: log.heart_rate,
            weight: log.weight,
            blood_pressure: log.blood_pressure,
            mood: log.mood,
            calories: log.calories,
            exercise: log.exercise.clone(),
            notes: log.notes.clone(),
            errors: ValidationErrors::default(),
        }
    }

    /// Set one field and clear its recorded error
    pub fn apply(&mut self, update: FieldUpdate) {
        self.errors.remove(update.field());
        match update {
            FieldUpdate::Steps(v) => self.steps = v,
            FieldUpdate::HeartRate(v) => self.heart_rate = v,
            FieldUpdate::Calories(v) => self.calories = v,
            FieldUpdate::Mood(v) => self.mood = v,
            FieldUpdate::Systolic(v) => self.blood_pressure.systolic = v,
            FieldUpdate::Diastolic(v) => self.blood_pressure.diastolic = v,
            FieldUpdate::WaterIntake(v) => self.water_intake = v,
            FieldUpdate::SleepDuration(v) => self.sleep_duration = v,
            FieldUpdate::Weight(v) => self.weight = v,
            FieldUpdate::Exercise(v) => self.exercise = v,
            FieldUpdate::Notes(v) => self.notes = v,
        }
    }

    /// Errors recorded by the last `validate` and not yet cleared by `apply`
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Re-check every field and record the result
    ///
    /// # Errors
    ///
    /// Returns every failing field with its message
    pub fn validate(&mut self) -> Result<(), ValidationErrors> {
        self.errors = self.check();
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors.clone())
        }
    }

    /// Check every field without recording anything
    #[must_use]
    pub fn check(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        if self.steps > form_limits::MAX_STEPS {
            errors.insert(LogField::Steps, "Steps must be between 0 and 100,000");
        }
        if !within(self.water_intake, form_limits::MAX_WATER_L) {
            errors.insert(
                LogField::WaterIntake,
                "Water intake must be between 0 and 10 liters",
            );
        }
        if !within(self.sleep_duration, form_limits::MAX_SLEEP_H) {
            errors.insert(
                LogField::SleepDuration,
                "Sleep duration must be between 0 and 24 hours",
            );
        }
        if self.heart_rate > form_limits::MAX_HEART_RATE_BPM {
            errors.insert(LogField::HeartRate, "Heart rate must be between 0 and 300 BPM");
        }
        if !within(self.weight, form_limits::MAX_WEIGHT_KG) {
            errors.insert(LogField::Weight, "Weight must be between 0 and 500 kg");
        }
        if self.calories > form_limits::MAX_CALORIES {
            errors.insert(LogField::Calories, "Calories must be between 0 and 10,000");
        }
        if self.blood_pressure.systolic > form_limits::MAX_SYSTOLIC
            || self.blood_pressure.diastolic > form_limits::MAX_DIASTOLIC
        {
            errors.insert(LogField::BloodPressure, "Invalid blood pressure values");
        }
        let (mood_min, mood_max) = form_limits::MOOD_RANGE;
        if !(mood_min..=mood_max).contains(&self.mood) {
            errors.insert(LogField::Mood, "Mood must be between 1 and 5");
        }

        errors
    }

    /// Creation payload for `date`
    ///
    /// # Errors
    ///
    /// Returns the failing fields if the draft is invalid
    pub fn to_new_log(&self, date: NaiveDate) -> Result<NewHealthLog, ValidationErrors> {
        self.ensure_valid()?;
        Ok(NewHealthLog {
            date,
            steps: self.steps,
            water_intake: self.water_intake,
            sleep_duration: self.sleep_duration,
            heart_rate: self.heart_rate,
            weight: self.weight,
            blood_pressure: self.blood_pressure,
            mood: self.mood,
            calories: self.calories,
            exercise: self.exercise.clone(),
            notes: self.notes.clone(),
        })
    }

    /// Patch that overwrites every measurement of an existing log
    ///
    /// # Errors
    ///
    /// Returns the failing fields if the draft is invalid
    pub fn to_patch(&self) -> Result<HealthLogPatch, ValidationErrors> {
        self.ensure_valid()?;
        Ok(HealthLogPatch {
            steps: Some(self.steps),
            water_intake: Some(self.water_intake),
            sleep_duration: Some(self.sleep_duration),
            heart_rate: Some(self.heart_rate),
            weight: Some(self.weight),
            blood_pressure: Some(self.blood_pressure),
            mood: Some(self.mood),
            calories: Some(self.calories),
            exercise: Some(self.exercise.clone()),
            notes: Some(self.notes.clone()),
        })
    }

    fn ensure_valid(&self) -> Result<(), ValidationErrors> {
        let errors = self.check();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// `0 <= value <= max`; NaN and infinities fail
fn within(value: f64, max: f64) -> bool {
    (0.0..=max).contains(&value)
}
