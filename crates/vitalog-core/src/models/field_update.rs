// ABOUTME: Typed single-field updates for the log entry form
// ABOUTME: One variant per editable field, grouped into count, decimal, and text values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Editable fields of a health log, used to key validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogField {
    /// Step count
    Steps,
    /// Water intake
    WaterIntake,
    /// Sleep duration
    SleepDuration,
    /// Heart rate
    HeartRate,
    /// Body weight
    Weight,
    /// Blood pressure (systolic and diastolic share one error slot)
    BloodPressure,
    /// Mood rating
    Mood,
    /// Calories
    Calories,
    /// Exercise text
    Exercise,
    /// Notes text
    Notes,
}

impl LogField {
    /// Wire name of the field
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::WaterIntake => "waterIntake",
            Self::SleepDuration => "sleepDuration",
            Self::HeartRate => "heartRate",
            Self::Weight => "weight",
            Self::BloodPressure => "bloodPressure",
            Self::Mood => "mood",
            Self::Calories => "calories",
            Self::Exercise => "exercise",
            Self::Notes => "notes",
        }
    }
}

impl fmt::Display for LogField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single edit to one form field, carrying a value of the field's own type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldUpdate {
    // Whole-number fields
    /// Step count
    Steps(u32),
    /// Heart rate in bpm
    HeartRate(u32),
    /// Calories consumed
    Calories(u32),
    /// Mood rating
    Mood(u8),
    /// Systolic pressure
    Systolic(u32),
    /// Diastolic pressure
    Diastolic(u32),

    // Decimal fields
    /// Water intake in liters
    WaterIntake(f64),
    /// Sleep duration in hours
    SleepDuration(f64),
    /// Weight in kilograms
    Weight(f64),

    // Free-text fields
    /// Exercise description
    Exercise(String),
    /// Notes
    Notes(String),
}

impl FieldUpdate {
    /// The form field this update writes to
    #[must_use]
    pub const fn field(&self) -> LogField {
        match self {
            Self::Steps(_) => LogField::Steps,
            Self::HeartRate(_) => LogField::HeartRate,
            Self::Calories(_) => LogField::Calories,
            Self::Mood(_) => LogField::Mood,
            Self::Systolic(_) | Self::Diastolic(_) => LogField::BloodPressure,
            Self::WaterIntake(_) => LogField::WaterIntake,
            Self::SleepDuration(_) => LogField::SleepDuration,
            Self::Weight(_) => LogField::Weight,
            Self::Exercise(_) => LogField::Exercise,
            Self::Notes(_) => LogField::Notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blood_pressure_parts_share_a_field() {
        assert_eq!(FieldUpdate::Systolic(120).field(), LogField::BloodPressure);
        assert_eq!(FieldUpdate::Diastolic(80).field(), LogField::BloodPressure);
    }

    #[test]
    fn test_tagged_serialization() {
        let json = serde_json::to_value(FieldUpdate::WaterIntake(1.5)).unwrap();
        assert_eq!(json["field"], "waterIntake");
        assert_eq!(json["value"], 1.5);

        let parsed: FieldUpdate =
            serde_json::from_str(r#"{"field":"notes","value":"slept badly"}"#).unwrap();
        assert_eq!(parsed, FieldUpdate::Notes("slept badly".into()));
    }
}
