// ABOUTME: Body mass index calculation and WHO weight category bands
// ABOUTME: Used by the weight sub-score with a fixed assumed height
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use vitalog_core::constants::{bmi, colors};

/// BMI = weight / height²
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Weight category derived from BMI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI 18.5 to below 25
    Normal,
    /// BMI 25 to below 30
    Overweight,
    /// BMI 30 and above, or not a number
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value. Non-finite input falls through to `Obese`.
    #[must_use]
    pub fn from_bmi(value: f64) -> Self {
        if value < bmi::UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if value < bmi::NORMAL_BELOW {
            Self::Normal
        } else if value < bmi::OVERWEIGHT_BELOW {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Display color token
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Underweight => colors::BLUE,
            Self::Normal => colors::EMERALD,
            Self::Overweight => colors::AMBER,
            Self::Obese => colors::RED,
        }
    }
}
