// ABOUTME: Core data models for the Vitalog health log platform
// ABOUTME: Re-exports HealthLog, creation and patch payloads, and typed form field updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! A `HealthLog` is one day's self-reported measurements. Records are
//! immutable snapshots: updates go through `HealthLogPatch` and produce a new
//! value with a fresh `updated_at`.
//!
//! Field names serialize in camelCase so that stored files stay compatible
//! with the mobile client's `health_data` format.

mod field_update;
mod health_log;

pub use field_update::{FieldUpdate, LogField};
pub use health_log::{BloodPressure, HealthLog, HealthLogPatch, NewHealthLog};
