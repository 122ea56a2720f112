// ABOUTME: Core types and constants for the Vitalog health log platform
// ABOUTME: Foundation crate with error handling, daily log models, and scoring constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vitalog Core
//!
//! Foundation crate providing shared types and constants for the Vitalog
//! health log platform. It carries no I/O and changes infrequently, so the
//! intelligence crate and the application crate can both build on it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Scoring thresholds, form limits, cache and storage defaults
//! - **models**: Daily health log records, patches, and typed field updates

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`HealthLog`, `NewHealthLog`, `HealthLogPatch`, `FieldUpdate`)
pub mod models;
