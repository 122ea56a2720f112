// ABOUTME: Configuration module for vitalog-intelligence crate
// ABOUTME: Re-exports scoring configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration validation errors
pub mod error;
/// Scoring parameters (assumed height, trend window, recommendation limit)
pub mod scoring;

pub use error::ConfigError;
pub use scoring::ScoringConfig;
