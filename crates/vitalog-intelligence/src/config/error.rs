// ABOUTME: Configuration error types for scoring configuration validation
// ABOUTME: Defines error variants for out-of-range heights and zero limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for scoring configuration validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., a non-positive height)
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// A limit that must be at least one was zero
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),
}
