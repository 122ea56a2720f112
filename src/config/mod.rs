// ABOUTME: Configuration management module for application settings
// ABOUTME: Environment-driven storage, cache and scoring configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable configuration
pub mod environment;

pub use environment::{AppConfig, StorageBackend};
pub use vitalog_intelligence::ScoringConfig;
