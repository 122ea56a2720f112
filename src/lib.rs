// ABOUTME: Main library entry point for the Vitalog daily health log application
// ABOUTME: Validation, storage, query caching and the service facade over the scoring engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Vitalog
//!
//! Records one set of self-reported health measurements per day and turns
//! them into scores, recommendations and trends.
//!
//! ## Architecture
//!
//! - **`vitalog-core`**: data model, error taxonomy, constants
//! - **`vitalog-intelligence`**: metric scoring, overall score, trends,
//!   history read models
//! - **This crate**: form validation, log repositories, query cache, the
//!   [`service::HealthDataService`] facade, logging and configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use vitalog::cache::{CacheConfig, QueryCache};
//! use vitalog::errors::AppResult;
//! use vitalog::service::HealthDataService;
//! use vitalog::store::InMemoryHealthLogStore;
//! use vitalog::validation::HealthLogDraft;
//! use vitalog_core::models::FieldUpdate;
//! use vitalog_intelligence::ScoringConfig;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let service = HealthDataService::new(
//!         InMemoryHealthLogStore::new(),
//!         QueryCache::with_config(&CacheConfig::default()),
//!         &ScoringConfig::default(),
//!     );
//!
//!     let today = Utc::now().date_naive();
//!     let mut draft = HealthLogDraft::default();
//!     draft.apply(FieldUpdate::Steps(10_000));
//!     service.save_today(today, &mut draft).await?;
//!
//!     let dashboard = service.dashboard(today).await?;
//!     println!("Health score: {}", dashboard.health_score.overall);
//!     Ok(())
//! }
//! ```

/// Query cache with stale-time and invalidation
pub mod cache;
/// Environment configuration
pub mod config;
/// Error types
pub mod errors;
/// Structured logging setup
pub mod logging;
/// Service facade combining storage, cache and scoring
pub mod service;
/// Health log repositories
pub mod store;
/// Log entry form validation
pub mod validation;
