// ABOUTME: Health log repository abstraction with in-memory and JSON file backends
// ABOUTME: Shared collection operations keep both backends behaviorally identical
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Health Log Storage
//!
//! Logs are kept as one ordered collection. Both backends hold the whole
//! collection and rewrite it on every change; at one record per day the
//! collection stays small.
//!
//! The repository does not enforce one log per date. Callers that want that
//! guarantee (the service's `save_today`) look up by date before creating.

/// JSON file backend
pub mod json_file;
/// In-memory backend
pub mod memory;

pub use json_file::JsonFileHealthLogStore;
pub use memory::InMemoryHealthLogStore;

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;
use vitalog_core::models::{HealthLog, HealthLogPatch, NewHealthLog};

/// Storage for daily health logs
#[async_trait::async_trait]
pub trait HealthLogRepository: Send + Sync {
    /// Every log, ascending by date
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn list(&self) -> AppResult<Vec<HealthLog>>;

    /// The log for `date`, if one exists
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn find_by_date(&self, date: NaiveDate) -> AppResult<Option<HealthLog>>;

    /// The log with `id`, if one exists
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn find(&self, id: &str) -> AppResult<Option<HealthLog>>;

    /// Store a new log with a fresh id and timestamps
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if a decimal is NaN or infinite, or a
    /// storage error
    async fn create(&self, new: NewHealthLog) -> AppResult<HealthLog>;

    /// Apply `patch` to the log with `id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no log has `id`, `ValueOutOfRange` if the
    /// patched log would hold a NaN or infinite decimal, or a storage error
    async fn update(&self, id: &str, patch: &HealthLogPatch) -> AppResult<HealthLog>;

    /// Remove the log with `id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no log has `id`, or a storage error
    async fn delete(&self, id: &str) -> AppResult<()>;
}

fn sorted_by_date(logs: &[HealthLog]) -> Vec<HealthLog> {
    let mut sorted = logs.to_vec();
    sorted.sort_by_key(|log| log.date);
    sorted
}

fn by_date(logs: &[HealthLog], date: NaiveDate) -> Option<HealthLog> {
    logs.iter().find(|log| log.date == date).cloned()
}

fn by_id(logs: &[HealthLog], id: &str) -> Option<HealthLog> {
    logs.iter().find(|log| log.id == id).cloned()
}

fn ensure_storable(log: &HealthLog) -> AppResult<()> {
    log.non_finite_field().map_or(Ok(()), |field| {
        Err(AppError::out_of_range(format!("{field} must be a finite number")))
    })
}

fn insert_new(logs: &mut Vec<HealthLog>, new: NewHealthLog) -> AppResult<HealthLog> {
    let log = HealthLog::from_new(new, Uuid::new_v4().to_string(), Utc::now());
    ensure_storable(&log)?;
    logs.push(log.clone());
    Ok(log)
}

fn update_in(logs: &mut [HealthLog], id: &str, patch: &HealthLogPatch) -> AppResult<HealthLog> {
    let slot = logs
        .iter_mut()
        .find(|log| log.id == id)
        .ok_or_else(|| AppError::not_found(format!("Health log {id}")))?;
    let updated = slot.apply_patch(patch, Utc::now());
    ensure_storable(&updated)?;
    *slot = updated.clone();
    Ok(updated)
}

fn remove_from(logs: &mut Vec<HealthLog>, id: &str) -> AppResult<()> {
    let index = logs
        .iter()
        .position(|log| log.id == id)
        .ok_or_else(|| AppError::not_found(format!("Health log {id}")))?;
    logs.remove(index);
    Ok(())
}
