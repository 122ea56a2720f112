// ABOUTME: Health log repository persisted as a single JSON array file
// ABOUTME: Writes go through a temp file and rename; corrupt files read as empty with a warning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! JSON file repository
//!
//! The file holds the whole collection in the same camelCase shape the
//! mobile client stores under its `health_data` key, so files move between
//! the two unchanged.
//!
//! A missing file is an empty history. A file that cannot be read or parsed
//! is also treated as empty, and the next write replaces it.

use super::{by_date, by_id, insert_new, remove_from, sorted_by_date, update_in, HealthLogRepository};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use vitalog_core::constants::storage::HEALTH_DATA_FILE;
use vitalog_core::models::{HealthLog, HealthLogPatch, NewHealthLog};

/// File-backed repository
#[derive(Debug)]
pub struct JsonFileHealthLogStore {
    path: PathBuf,
    // Serializes read-modify-write cycles
    write_lock: Mutex<()>,
}

impl JsonFileHealthLogStore {
    /// Store at an explicit file path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Store at `health_data.json` inside `data_dir`
    #[must_use]
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(HEALTH_DATA_FILE))
    }

    /// Backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Vec<HealthLog> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No health data file yet");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read health data, treating as empty");
                return Vec::new();
            }
        };

        serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "Corrupt health data file, treating as empty");
            Vec::new()
        })
    }

    async fn persist(&self, logs: &[HealthLog]) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::storage(format!("Cannot create {}: {e}", parent.display())).with_source(e)
            })?;
        }

        let json = serde_json::to_vec_pretty(logs)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).await.map_err(|e| {
            AppError::storage(format!("Cannot write {}: {e}", tmp.display())).with_source(e)
        })?;
        fs::rename(&tmp, &self.path).await.map_err(|e| {
            AppError::storage(format!("Cannot replace {}: {e}", self.path.display())).with_source(e)
        })?;

        debug!(path = %self.path.display(), records = logs.len(), "Persisted health data");
        Ok(())
    }
}

#[async_trait::async_trait]
impl HealthLogRepository for JsonFileHealthLogStore {
    async fn list(&self) -> AppResult<Vec<HealthLog>> {
        Ok(sorted_by_date(&self.load().await))
    }

    async fn find_by_date(&self, date: NaiveDate) -> AppResult<Option<HealthLog>> {
        Ok(by_date(&self.load().await, date))
    }

    async fn find(&self, id: &str) -> AppResult<Option<HealthLog>> {
        Ok(by_id(&self.load().await, id))
    }

    async fn create(&self, new: NewHealthLog) -> AppResult<HealthLog> {
        let _guard = self.write_lock.lock().await;
        let mut logs = self.load().await;
        let log = insert_new(&mut logs, new)?;
        self.persist(&logs).await?;
        info!(id = %log.id, date = %log.date, "Created health log");
        Ok(log)
    }

    async fn update(&self, id: &str, patch: &HealthLogPatch) -> AppResult<HealthLog> {
        let _guard = self.write_lock.lock().await;
        let mut logs = self.load().await;
        let log = update_in(&mut logs, id, patch)?;
        self.persist(&logs).await?;
        info!(id, "Updated health log");
        Ok(log)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut logs = self.load().await;
        remove_from(&mut logs, id)?;
        self.persist(&logs).await?;
        info!(id, "Deleted health log");
        Ok(())
    }
}
