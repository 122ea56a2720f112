// ABOUTME: In-memory health log repository backed by an owned RwLock-guarded vector
// ABOUTME: Used for tests, demos, and the CLI's --memory mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{by_date, by_id, insert_new, remove_from, sorted_by_date, update_in, HealthLogRepository};
use crate::errors::AppResult;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::info;
use vitalog_core::models::{HealthLog, HealthLogPatch, NewHealthLog};

/// Owned in-memory repository; one writer at a time
#[derive(Debug, Default)]
pub struct InMemoryHealthLogStore {
    logs: RwLock<Vec<HealthLog>>,
}

impl InMemoryHealthLogStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `logs`
    #[must_use]
    pub fn with_logs(logs: Vec<HealthLog>) -> Self {
        Self {
            logs: RwLock::new(logs),
        }
    }
}

#[async_trait::async_trait]
impl HealthLogRepository for InMemoryHealthLogStore {
    async fn list(&self) -> AppResult<Vec<HealthLog>> {
        Ok(sorted_by_date(&self.logs.read().await))
    }

    async fn find_by_date(&self, date: NaiveDate) -> AppResult<Option<HealthLog>> {
        Ok(by_date(&self.logs.read().await, date))
    }

    async fn find(&self, id: &str) -> AppResult<Option<HealthLog>> {
        Ok(by_id(&self.logs.read().await, id))
    }

    async fn create(&self, new: NewHealthLog) -> AppResult<HealthLog> {
        let log = insert_new(&mut *self.logs.write().await, new)?;
        info!(id = %log.id, date = %log.date, "Created health log");
        Ok(log)
    }

    async fn update(&self, id: &str, patch: &HealthLogPatch) -> AppResult<HealthLog> {
        let log = update_in(&mut self.logs.write().await, id, patch)?;
        info!(id, "Updated health log");
        Ok(log)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        remove_from(&mut *self.logs.write().await, id)?;
        info!(id, "Deleted health log");
        Ok(())
    }
}
