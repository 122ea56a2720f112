// ABOUTME: Health data service facade over a log repository and the query cache
// ABOUTME: Cached reads, validated upsert of today's log, and the dashboard read model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Health Data Service
//!
//! Reads go through the [`QueryCache`] under one [`QueryKey`] per query.
//! Every successful write invalidates all log queries, so a read after a
//! write always reflects it.

use crate::cache::{CacheProvider, QueryCache, QueryKey};
use crate::errors::{AppError, AppResult};
use crate::store::HealthLogRepository;
use crate::validation::HealthLogDraft;
use chrono::{Days, NaiveDate};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::{debug, info};
use vitalog_core::constants::goals;
use vitalog_core::models::{HealthLog, HealthLogPatch};
use vitalog_intelligence::history::{chart_series, ChartPoint, DailyProgress};
use vitalog_intelligence::{
    HealthScore, HealthScoreAggregator, MetricAnalysis, MetricAnalyzer, ScoringConfig,
    TrendAnalysis, TrendAnalyzer,
};

/// Everything the home screen shows for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Day the dashboard was built for
    pub date: NaiveDate,
    /// Overall score of the most recent log
    pub health_score: HealthScore,
    /// The log for `date`, if recorded
    pub todays_log: Option<HealthLog>,
    /// Per-metric analysis of today's log
    pub metrics: Option<MetricAnalysis>,
    /// Goal progress of today's log
    pub progress: Option<DailyProgress>,
    /// Week-over-week trends across the full history
    pub trends: Option<TrendAnalysis>,
}

/// Facade over storage, cache and scoring
pub struct HealthDataService<R> {
    repository: R,
    cache: QueryCache,
    analyzer: MetricAnalyzer,
    aggregator: HealthScoreAggregator,
    trends: TrendAnalyzer,
}

impl<R: HealthLogRepository> HealthDataService<R> {
    /// Build a service
    #[must_use]
    pub const fn new(repository: R, cache: QueryCache, scoring: &ScoringConfig) -> Self {
        Self {
            repository,
            cache,
            analyzer: MetricAnalyzer::with_config(scoring),
            aggregator: HealthScoreAggregator::with_config(scoring),
            trends: TrendAnalyzer::with_config(scoring),
        }
    }

    /// Underlying repository
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Shared query cache
    #[must_use]
    pub const fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// The log for `today`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if storage or the cache fails
    pub async fn todays_log(&self, today: NaiveDate) -> AppResult<Option<HealthLog>> {
        self.cached(
            QueryKey::TodaysLog { date: today },
            self.repository.find_by_date(today),
        )
        .await
    }

    /// Logs dated `today - 6 ..= today`, ascending
    ///
    /// # Errors
    ///
    /// Returns an error if storage or the cache fails
    pub async fn weekly_logs(&self, today: NaiveDate) -> AppResult<Vec<HealthLog>> {
        let fetch = async {
            let start = today
                .checked_sub_days(Days::new(u64::from(goals::HISTORY_DAYS - 1)))
                .unwrap_or(NaiveDate::MIN);
            let logs = self.repository.list().await?;
            Ok::<_, AppError>(
                logs.into_iter()
                    .filter(|log| (start..=today).contains(&log.date))
                    .collect(),
            )
        };
        self.cached(QueryKey::WeeklyLogs { end: today }, fetch).await
    }

    /// Every log, ascending by date
    ///
    /// # Errors
    ///
    /// Returns an error if storage or the cache fails
    pub async fn all_logs(&self) -> AppResult<Vec<HealthLog>> {
        self.cached(QueryKey::AllLogs, self.repository.list()).await
    }

    /// Validate `draft` and store it as the log for `today`, updating the
    /// existing log for that day if there is one
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` listing every invalid field, or a storage error
    pub async fn save_today(
        &self,
        today: NaiveDate,
        draft: &mut HealthLogDraft,
    ) -> AppResult<HealthLog> {
        draft.validate()?;

        let saved = match self.repository.find_by_date(today).await? {
            Some(existing) => {
                self.repository
                    .update(&existing.id, &draft.to_patch()?)
                    .await?
            }
            None => self.repository.create(draft.to_new_log(today)?).await?,
        };

        self.invalidate().await?;
        info!(id = %saved.id, date = %today, "Saved today's health log");
        Ok(saved)
    }

    /// Patch a log by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no log has `id`, or a storage error
    pub async fn update_log(&self, id: &str, patch: &HealthLogPatch) -> AppResult<HealthLog> {
        let log = self.repository.update(id, patch).await?;
        self.invalidate().await?;
        Ok(log)
    }

    /// Delete a log by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no log has `id`, or a storage error
    pub async fn delete_log(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await?;
        self.invalidate().await?;
        Ok(())
    }

    /// Per-metric analysis of `log` with the configured scoring
    #[must_use]
    pub fn analyze(&self, log: &HealthLog) -> MetricAnalysis {
        self.analyzer.analyze(log)
    }

    /// Overall score of the most recent log
    ///
    /// # Errors
    ///
    /// Returns an error if storage or the cache fails
    pub async fn health_score(&self) -> AppResult<HealthScore> {
        Ok(self.aggregator.overall_score(&self.all_logs().await?))
    }

    /// Week-over-week trends; `None` with fewer than eight logs
    ///
    /// # Errors
    ///
    /// Returns an error if storage or the cache fails
    pub async fn trends(&self) -> AppResult<Option<TrendAnalysis>> {
        Ok(self.trends.analyze(&self.all_logs().await?))
    }

    /// Zero-filled chart series for the `days` ending on `today`
    ///
    /// # Errors
    ///
    /// Returns an error if storage or the cache fails
    pub async fn history(&self, today: NaiveDate, days: u32) -> AppResult<Vec<ChartPoint>> {
        Ok(chart_series(&self.all_logs().await?, today, days))
    }

    /// Dashboard read model for `today`
    ///
    /// # Errors
    ///
    /// Returns an error if storage or the cache fails
    pub async fn dashboard(&self, today: NaiveDate) -> AppResult<Dashboard> {
        let logs = self.all_logs().await?;
        let todays_log = self.todays_log(today).await?;

        Ok(Dashboard {
            date: today,
            health_score: self.aggregator.overall_score(&logs),
            metrics: todays_log.as_ref().map(|log| self.analyze(log)),
            progress: todays_log.as_ref().map(DailyProgress::from_log),
            trends: self.trends.analyze(&logs),
            todays_log,
        })
    }

    async fn cached<T, F>(&self, key: QueryKey, fetch: F) -> AppResult<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync + 'static,
        F: Future<Output = AppResult<T>> + Send,
    {
        if let Some(hit) = self.cache.get::<T>(&key).await? {
            return Ok(hit);
        }
        let value = fetch.await?;
        self.cache.set(&key, &value).await?;
        Ok(value)
    }

    async fn invalidate(&self) -> AppResult<()> {
        let removed = self.cache.invalidate_logs().await?;
        debug!(removed, "Invalidated log queries after write");
        Ok(())
    }
}
