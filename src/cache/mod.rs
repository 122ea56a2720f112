// ABOUTME: Query cache abstraction for stored health log reads
// ABOUTME: Defines the provider trait, query keys, and stale-time configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// In-memory LRU implementation
pub mod memory;

pub use memory::QueryCache;

use crate::errors::AppResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use vitalog_core::constants::cache::{
    CACHE_KEY_PREFIX, DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_STALE_TIME_SECS,
};

/// Cache provider trait for pluggable backend implementations
///
/// # Examples
///
/// ```rust,no_run
/// use chrono::NaiveDate;
/// use vitalog::cache::{CacheConfig, CacheProvider, QueryCache, QueryKey};
/// # async fn example() -> vitalog::errors::AppResult<()> {
/// let cache = QueryCache::new(CacheConfig::default()).await?;
/// let key = QueryKey::AllLogs;
///
/// cache.set(&key, &vec![1_u32, 2, 3]).await?;
/// let cached: Option<Vec<u32>> = cache.get(&key).await?;
/// assert_eq!(cached, Some(vec![1, 2, 3]));
///
/// // Every log query is stale after a write
/// cache.invalidate_logs().await?;
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait CacheProvider: Send + Sync + Clone {
    /// Create new cache instance with configuration
    ///
    /// # Errors
    ///
    /// Returns an error if cache initialization fails
    async fn new(config: CacheConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// Store a value under `key` for the configured stale time
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    async fn set<T: Serialize + Send + Sync>(&self, key: &QueryKey, value: &T) -> AppResult<()>;

    /// Fetch a fresh value; stale entries are dropped and read as a miss
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails
    async fn get<T: for<'de> Deserialize<'de>>(&self, key: &QueryKey) -> AppResult<Option<T>>;

    /// Remove a single entry
    ///
    /// # Errors
    ///
    /// Returns an error if invalidation fails
    async fn invalidate(&self, key: &QueryKey) -> AppResult<()>;

    /// Remove every entry whose key matches a glob pattern, returning the count
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid glob
    async fn invalidate_pattern(&self, pattern: &str) -> AppResult<u64>;

    /// Remove every log query (today's log, weekly logs, all logs)
    ///
    /// # Errors
    ///
    /// Returns an error if invalidation fails
    async fn invalidate_logs(&self) -> AppResult<u64> {
        self.invalidate_pattern(&QueryKey::logs_pattern()).await
    }

    /// Check whether a fresh entry exists
    ///
    /// # Errors
    ///
    /// Returns an error if the existence check fails
    async fn exists(&self, key: &QueryKey) -> AppResult<bool>;

    /// Time until `key` becomes stale
    ///
    /// # Errors
    ///
    /// Returns an error if the TTL check fails
    async fn ttl(&self, key: &QueryKey) -> AppResult<Option<Duration>>;

    /// Clear all cache entries
    ///
    /// # Errors
    ///
    /// Returns an error if the clear operation fails
    async fn clear_all(&self) -> AppResult<()>;
}

/// Cache configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries before LRU eviction
    pub max_entries: usize,
    /// How long an entry stays fresh
    pub stale_time: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            stale_time: Duration::from_secs(DEFAULT_STALE_TIME_SECS),
        }
    }
}

/// Cached log queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// The log for a given day, if any
    TodaysLog {
        /// Day queried
        date: NaiveDate,
    },
    /// Logs for the seven days ending on `end`
    WeeklyLogs {
        /// Last day of the window
        end: NaiveDate,
    },
    /// The full history
    AllLogs,
}

impl QueryKey {
    /// Pattern matching every log query
    #[must_use]
    pub fn logs_pattern() -> String {
        format!("{CACHE_KEY_PREFIX}*")
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TodaysLog { date } => write!(f, "{CACHE_KEY_PREFIX}todays_log:{date}"),
            Self::WeeklyLogs { end } => write!(f, "{CACHE_KEY_PREFIX}weekly_logs:{end}"),
            Self::AllLogs => write!(f, "{CACHE_KEY_PREFIX}all_logs"),
        }
    }
}
