// ABOUTME: In-memory query cache with LRU eviction and stale-time expiry
// ABOUTME: Expired entries are dropped lazily on read; no background task
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{CacheConfig, CacheProvider, QueryKey};
use crate::errors::{pattern_error, AppResult};
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

/// Cached query result with expiration
#[derive(Debug, Clone)]
struct CacheEntry {
    data: Vec<u8>,
    // None when the stale time reaches past what `Instant` can represent
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn new(data: Vec<u8>, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now().checked_add(ttl),
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() >= expires_at)
    }

    fn remaining_ttl(&self) -> Option<Duration> {
        self.expires_at.map_or(Some(Duration::MAX), |expires_at| {
            expires_at.checked_duration_since(Instant::now())
        })
    }
}

/// In-memory query cache
///
/// Clones share one store, so a service and its callers see the same
/// entries. `LruCache::get` reorders entries and therefore needs the write
/// lock even for reads.
#[derive(Clone)]
pub struct QueryCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
    stale_time: Duration,
}

impl QueryCache {
    /// Capacity used when the configuration asks for zero entries
    const FALLBACK_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Build a cache synchronously
    #[must_use]
    pub fn with_config(config: &CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(Self::FALLBACK_CAPACITY);
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
            stale_time: config.stale_time,
        }
    }

    /// Number of entries currently held, fresh or not
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// True when nothing is cached
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl CacheProvider for QueryCache {
    async fn new(config: CacheConfig) -> AppResult<Self> {
        Ok(Self::with_config(&config))
    }

    async fn set<T: Serialize + Send + Sync>(&self, key: &QueryKey, value: &T) -> AppResult<()> {
        let serialized = serde_json::to_vec(value)?;
        let entry = CacheEntry::new(serialized, self.stale_time);

        // LruCache handles eviction automatically on push
        self.store.write().await.push(key.to_string(), entry);
        debug!(key = %key, "Cached query result");

        Ok(())
    }

    async fn get<T: for<'de> Deserialize<'de>>(&self, key: &QueryKey) -> AppResult<Option<T>> {
        let cache_key = key.to_string();
        let mut store = self.store.write().await;

        let Some(entry) = store.get(&cache_key) else {
            drop(store);
            debug!(key = %cache_key, "Query cache miss");
            return Ok(None);
        };

        if entry.is_expired() {
            store.pop(&cache_key);
            drop(store);
            debug!(key = %cache_key, "Query cache entry stale");
            return Ok(None);
        }

        let value: T = serde_json::from_slice(&entry.data)?;
        drop(store);
        debug!(key = %cache_key, "Query cache hit");
        Ok(Some(value))
    }

    async fn invalidate(&self, key: &QueryKey) -> AppResult<()> {
        self.store.write().await.pop(&key.to_string());
        debug!(key = %key, "Invalidated query");
        Ok(())
    }

    async fn invalidate_pattern(&self, pattern: &str) -> AppResult<u64> {
        let glob_pattern =
            glob::Pattern::new(pattern).map_err(|e| pattern_error(pattern, e))?;

        let mut store = self.store.write().await;

        // Collect keys to remove (can't modify while iterating)
        let keys_to_remove: Vec<String> = store
            .iter()
            .filter(|(k, _)| glob_pattern.matches(k))
            .map(|(k, _)| k.clone())
            .collect();

        for key in &keys_to_remove {
            store.pop(key);
        }
        drop(store);

        let removed = keys_to_remove.len() as u64;
        debug!(pattern, removed, "Invalidated queries by pattern");
        Ok(removed)
    }

    async fn exists(&self, key: &QueryKey) -> AppResult<bool> {
        let cache_key = key.to_string();
        let mut store = self.store.write().await;

        let fresh = match store.peek(&cache_key) {
            Some(entry) if entry.is_expired() => {
                store.pop(&cache_key);
                false
            }
            Some(_) => true,
            None => false,
        };
        drop(store);

        Ok(fresh)
    }

    async fn ttl(&self, key: &QueryKey) -> AppResult<Option<Duration>> {
        let store = self.store.read().await;

        // Use peek to avoid updating LRU order
        let ttl = store
            .peek(&key.to_string())
            .filter(|entry| !entry.is_expired())
            .and_then(CacheEntry::remaining_ttl);
        drop(store);

        Ok(ttl)
    }

    async fn clear_all(&self) -> AppResult<()> {
        self.store.write().await.clear();
        debug!("Cleared query cache");
        Ok(())
    }
}
