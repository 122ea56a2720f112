// ABOUTME: Cache-related constants for stale time and capacity of the query cache
// ABOUTME: Defaults mirror the mobile client's five minute query freshness window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default maximum entries for the in-memory query cache
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 256;

/// Query results are considered fresh for this long (5 minutes)
pub const DEFAULT_STALE_TIME_SECS: u64 = 300;

/// Cache key prefix for namespacing
pub const CACHE_KEY_PREFIX: &str = "vitalog:query:";
