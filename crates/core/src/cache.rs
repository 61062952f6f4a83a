//! Analytics result caching using Moka.
//!
//! Memoizes budget reports and timeline analytics keyed on a hash of the
//! full input (data, reference time and windows), so a hit always returns
//! exactly what a fresh computation would.

use chrono::{DateTime, Utc};
use filmflow_shared::config::AnalyticsConfig;
use moka::sync::Cache;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::budget::{BudgetBook, BudgetReport};
use crate::timeline::{TimelineAnalytics, TimelineBoard};
use crate::windows::AnalyticsWindows;

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 64;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// A computed value and whether it came from the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cached<T> {
    /// The result.
    pub value: T,
    /// `true` on a cache hit.
    pub cached: bool,
}

#[derive(Serialize)]
struct BudgetKey<'a> {
    book: &'a BudgetBook,
    now: DateTime<Utc>,
    forecast_days: u32,
    windows: &'a AnalyticsWindows,
}

#[derive(Serialize)]
struct TimelineKey<'a> {
    board: &'a TimelineBoard,
    now: DateTime<Utc>,
    windows: &'a AnalyticsWindows,
}

/// Cache for analytics results.
///
/// Cheap to clone; clones share the same storage.
#[derive(Clone)]
pub struct AnalyticsCache {
    budget: Cache<String, Arc<BudgetReport>>,
    timeline: Cache<String, Arc<TimelineAnalytics>>,
}

impl AnalyticsCache {
    /// Creates a cache with default settings (64 entries per kind, 5 minute TTL).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a cache with custom capacity (per result kind) and TTL.
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        Self {
            budget: build_cache(max_capacity, ttl_secs),
            timeline: build_cache(max_capacity, ttl_secs),
        }
    }

    /// Creates a cache from the analytics configuration section.
    #[must_use]
    pub fn from_config(config: &AnalyticsConfig) -> Self {
        Self::with_config(config.cache_capacity, config.cache_ttl_secs)
    }

    /// Builds a budget report, returning a cached copy if the same input was
    /// seen before.
    #[must_use]
    pub fn budget_report(
        &self,
        book: &BudgetBook,
        now: DateTime<Utc>,
        forecast_days: u32,
        windows: &AnalyticsWindows,
    ) -> Cached<BudgetReport> {
        let key = cache_key(&BudgetKey {
            book,
            now,
            forecast_days,
            windows,
        });

        lookup_or_compute(&self.budget, key, || {
            BudgetReport::build(book, now, forecast_days, windows)
        })
    }

    /// Computes timeline analytics, returning a cached copy if the same input
    /// was seen before.
    #[must_use]
    pub fn timeline_analytics(
        &self,
        board: &TimelineBoard,
        now: DateTime<Utc>,
        windows: &AnalyticsWindows,
    ) -> Cached<TimelineAnalytics> {
        let key = cache_key(&TimelineKey {
            board,
            now,
            windows,
        });

        lookup_or_compute(&self.timeline, key, || board.analytics_with(now, windows))
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.budget.invalidate_all();
        self.timeline.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.budget.entry_count() + self.timeline.entry_count()
    }

    /// Runs pending maintenance so counts and invalidations take effect.
    pub fn run_pending_tasks(&self) {
        self.budget.run_pending_tasks();
        self.timeline.run_pending_tasks();
    }
}

impl Default for AnalyticsCache {
    fn default() -> Self {
        Self::new()
    }
}

fn build_cache<V: Clone + Send + Sync + 'static>(capacity: u64, ttl_secs: u64) -> Cache<String, V> {
    Cache::builder()
        .max_capacity(capacity)
        .time_to_live(Duration::from_secs(ttl_secs))
        .build()
}

/// SHA-256 over the JSON encoding of the input. `None` if it cannot be
/// encoded, in which case the caller computes without caching.
fn cache_key<K: Serialize>(input: &K) -> Option<String> {
    match serde_json::to_vec(input) {
        Ok(bytes) => {
            let mut hasher = Sha256::new();
            hasher.update(&bytes);
            Some(format!("{:x}", hasher.finalize()))
        }
        Err(e) => {
            warn!(error = %e, "Failed to encode analytics cache key, bypassing cache");
            None
        }
    }
}

fn lookup_or_compute<T: Clone + Send + Sync + 'static>(
    cache: &Cache<String, Arc<T>>,
    key: Option<String>,
    compute: impl FnOnce() -> T,
) -> Cached<T> {
    let Some(key) = key else {
        return Cached {
            value: compute(),
            cached: false,
        };
    };

    if let Some(hit) = cache.get(&key) {
        return Cached {
            value: (*hit).clone(),
            cached: true,
        };
    }

    let value = compute();
    cache.insert(key, Arc::new(value.clone()));

    Cached {
        value,
        cached: false,
    }
}
