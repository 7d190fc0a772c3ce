//! Cache Statistics Module
//!
//! Tracks lookup outcomes: exact hits, relaxed hits, misses and rejected queries.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Stats Recorder ==
/// Lookup counters, updated through `&self` so concurrent readers of the
/// cache never need exclusive access.
#[derive(Debug, Default)]
pub struct StatsRecorder {
    exact_hits: AtomicU64,
    relaxed_hits: AtomicU64,
    misses: AtomicU64,
    invalid_queries: AtomicU64,
    probes: AtomicU64,
}

impl StatsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful lookup after `relaxed` relaxation steps.
    pub fn record_hit(&self, relaxed: usize) {
        if relaxed == 0 {
            self.exact_hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.relaxed_hits.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_invalid(&self) {
        self.invalid_queries.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_probes(&self, count: usize) {
        self.probes.fetch_add(count as u64, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Returns the current counter values.
    pub fn snapshot(&self, total_entries: usize) -> CacheStats {
        CacheStats {
            exact_hits: self.exact_hits.load(Ordering::Relaxed),
            relaxed_hits: self.relaxed_hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            invalid_queries: self.invalid_queries.load(Ordering::Relaxed),
            probes: self.probes.load(Ordering::Relaxed),
            total_entries,
        }
    }
}

// == Cache Stats ==
/// Point-in-time view of the lookup counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Lookups answered by the query key itself
    pub exact_hits: u64,
    /// Lookups answered after at least one relaxation step
    pub relaxed_hits: u64,
    /// Valid lookups that found nothing
    pub misses: u64,
    /// Lookups rejected with an invalid key
    pub invalid_queries: u64,
    /// Storage probes issued across all lookups
    pub probes: u64,
    /// Current number of stored entries
    pub total_entries: usize,
}

impl CacheStats {
    pub fn hits(&self) -> u64 {
        self.exact_hits + self.relaxed_hits
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no valid lookups were made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits() + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits() as f64 / total as f64
        }
    }
}
