//! Response DTOs for the fallback cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{CacheStats, Key, Payload};

/// A stored entry (GET /entries, explain candidates)
#[derive(Debug, Clone, Serialize)]
pub struct EntryView {
    pub key: Key,
    pub value: Payload,
}

impl EntryView {
    pub fn new(key: &Key, value: &Payload) -> Self {
        Self {
            key: key.clone(),
            value: value.clone(),
        }
    }
}

/// Response body for storing an entry (PUT /entries)
#[derive(Debug, Clone, Serialize)]
pub struct PutResponse {
    /// Success message
    pub message: String,
    /// The key that was stored
    pub key: Key,
    /// Whether an existing entry was overwritten
    pub replaced: bool,
}

impl PutResponse {
    pub fn new(key: Key, replaced: bool) -> Self {
        let verb = if replaced { "replaced" } else { "stored" };
        Self {
            message: format!("Entry {} {}", key, verb),
            key,
            replaced,
        }
    }
}

/// Response body for a successful lookup (POST /match)
#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    /// The key that was asked for
    pub query: Key,
    /// The stored key that answered it
    pub matched_key: Key,
    /// Attributes wildcarded before the hit (0 = exact)
    pub relaxed: usize,
    /// The stored payload
    pub value: Payload,
}

/// One candidate key probed by a lookup
#[derive(Debug, Clone, Serialize)]
pub struct ProbeView {
    pub key: Key,
    /// Whether storage holds this exact key
    pub stored: bool,
}

/// Response body for POST /explain
#[derive(Debug, Clone, Serialize)]
pub struct ExplainResponse {
    pub query: Key,
    /// Probes in the order a lookup issues them
    pub probes: Vec<ProbeView>,
    /// Stored entries that partially match the query
    pub candidates: Vec<EntryView>,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        let hit_rate = stats.hit_rate();
        Self { stats, hit_rate }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
