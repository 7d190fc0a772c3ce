//! Seed Table Loader
//!
//! Populates a cache from a JSON file during startup, before the cache is
//! shared with request handlers.
//!
//! The file holds an array of entries:
//!
//! ```json
//! [
//!   {"key": {"id": "12345", "salesRef": null, "country": "HK", "underlying": ".HSI"},
//!    "value": {"openCommission": 0.032, "settlementDateOffset": 0}}
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::cache::{FallbackCache, Key, Payload};
use crate::error::{CacheError, Result};

/// One stored entry as it appears in a seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedEntry {
    pub key: Key,
    pub value: Payload,
}

/// Parses seed entries from JSON text.
pub fn parse_table(json: &str) -> Result<Vec<SeedEntry>> {
    serde_json::from_str(json).map_err(|e| CacheError::Load(e.to_string()))
}

/// Reads the seed file at `path` and puts every entry into `cache`.
///
/// Returns the number of entries read. Later entries overwrite earlier ones
/// with an identical key.
pub fn load_table(path: &Path, cache: &mut FallbackCache<Payload>) -> Result<usize> {
    let raw = fs::read_to_string(path)
        .map_err(|e| CacheError::Load(format!("{}: {}", path.display(), e)))?;
    let entries = parse_table(&raw)?;
    let count = entries.len();

    for entry in entries {
        cache.put(entry.key, entry.value);
    }

    info!(
        "Loaded {} entries from {} ({} distinct keys)",
        count,
        path.display(),
        cache.len()
    );
    Ok(count)
}
