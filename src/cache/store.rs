//! Cache Store Module
//!
//! Exact-key storage with a deterministic fallback search over wildcarded keys.

use std::collections::HashMap;
use std::fmt::Write as _;

use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::{CacheStats, DisplayOrder, Key, PartialMatchKey, StatsRecorder};
use crate::error::{CacheError, Result};

// == Matched ==
/// A successful lookup.
#[derive(Debug, PartialEq)]
pub struct Matched<'a, V> {
    /// The stored key that answered the query
    pub key: &'a Key,
    /// The stored value
    pub value: &'a V,
    /// Number of attributes wildcarded before the hit (0 = exact)
    pub relaxed: usize,
}

// == Fallback Cache ==
/// Attribute-keyed table resolving queries to their most specific entry.
///
/// The priority list runs from most to least significant attribute. A lookup
/// first probes the query itself, then repeatedly sets the least significant
/// remaining priority attribute to unspecified and probes again, stopping at
/// the first stored key. The first attribute is never relaxed, so a
/// lookup costs at most `priority.len()` probes.
///
/// Lookups take `&self`. Once loading is done the cache can be shared for
/// reading without locks; interleaving `put` with lookups needs an external
/// `RwLock` (see [`AppState`](crate::api::AppState)).
#[derive(Debug)]
pub struct FallbackCache<V> {
    /// Exact-key storage
    entries: HashMap<Key, V>,
    /// Attribute names, most significant first
    priority: Vec<String>,
    /// Ordering for listings
    display_order: DisplayOrder,
    /// Lookup statistics
    stats: StatsRecorder,
}

impl<V> FallbackCache<V> {
    // == Constructor ==
    /// Creates an empty cache for the given priority list.
    ///
    /// Fails with `InvalidPriority` if the list is empty or repeats a name.
    pub fn new<I, S>(priority: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let priority: Vec<String> = priority.into_iter().map(Into::into).collect();
        if priority.is_empty() {
            return Err(CacheError::InvalidPriority(
                "at least one attribute is required".to_string(),
            ));
        }

        let duplicate = priority
            .iter()
            .enumerate()
            .find_map(|(i, name)| priority[..i].contains(name).then_some(name));
        if let Some(dup) = duplicate {
            return Err(CacheError::InvalidPriority(format!(
                "attribute '{}' listed more than once",
                dup
            )));
        }

        Ok(Self {
            entries: HashMap::new(),
            priority,
            display_order: DisplayOrder::default(),
            stats: StatsRecorder::new(),
        })
    }

    /// Installs the ordering used by [`entries`](Self::entries) and [`render`](Self::render).
    pub fn with_display_order(mut self, order: DisplayOrder) -> Self {
        self.display_order = order;
        self
    }

    pub fn priority(&self) -> &[String] {
        &self.priority
    }

    // == Put ==
    /// Stores `value` under `key`, replacing any previous value for an
    /// identical key. Any key shape is accepted; unspecified slots make the
    /// entry a fallback for the queries that relax down to it.
    pub fn put(&mut self, key: Key, value: V) -> Option<V> {
        debug!(key = %key, "put");
        self.entries.insert(key, value)
    }

    /// Exact lookup, no relaxation.
    pub fn get(&self, key: &Key) -> Option<&V> {
        self.entries.get(key)
    }

    // == Match ==
    /// Resolves `query` to the most specific stored value.
    ///
    /// `Ok(None)` means no entry exists at any relaxation level. An
    /// `InvalidKey` error means the query lacks a priority attribute slot.
    pub fn match_key(&self, query: &Key) -> Result<Option<&V>> {
        Ok(self.match_entry(query)?.map(|m| m.value))
    }

    /// Like [`match_key`](Self::match_key), also reporting the stored key
    /// and how many attributes were relaxed to reach it.
    pub fn match_entry(&self, query: &Key) -> Result<Option<Matched<'_, V>>> {
        if let Err(err) = self.validate(query) {
            self.stats.record_invalid();
            return Err(err);
        }

        let mut candidate = query.clone();
        let mut remaining = self.priority.len();
        let mut probes = 0;

        let found = loop {
            probes += 1;
            if let Some((key, value)) = self.entries.get_key_value(&candidate) {
                break Some(Matched {
                    key,
                    value,
                    relaxed: self.priority.len() - remaining,
                });
            }
            if remaining <= 1 {
                break None;
            }
            remaining -= 1;
            candidate = candidate.with_unspecified(&self.priority[remaining])?;
        };

        self.stats.record_probes(probes);
        match &found {
            Some(m) => {
                debug!(query = %query, matched = %m.key, relaxed = m.relaxed, "match hit");
                self.stats.record_hit(m.relaxed);
            }
            None => {
                debug!(query = %query, probes, "no match");
                self.stats.record_miss();
            }
        }
        Ok(found)
    }

    // == Probe Sequence ==
    /// Candidate keys a lookup for `query` probes, most specific first.
    pub fn probe_sequence(&self, query: &Key) -> Result<Vec<Key>> {
        self.validate(query)?;

        let mut probes = Vec::with_capacity(self.priority.len());
        let mut candidate = query.clone();
        for name in self.priority[1..].iter().rev() {
            let next = candidate.with_unspecified(name)?;
            probes.push(candidate);
            candidate = next;
        }
        probes.push(candidate);
        Ok(probes)
    }

    /// Stored entries that partially match `query`, in display order.
    ///
    /// Diagnostic only. Partial matching is looser than the fallback search
    /// and may list entries a lookup would never reach.
    pub fn candidates(&self, query: &Key) -> Vec<(&Key, &V)> {
        let probe = PartialMatchKey::new(query);
        let mut found: Vec<_> = self
            .entries
            .iter()
            .filter(|(key, _)| probe.matches(&PartialMatchKey::new(key)))
            .collect();
        found.sort_by(|a, b| self.display_order.sort_cmp(a.0, b.0));
        found
    }

    // == Listing ==
    /// Every stored entry, in display order.
    pub fn entries(&self) -> Vec<(&Key, &V)> {
        let mut all: Vec<_> = self.entries.iter().collect();
        all.sort_by(|a, b| self.display_order.sort_cmp(a.0, b.0));
        all
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn validate(&self, query: &Key) -> Result<()> {
        if query.has_all(self.priority.as_slice()) {
            return Ok(());
        }
        let missing: Vec<&str> = self
            .priority
            .iter()
            .filter(|name| !query.has_attribute(name))
            .map(String::as_str)
            .collect();
        warn!(query = %query, ?missing, "rejected query key");
        Err(CacheError::InvalidKey(format!(
            "missing attribute slot(s): {}",
            missing.join(", ")
        )))
    }
}

impl<V: Serialize> FallbackCache<V> {
    // == Render ==
    /// Human-readable dump of the whole table, one entry per line.
    pub fn render(&self) -> String {
        let mut out = String::from("{\n");
        let entries = self.entries();
        for (i, (key, value)) in entries.iter().enumerate() {
            let value = serde_json::to_string(value)
                .unwrap_or_else(|e| format!("<unserializable: {}>", e));
            let _ = write!(out, "{}:{}", key, value);
            if i + 1 < entries.len() {
                out.push(',');
            }
            out.push('\n');
        }
        out.push('}');
        out
    }
}
