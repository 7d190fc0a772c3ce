//! Cache Module
//!
//! Attribute-keyed storage with fallback to less specific entries.

mod key;
mod ordering;
mod partial;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use key::{Key, Scalar, Slot};
pub use ordering::DisplayOrder;
pub use partial::PartialMatchKey;
pub use stats::{CacheStats, StatsRecorder};
pub use store::{FallbackCache, Matched};

/// Value stored per key by the server: field name to arbitrary JSON value.
pub type Payload = std::collections::BTreeMap<String, serde_json::Value>;
