//! Request DTOs for the fallback cache API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::cache::{Key, Payload};

/// Request body for storing an entry (PUT /entries)
///
/// # Fields
/// - `key`: Attribute slots; `null` marks a wildcard slot
/// - `value`: Payload stored for the key
#[derive(Debug, Clone, Deserialize)]
pub struct PutRequest {
    /// The entry key
    pub key: Key,
    /// The payload to store
    #[serde(default)]
    pub value: Payload,
}

impl PutRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key must have at least one attribute".to_string());
        }
        if self.key.as_map().keys().any(|name| name.trim().is_empty()) {
            return Some("Attribute names cannot be blank".to_string());
        }
        None
    }
}

/// Request body for lookups (POST /match, POST /explain)
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    /// The query key
    pub key: Key,
}
