//! Fallback Cache - attribute-keyed lookup with wildcard fallback
//!
//! Resolves a fully specified query key to the most specific stored entry by
//! wildcarding its least significant attributes one at a time.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;

pub use api::AppState;
pub use cache::{FallbackCache, Key, Slot};
pub use config::Config;
pub use error::{CacheError, Result};
