//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::cache::DisplayOrder;

/// Attribute priority used when `PRIORITY` is not set.
pub const DEFAULT_PRIORITY: [&str; 4] = ["id", "salesRef", "country", "underlying"];

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Attribute names, most significant first
    pub priority: Vec<String>,
    /// Attribute names used to order listings, `None` for structural order
    pub display_order: Option<Vec<String>>,
    /// Optional JSON seed table loaded at startup
    pub table_path: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `PRIORITY` - Comma-separated attribute names (default: id,salesRef,country,underlying)
    /// - `DISPLAY_ORDER` - Comma-separated attribute names for listings
    ///   (default: the priority list; empty disables it)
    /// - `TABLE_PATH` - Seed table file (default: none)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let priority = env::var("PRIORITY")
            .ok()
            .map(|v| parse_list(&v))
            .filter(|list| !list.is_empty())
            .unwrap_or(defaults.priority);

        let display_order = match env::var("DISPLAY_ORDER") {
            Ok(v) => {
                let list = parse_list(&v);
                (!list.is_empty()).then_some(list)
            }
            Err(_) => Some(priority.clone()),
        };

        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            priority,
            display_order,
            table_path: env::var("TABLE_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// The configured listing order, if any.
    pub fn display_order(&self) -> DisplayOrder {
        self.display_order
            .as_ref()
            .map(|names| DisplayOrder::new(names.iter().cloned()))
            .unwrap_or_default()
    }
}

impl Default for Config {
    fn default() -> Self {
        let priority: Vec<String> = DEFAULT_PRIORITY.iter().map(|s| s.to_string()).collect();
        Self {
            server_port: 3000,
            display_order: Some(priority.clone()),
            priority,
            table_path: None,
        }
    }
}

/// Splits a comma-separated list, dropping blank items.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.priority, DEFAULT_PRIORITY);
        assert_eq!(config.display_order.as_deref(), Some(config.priority.as_slice()));
        assert!(config.table_path.is_none());
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("PRIORITY");
        env::remove_var("DISPLAY_ORDER");
        env::remove_var("TABLE_PATH");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.priority, DEFAULT_PRIORITY);
        assert_eq!(config.display_order.as_deref(), Some(config.priority.as_slice()));
        assert!(config.table_path.is_none());
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list(" id, ,country ,"), vec!["id", "country"]);
        assert!(parse_list(" , ").is_empty());
    }

    #[test]
    fn test_display_order_from_config() {
        let config = Config {
            display_order: Some(vec!["country".to_string()]),
            ..Config::default()
        };
        assert_eq!(config.display_order().attributes(), ["country".to_string()]);

        let config = Config {
            display_order: None,
            ..Config::default()
        };
        assert!(config.display_order().attributes().is_empty());
    }
}
