//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `FOOD_LIST_HOST` - Bind address (default: 0.0.0.0)
//! - `FOOD_LIST_PORT` - Listen port (default: 8000)
//! - `FOOD_SUMMARY_ENDPOINT` - URL receiving food summaries
//! - `FOOD_CATALOG_PATH` - JSON catalog file loaded at startup
//! - `FOOD_SESSION_IDLE_SECS` - Idle seconds before a session is dropped (default: 1800)
//! - `FOOD_MAX_SESSIONS` - Upper bound on live sessions (default: 10000)

use crate::food::models::DEFAULT_SUMMARY_ENDPOINT;
use crate::food::SessionLimits;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Food list service configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Remote endpoint for food summaries
    pub summary_endpoint: String,
    /// Explicit catalog file, if any
    pub catalog_path: Option<PathBuf>,
    /// Idle timeout and capacity of the session table
    pub session_limits: SessionLimits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            summary_endpoint: DEFAULT_SUMMARY_ENDPOINT.to_string(),
            catalog_path: None,
            session_limits: SessionLimits::default(),
        }
    }
}

impl Config {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup("FOOD_LIST_HOST") {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|e| ConfigError::InvalidEnvVar("FOOD_LIST_HOST".into(), e.to_string()))?,
            None => defaults.host,
        };

        let port = match lookup("FOOD_LIST_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvVar("FOOD_LIST_PORT".into(), e.to_string()))?,
            None => defaults.port,
        };

        let summary_endpoint = match lookup("FOOD_SUMMARY_ENDPOINT") {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => url,
            Some(url) => {
                return Err(ConfigError::InvalidEnvVar(
                    "FOOD_SUMMARY_ENDPOINT".into(),
                    format!("not an http(s) URL: {url}"),
                ))
            }
            None => defaults.summary_endpoint,
        };

        let catalog_path = lookup("FOOD_CATALOG_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let idle_ttl = match lookup("FOOD_SESSION_IDLE_SECS") {
            Some(raw) => raw.parse::<u64>().map(Duration::from_secs).map_err(|e| {
                ConfigError::InvalidEnvVar("FOOD_SESSION_IDLE_SECS".into(), e.to_string())
            })?,
            None => defaults.session_limits.idle_ttl,
        };

        let max_sessions = match lookup("FOOD_MAX_SESSIONS") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                Ok(_) => {
                    return Err(ConfigError::InvalidEnvVar(
                        "FOOD_MAX_SESSIONS".into(),
                        "must be at least 1".into(),
                    ))
                }
                Err(e) => {
                    return Err(ConfigError::InvalidEnvVar(
                        "FOOD_MAX_SESSIONS".into(),
                        e.to_string(),
                    ))
                }
            },
            None => defaults.session_limits.max_sessions,
        };

        Ok(Self {
            host,
            port,
            summary_endpoint,
            catalog_path,
            session_limits: SessionLimits {
                idle_ttl,
                max_sessions,
            },
        })
    }

    /// Socket address the server listens on
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("FOOD_LIST_HOST", "127.0.0.1"),
            ("FOOD_LIST_PORT", "3000"),
            ("FOOD_SUMMARY_ENDPOINT", "http://localhost:9000/food_summary"),
            ("FOOD_CATALOG_PATH", "menu.json"),
            ("FOOD_SESSION_IDLE_SECS", "60"),
            ("FOOD_MAX_SESSIONS", "25"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.summary_endpoint, "http://localhost:9000/food_summary");
        assert_eq!(config.catalog_path, Some(PathBuf::from("menu.json")));
        assert_eq!(config.session_limits.idle_ttl, Duration::from_secs(60));
        assert_eq!(config.session_limits.max_sessions, 25);
    }

    #[test]
    fn test_invalid_values() {
        assert!(Config::from_lookup(lookup(&[("FOOD_LIST_PORT", "eighty")])).is_err());
        assert!(Config::from_lookup(lookup(&[("FOOD_SUMMARY_ENDPOINT", "ftp://x")])).is_err());
        assert!(Config::from_lookup(lookup(&[("FOOD_MAX_SESSIONS", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("FOOD_SESSION_IDLE_SECS", "-5")])).is_err());
    }
}
