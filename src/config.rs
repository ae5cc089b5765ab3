//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default catalog API root
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root URL of the catalog API, without a trailing slash
    pub api_base: String,
    /// Response cache TTL in seconds (also the sweep period)
    pub cache_ttl: u64,
    /// Number of areas listed per `map` page
    pub page_size: u32,
    /// Per-request HTTP timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_API_BASE` - Catalog API root (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_CACHE_TTL_SECS` - Cache TTL in seconds (default: 5)
    /// - `POKEDEX_PAGE_SIZE` - Areas per page (default: 20)
    /// - `POKEDEX_HTTP_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base: env::var("POKEDEX_API_BASE")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base),
            cache_ttl: parse_var("POKEDEX_CACHE_TTL_SECS").unwrap_or(defaults.cache_ttl),
            page_size: parse_var::<u32>("POKEDEX_PAGE_SIZE")
                .filter(|&size| size > 0)
                .unwrap_or(defaults.page_size),
            http_timeout: parse_var("POKEDEX_HTTP_TIMEOUT_SECS").unwrap_or(defaults.http_timeout),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            cache_ttl: 5,
            page_size: 20,
            http_timeout: 10,
        }
    }
}
