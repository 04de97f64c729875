//! Application configuration loading from environment variables.
//!
//! All configuration is loaded from the environment at startup via `std::env::var`,
//! after `.env` has been merged in by `dotenvy`.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `RUST_LOG`: Logging level (default: "info,bluealert=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `GEOJSON_PATH`: GeoJSON feature collection drawn on the map (default: "./public/india.json")
//! - `LOADING_DELAY_MS`: How long the dashboard shows its loading screen after startup (default: 1000)
//! - `CARDS_PATH`: JSON card deck replacing the built-in alert cards
//! - `RISK_TABLE_PATH`: JSON risk table replacing the built-in state buckets

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// GeoJSON feature collection drawn on the map and served at `/india.json`
    pub geojson_path: PathBuf,

    /// Loading screen duration in milliseconds
    pub loading_delay_ms: u64,

    /// Optional card deck override
    pub cards_path: Option<PathBuf>,

    /// Optional risk table override
    pub risk_table_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed to the
    /// expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 3000)?,
            geojson_path: env_or("GEOJSON_PATH", PathBuf::from("./public/india.json"))?,
            loading_delay_ms: env_or("LOADING_DELAY_MS", 1000)?,
            cards_path: env_optional("CARDS_PATH"),
            risk_table_path: env_optional("RISK_TABLE_PATH"),
        })
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load an optional path, treating an empty value as unset.
fn env_optional(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

/// Load an environment variable with a default value.
///
/// Returns the parsed environment variable if set, otherwise returns the default.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
