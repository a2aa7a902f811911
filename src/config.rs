//! Application configuration loading from environment variables.
//!
//! All configuration is loaded from the environment at startup via standard `std::env::var`,
//! after `dotenvy` has had a chance to populate it from a local `.env` file.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `RUST_LOG`: Logging level (default: "info,countryinfo=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 8080)
//! - `REST_COUNTRIES_URL`: Base URL of the country-metadata service
//! - `COUNTRIES_NOW_URL`: Base URL of the cities/population service
//! - `UPSTREAM_TIMEOUT_SECONDS`: Timeout applied to every upstream call (default: 5)
//! - `UPSTREAM_USER_AGENT`: User-Agent sent upstream (default: "countryinfo/<version>")

use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_REST_COUNTRIES_URL: &str = "http://129.241.150.113:8080/v3.1/";
pub const DEFAULT_COUNTRIES_NOW_URL: &str = "http://129.241.150.113:3500/api/v0.1/";

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Country-metadata service base URL, always ending with `/`
    pub rest_countries_url: String,

    /// Cities/population service base URL, always ending with `/`
    pub countries_now_url: String,

    /// Per-call upstream timeout in seconds
    pub upstream_timeout_seconds: u64,

    /// HTTP User-Agent for upstream requests
    pub upstream_user_agent: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed to the
    /// expected type, or if the timeout is zero.
    pub fn from_env() -> anyhow::Result<Self> {
        let upstream_timeout_seconds = env_or("UPSTREAM_TIMEOUT_SECONDS", 5_u64)?;
        if upstream_timeout_seconds == 0 {
            anyhow::bail!("UPSTREAM_TIMEOUT_SECONDS must be greater than zero");
        }

        Ok(Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 8080)?,
            rest_countries_url: normalize_base_url(&env_or(
                "REST_COUNTRIES_URL",
                DEFAULT_REST_COUNTRIES_URL.to_string(),
            )?),
            countries_now_url: normalize_base_url(&env_or(
                "COUNTRIES_NOW_URL",
                DEFAULT_COUNTRIES_NOW_URL.to_string(),
            )?),
            upstream_timeout_seconds,
            upstream_user_agent: env_or(
                "UPSTREAM_USER_AGENT",
                format!("countryinfo/{}", env!("CARGO_PKG_VERSION")),
            )?,
        })
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds)
    }
}

/// Ensure a base URL ends with exactly one `/` so paths can be appended.
pub fn normalize_base_url(url: &str) -> String {
    format!("{}/", url.trim().trim_end_matches('/'))
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
