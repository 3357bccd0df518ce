//! Configuration for the upstream directory client.
//!
//! The upstream base URL and request timeout are injected into the client
//! at construction rather than compiled in. Values come from the
//! environment with sensible defaults, so a plain `UpstreamConfig::from_env()`
//! works out of the box against the public demo API.

use std::env;
use std::time::Duration;

use crate::error::{DirectoryError, DirectoryResult};

/// Environment variable holding the upstream base URL.
pub const ENV_BASE_URL: &str = "UPSTREAM_BASE_URL";

/// Environment variable holding the upstream request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "UPSTREAM_TIMEOUT_SECS";

const DEFAULT_BASE_URL: &str = "https://dummy.restapiexample.com/api/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Configuration for reaching the upstream employee directory.
///
/// # Example
///
/// ```
/// use employee_directory::config::UpstreamConfig;
/// use std::time::Duration;
///
/// let config = UpstreamConfig::default();
/// assert_eq!(config.timeout, Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    /// Base URL of the upstream REST API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout; expiry surfaces as a transient failure.
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl UpstreamConfig {
    /// Builds a configuration from the environment.
    ///
    /// Reads [`ENV_BASE_URL`] and [`ENV_TIMEOUT_SECS`], falling back to the
    /// defaults for any variable that is unset.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::InvalidConfig`] if the timeout variable is
    /// set but is not a positive integer number of seconds.
    pub fn from_env() -> DirectoryResult<Self> {
        let base_url = env::var(ENV_BASE_URL)
            .map(|url| normalize_base_url(&url))
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = match env::var(ENV_TIMEOUT_SECS) {
            Ok(raw) => parse_timeout_secs(&raw)?,
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self { base_url, timeout })
    }

    /// Creates a configuration for a specific base URL with the default timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            ..Self::default()
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

fn parse_timeout_secs(raw: &str) -> DirectoryResult<Duration> {
    let secs: u64 = raw.trim().parse().map_err(|_| DirectoryError::InvalidConfig {
        name: ENV_TIMEOUT_SECS.to_string(),
        message: format!("expected a number of seconds, got '{}'", raw),
    })?;
    if secs == 0 {
        return Err(DirectoryError::InvalidConfig {
            name: ENV_TIMEOUT_SECS.to_string(),
            message: "timeout must be at least one second".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}
