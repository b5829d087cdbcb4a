//! Client configuration and construction-time validation
//!
//! Configuration is validated once, before any network activity, and is
//! immutable afterwards. The two mistakes the validation is aimed at are
//! a missing key and the `your-api-key-here` placeholder that ships in
//! documentation snippets.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Default API host, without a version prefix.
pub const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Placeholder key commonly left in copy-pasted snippets, rejected
/// case-insensitively.
const PLACEHOLDER_API_KEY: &str = "your-api-key-here";

/// Errors raised while validating a [`ClientConfig`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API key is required. Get one for free at https://openrouteservice.org/sign-up/")]
    MissingApiKey,

    #[error("Please replace the placeholder API key with your actual openrouteservice API key. Get one for free at https://openrouteservice.org/sign-up/")]
    PlaceholderApiKey,

    #[error("Request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("Invalid header '{0}': names and values must be valid HTTP header text")]
    InvalidHeader(String),
}

/// Configuration for the openrouteservice client
///
/// # Example
///
/// ```ignore
/// use ors_core::ClientConfig;
///
/// let config = ClientConfig::new("my-api-key")
///     .with_timeout_ms(10_000)
///     .with_header("user-agent", "my-app/1.0");
/// config.validate()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// API key sent as the raw `Authorization` header value.
    pub api_key: String,

    /// API host. Version prefixes are appended per endpoint family.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Extra headers attached to every request. Per-call headers take
    /// precedence over these.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl ClientConfig {
    /// Create a configuration with the default base URL and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            headers: HashMap::new(),
        }
    }

    /// Override the API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Add a client-level header sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an empty API key, the well-known
    /// placeholder key (any casing), or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        if self.api_key.to_lowercase() == PLACEHOLDER_API_KEY {
            return Err(ConfigError::PlaceholderApiKey);
        }

        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(())
    }
}

/// Upstream API version
///
/// The directions, matrix, isochrones, snap and export families live
/// under a `/v2` prefix; geocoding, POIs, optimization and elevation
/// still use the unprefixed v1 paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    /// URL path prefix for this version.
    pub fn prefix(self) -> &'static str {
        match self {
            ApiVersion::V1 => "",
            ApiVersion::V2 => "/v2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = ClientConfig::new("abc123");
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_empty_api_key() {
        let config = ClientConfig::new("");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn test_whitespace_api_key() {
        let config = ClientConfig::new("   ");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn test_placeholder_api_key() {
        let config = ClientConfig::new("your-api-key-here");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PlaceholderApiKey)
        ));
    }

    #[test]
    fn test_placeholder_api_key_any_casing() {
        for key in ["YOUR-API-KEY-HERE", "Your-Api-Key-Here", "yOuR-aPi-KeY-hErE"] {
            let config = ClientConfig::new(key);
            assert!(matches!(
                config.validate(),
                Err(ConfigError::PlaceholderApiKey)
            ));
        }
    }

    #[test]
    fn test_zero_timeout() {
        let config = ClientConfig::new("abc123").with_timeout_ms(0);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTimeout)));
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::new("abc123")
            .with_base_url("http://localhost:8080")
            .with_timeout_ms(5_000)
            .with_header("x-test", "1");

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_ms, 5_000);
        assert_eq!(config.headers.get("x-test"), Some(&"1".to_string()));
    }

    #[test]
    fn test_version_prefixes() {
        assert_eq!(ApiVersion::V1.prefix(), "");
        assert_eq!(ApiVersion::V2.prefix(), "/v2");
    }
}
