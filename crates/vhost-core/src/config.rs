//! Configuration structures for vhost clients.
//!
//! [`VhostClientConfig`] is the serializable form of everything needed to
//! reach a vhoster API server. It is typically loaded from a JSON file owned
//! by the calling tool and handed to the client constructor.

use crate::client::ClientConfig;
use crate::Error;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Configuration for a vhost client instance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct VhostClientConfig {
    /// Base URL of the vhoster API server, including any path prefix
    #[validate(url)]
    pub api_url: String,

    /// Request timeout in seconds; unset means no timeout
    #[validate(range(min = 1, max = 300))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Connect timeout in seconds
    #[validate(range(min = 1, max = 60))]
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

const fn default_connect_timeout_secs() -> u64 {
    crate::client::DEFAULT_CONNECT_TIMEOUT
}

impl VhostClientConfig {
    /// Create a new client configuration for the given API URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the URL is invalid.
    pub fn new(api_url: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            api_url: api_url.into(),
            request_timeout_secs: None,
            connect_timeout_secs: default_connect_timeout_secs(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] on malformed JSON, unknown fields, or
    /// values out of range.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = Some(seconds);
        self
    }

    /// Set connect timeout in seconds.
    #[must_use]
    pub const fn with_connect_timeout(mut self, seconds: u64) -> Self {
        self.connect_timeout_secs = seconds;
        self
    }

    /// Get the request timeout as a Duration, if set.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Parse the API URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_api_url(&self) -> Result<Url, Error> {
        Ok(Url::parse(&self.api_url)?)
    }

    /// Transport settings derived from this configuration.
    #[must_use]
    pub fn http_config(&self) -> ClientConfig {
        let config =
            ClientConfig::new().with_connect_timeout(Duration::from_secs(self.connect_timeout_secs));
        match self.timeout() {
            Some(timeout) => config.with_timeout(timeout),
            None => config,
        }
    }
}
