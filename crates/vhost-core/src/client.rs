//! HTTP transport configuration.
//!
//! The vhost client talks to exactly one server and reuses a single
//! connection for every call, so the pool is sized accordingly. No request
//! timeout is set unless the caller asks for one.

use std::time::Duration;

/// Default connect timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 10;

/// Default idle timeout for the connection pool in seconds
pub const DEFAULT_POOL_IDLE_TIMEOUT: u64 = 90;

/// Default maximum idle connections per host
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 1;

/// Default `User-Agent` header sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("vhost-client/", env!("CARGO_PKG_VERSION"));

/// HTTP client configuration.
///
/// Configures timeouts and connection reuse for the transport handle owned
/// by a client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout; `None` leaves requests unbounded
    pub timeout: Option<Duration>,

    /// Timeout for establishing the connection
    pub connect_timeout: Duration,

    /// Connection pool idle timeout
    pub pool_idle_timeout: Duration,

    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,

    /// `User-Agent` header value
    pub user_agent: &'static str,

    /// Advertise and decode gzip responses
    pub enable_compression: bool,
}

impl ClientConfig {
    /// Create a new client configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: None,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT),
            pool_idle_timeout: Duration::from_secs(DEFAULT_POOL_IDLE_TIMEOUT),
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
            user_agent: DEFAULT_USER_AGENT,
            enable_compression: false,
        }
    }

    /// Set request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set connection pool idle timeout.
    #[must_use]
    pub const fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    /// Set maximum idle connections per host.
    #[must_use]
    pub const fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    /// Set the `User-Agent` header value.
    #[must_use]
    pub const fn with_user_agent(mut self, user_agent: &'static str) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Enable or disable compression.
    #[must_use]
    pub const fn with_compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }

    /// Build the `reqwest` transport handle described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ConfigError`] if the TLS backend or resolver
    /// cannot be initialised.
    pub fn build_http(&self) -> crate::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .connect_timeout(self.connect_timeout)
            .pool_idle_timeout(self.pool_idle_timeout)
            .pool_max_idle_per_host(self.pool_max_idle_per_host);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if !self.enable_compression {
            builder = builder.no_gzip();
        }

        builder
            .build()
            .map_err(|err| crate::Error::ConfigError(format!("Failed to build HTTP client: {err}")))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_new() {
        let config = ClientConfig::new();
        assert!(config.timeout.is_none());
        assert_eq!(
            config.connect_timeout,
            Duration::from_secs(DEFAULT_CONNECT_TIMEOUT)
        );
        assert_eq!(config.pool_max_idle_per_host, 1);
        assert!(config.user_agent.starts_with("vhost-client/"));
        assert!(!config.enable_compression);
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(
            config.pool_idle_timeout,
            Duration::from_secs(DEFAULT_POOL_IDLE_TIMEOUT)
        );
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_timeout(Duration::from_secs(5))
            .with_connect_timeout(Duration::from_secs(2))
            .with_pool_idle_timeout(Duration::from_secs(30))
            .with_pool_max_idle(4)
            .with_user_agent("vhostctl/1.0")
            .with_compression(true);

        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.pool_idle_timeout, Duration::from_secs(30));
        assert_eq!(config.pool_max_idle_per_host, 4);
        assert_eq!(config.user_agent, "vhostctl/1.0");
        assert!(config.enable_compression);
    }

    #[test]
    fn test_build_http() {
        let config = ClientConfig::new().with_timeout(Duration::from_secs(1));
        assert!(config.build_http().is_ok());
        assert!(config.with_compression(true).build_http().is_ok());
    }
}
