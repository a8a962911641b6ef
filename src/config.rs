use std::time::Duration;

use crate::error::{ApiError, Result};

/// Production endpoint of the SE Ranking API v4
pub const DEFAULT_BASE_URL: &str = "https://api4.seranking.com";

/// Default global request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration
///
/// Everything here is fixed for the lifetime of a [`Client`](crate::Client).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and host every endpoint path is appended to
    pub base_url: String,

    /// Global timeout for one request, connect through body read
    pub timeout: Duration,

    /// Value of the `User-Agent` header
    pub user_agent: String,

    /// Turn non-2xx responses into [`ApiError::Status`] instead of decoding them
    pub error_for_status: bool,

    /// Largest response body accepted, in bytes
    pub max_body_bytes: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("seranking-rs/{}", env!("CARGO_PKG_VERSION")),
            error_for_status: true,
            max_body_bytes: u64::MAX,
        }
    }
}

impl ClientConfig {
    /// Create a configuration pointing at another base URL (proxy, staging, test server)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Decode bodies of non-2xx responses as if they were successful
    #[must_use]
    pub fn with_error_for_status(mut self, enabled: bool) -> Self {
        self.error_for_status = enabled;
        self
    }

    /// Fail requests whose response body is larger than `limit` bytes
    #[must_use]
    pub fn with_max_body_bytes(mut self, limit: u64) -> Self {
        self.max_body_bytes = limit;
        self
    }

    /// Base URL without trailing slashes, ready for `{base}/{path}` joining
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Check the configuration before a client is built from it
    pub fn validate(&self) -> Result<()> {
        if self.base().is_empty() {
            return Err(ApiError::InvalidConfig(
                "base_url cannot be empty".to_string(),
            ));
        }

        let Some(rest) = self
            .base_url
            .strip_prefix("http://")
            .or_else(|| self.base_url.strip_prefix("https://"))
        else {
            return Err(ApiError::InvalidConfig(
                "base_url must start with http:// or https://".to_string(),
            ));
        };

        if rest.is_empty() || rest.starts_with('/') {
            return Err(ApiError::InvalidConfig("base_url has no host".to_string()));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
