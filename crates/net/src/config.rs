//! Shared HTTP client settings.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::NetError;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default `User-Agent`. The OpenStreetMap usage policy requires one.
pub const DEFAULT_USER_AGENT: &str = concat!("fasli/", env!("CARGO_PKG_VERSION"));

/// Settings applied to every request a client sends.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use fasli_net::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_timeout(Duration::from_secs(3))
///     .with_user_agent("memorial-planner/2.0");
/// assert_eq!(config.timeout(), Duration::from_secs(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfig {
    /// Defaults: 10 s timeout, `fasli/<version>` user agent.
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// User agent.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub(crate) fn build_client(&self) -> Result<Client, NetError> {
        Ok(Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .build()?)
    }
}
