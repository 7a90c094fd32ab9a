//! Application Configuration
//!
//! Configuration for the authentication client.

use std::time::Duration;

/// Authentication client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the session service (scheme + host, no trailing path)
    pub base_url: String,
    /// Per-request timeout; elapsed time past this counts as no response
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Create config pointed at a specific session service
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Create config for development (local backend)
    pub fn development() -> Self {
        Self::default()
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
