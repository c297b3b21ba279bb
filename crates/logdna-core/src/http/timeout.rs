//! Timeout configuration for the default executor
//!
//! The pipeline itself never imposes a deadline; callers that need one build a
//! [`ReqwestExecutor`](crate::http::ReqwestExecutor) from a [`TimeoutConfig`].

use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

/// Connection and request deadlines applied by the HTTP client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Time allowed to establish a connection
    pub connect_timeout: Duration,
    /// Total time allowed for the exchange, body included
    pub request_timeout: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl TimeoutConfig {
    /// Create a new timeout configuration
    pub fn new(connect_timeout: Duration, request_timeout: Duration) -> Self {
        Self {
            connect_timeout,
            request_timeout,
        }
    }

    /// Copy of this configuration with a different request timeout
    pub fn with_request_timeout(&self, timeout: Duration) -> Self {
        let mut config = self.clone();
        config.request_timeout = timeout;
        config
    }

    /// Validate timeout configuration
    pub fn validate(&self) -> Result<()> {
        if self.connect_timeout.is_zero() {
            return Err(Error::configuration("Connect timeout cannot be zero"));
        }
        if self.request_timeout.is_zero() {
            return Err(Error::configuration("Request timeout cannot be zero"));
        }
        if self.connect_timeout > self.request_timeout {
            return Err(Error::configuration(
                "Connect timeout cannot be longer than request timeout",
            ));
        }
        Ok(())
    }
}
