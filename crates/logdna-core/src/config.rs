//! Provider configuration
//!
//! A [`ProviderConfig`] carries the service key and host of one LogDNA account.
//! It is created once per client and shared read-only by every request that
//! client issues.

use std::fmt;
use std::path::Path;
use serde::Deserialize;
use crate::error::{Error, Result};

/// Environment variable holding the service key
pub const SERVICE_KEY_ENV: &str = "LOGDNA_SERVICE_KEY";

/// Environment variable overriding the API host
pub const HOST_ENV: &str = "LOGDNA_HOST";

/// Host used when none is configured
pub const DEFAULT_HOST: &str = "https://api.logdna.com";

/// Credentials and target of a LogDNA API client
///
/// Only deserializable: the key is never written back out.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderConfig {
    /// Secret sent verbatim in the `servicekey` header
    pub service_key: String,

    /// Base URL requests are issued against, without a trailing slash
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl ProviderConfig {
    /// Create a configuration from an explicit key and host
    pub fn new(service_key: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            service_key: service_key.into(),
            host: host.into(),
        }
    }

    /// Create a configuration for the default LogDNA host
    pub fn with_service_key(service_key: impl Into<String>) -> Self {
        Self::new(service_key, DEFAULT_HOST)
    }

    /// Load from `LOGDNA_SERVICE_KEY` and `LOGDNA_HOST`, reading `.env` first if present
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let service_key = lookup(SERVICE_KEY_ENV)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                Error::configuration(format!(
                    "LogDNA service key not found. Set {} environment variable",
                    SERVICE_KEY_ENV
                ))
            })?;

        let host = lookup(HOST_ENV)
            .filter(|host| !host.trim().is_empty())
            .unwrap_or_else(default_host);

        Ok(Self { service_key, host })
    }

    /// Load from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Configuration {
            message: format!("Failed to read {}", path.display()),
            source: Some(e.into()),
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| Error::Configuration {
            message: format!("Invalid provider configuration in {}", path.display()),
            source: Some(e.into()),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check that the key and host are usable
    pub fn validate(&self) -> Result<()> {
        if self.service_key.trim().is_empty() {
            return Err(Error::configuration("LogDNA service key is empty"));
        }
        if self.host.trim().is_empty() {
            return Err(Error::configuration("LogDNA host is empty"));
        }
        Ok(())
    }

    /// Absolute URL for a resource path: `host + "/" + path`, never normalized
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.host, path)
    }
}

// Keeps the service key out of logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("service_key", &"[REDACTED]")
            .field("host", &self.host)
            .finish()
    }
}
