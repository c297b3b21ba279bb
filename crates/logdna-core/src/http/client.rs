//! HTTP execution
//!
//! The [`Executor`] trait is the single seam through which a request reaches the
//! network. [`ReqwestExecutor`] is the production implementation; tests swap in
//! executors that fail or record what they were given.

use std::sync::{Arc, OnceLock};
use async_trait::async_trait;
use reqwest::{Client, Request, Response};
use tracing::debug;
use crate::error::{Error, Result};
use crate::http::timeout::TimeoutConfig;

/// Sends a transport request and hands back the response
#[async_trait]
pub trait Executor: Send + Sync {
    /// Perform the exchange; the error is wrapped as a transport failure
    async fn execute(&self, request: Request) -> anyhow::Result<Response>;
}

#[async_trait]
impl<T> Executor for Arc<T>
where
    T: Executor + ?Sized,
{
    async fn execute(&self, request: Request) -> anyhow::Result<Response> {
        (**self).execute(request).await
    }
}

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Process-wide client behind every default [`ReqwestExecutor`]
///
/// Built on first use. A failed build is returned and retried on the next call.
pub fn shared_client() -> Result<&'static Client> {
    if let Some(client) = SHARED_CLIENT.get() {
        return Ok(client);
    }

    let client = Client::builder().build().map_err(|e| Error::Configuration {
        message: format!("Failed to create HTTP client: {}", e),
        source: Some(e.into()),
    })?;
    debug!("Initialized shared LogDNA HTTP client");

    Ok(SHARED_CLIENT.get_or_init(|| client))
}

/// Executor backed by a `reqwest::Client`
///
/// The default executor holds no client of its own and sends through
/// [`shared_client`], so constructing one does no I/O and cannot fail.
#[derive(Debug, Clone, Default)]
pub struct ReqwestExecutor {
    client: Option<Client>,
}

impl ReqwestExecutor {
    /// Executor on the shared pooled client
    pub const fn new() -> Self {
        Self { client: None }
    }

    /// Executor on a caller-supplied client, e.g. one per tokio runtime
    pub fn from_client(client: Client) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Executor on a dedicated client enforcing the given deadlines
    pub fn with_timeouts(timeouts: &TimeoutConfig) -> Result<Self> {
        timeouts.validate()?;

        let client = Client::builder()
            .connect_timeout(timeouts.connect_timeout)
            .timeout(timeouts.request_timeout)
            .build()
            .map_err(|e| Error::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
                source: Some(e.into()),
            })?;

        Ok(Self::from_client(client))
    }

    /// Whether requests go through [`shared_client`]
    pub fn uses_shared_client(&self) -> bool {
        self.client.is_none()
    }

    /// The client requests are sent with, building the shared one if needed
    pub fn client(&self) -> Result<&Client> {
        match &self.client {
            Some(client) => Ok(client),
            None => shared_client(),
        }
    }
}

#[async_trait]
impl Executor for ReqwestExecutor {
    async fn execute(&self, request: Request) -> anyhow::Result<Response> {
        let client = self.client()?;
        Ok(client.execute(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_executors_share_one_client() {
        let first = ReqwestExecutor::default();
        let second = ReqwestExecutor::new();
        assert!(first.uses_shared_client());
        assert!(second.uses_shared_client());

        let a = first.client().unwrap();
        let b = second.client().unwrap();
        assert!(std::ptr::eq(a, b));
        assert!(std::ptr::eq(a, shared_client().unwrap()));
    }

    #[test]
    fn test_from_client_keeps_its_own_client() {
        let executor = ReqwestExecutor::from_client(Client::new());
        assert!(!executor.uses_shared_client());
        assert!(!std::ptr::eq(executor.client().unwrap(), shared_client().unwrap()));
    }

    #[test]
    fn test_with_timeouts() {
        let timeouts = TimeoutConfig::new(Duration::from_secs(2), Duration::from_secs(5));
        let executor = ReqwestExecutor::with_timeouts(&timeouts).unwrap();
        assert!(!executor.uses_shared_client());
    }

    #[test]
    fn test_with_invalid_timeouts() {
        let timeouts = TimeoutConfig::new(Duration::ZERO, Duration::from_secs(5));
        let err = ReqwestExecutor::with_timeouts(&timeouts).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Configuration);
    }

    #[tokio::test]
    async fn test_connection_failure_is_an_error() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let request = Request::new(
            reqwest::Method::GET,
            url::Url::parse(&format!("http://{}/unreachable", addr)).unwrap(),
        );
        let result = ReqwestExecutor::new().execute(request).await;
        assert!(result.is_err());
    }
}
