//! Request configuration and the execution pipeline
//!
//! A [`RequestConfig`] is one unit of work against the LogDNA API: method, path
//! and optional body, plus the four strategies used to carry it out. Running it
//! goes through a fixed sequence of stages that stops at the first failure:
//!
//! 1. marshal the body (if any)
//! 2. build the transport request for `host + "/" + path`
//! 3. attach the `servicekey` and `Content-Type` headers
//! 4. execute
//! 5. read the response body
//! 6. require status 200
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use logdna_core::{ProviderConfig, RequestConfig, ViewRequest, ViewResponse};
//!
//! async fn create_view(provider: Arc<ProviderConfig>) -> logdna_core::Result<ViewResponse> {
//!     RequestConfig::builder(provider, "POST", "v1/config/view")
//!         .body(ViewRequest::named("errors"))
//!         .build()
//!         .make_json_request()
//!         .await
//! }
//! ```

use std::fmt;
use std::sync::Arc;
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Request, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use crate::config::ProviderConfig;
use crate::error::{Error, Result};
use crate::http::body::{BodyReader, FullBodyReader};
use crate::http::builder::{RequestFactory, StandardRequestFactory};
use crate::http::client::{Executor, ReqwestExecutor};
use crate::http::marshal::{JsonMarshaller, Marshaller, Payload};

/// Header carrying the service key; sent on the wire as `Servicekey`
pub const SERVICE_KEY_HEADER: &str = "servicekey";

/// Content type declared on every request
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// One configured call against the LogDNA API
#[derive(Clone)]
pub struct RequestConfig {
    provider: Arc<ProviderConfig>,
    method: String,
    path: String,
    body: Option<Arc<dyn Payload>>,
    request_factory: Arc<dyn RequestFactory>,
    executor: Arc<dyn Executor>,
    body_reader: Arc<dyn BodyReader>,
    marshaller: Arc<dyn Marshaller>,
}

impl RequestConfig {
    /// Configuration with every strategy at its production default
    pub fn new<B>(
        provider: Arc<ProviderConfig>,
        method: impl Into<String>,
        path: impl Into<String>,
        body: Option<B>,
    ) -> Self
    where
        B: Serialize + Send + Sync + 'static,
    {
        let mut builder = Self::builder(provider, method, path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        builder.build()
    }

    /// Start a configuration whose strategies can be overridden one by one
    pub fn builder(
        provider: Arc<ProviderConfig>,
        method: impl Into<String>,
        path: impl Into<String>,
    ) -> RequestConfigBuilder {
        RequestConfigBuilder {
            provider,
            method: method.into(),
            path: path.into(),
            body: None,
            request_factory: None,
            executor: None,
            body_reader: None,
            marshaller: None,
        }
    }

    /// HTTP method, as supplied
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Resource path relative to the provider host
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Absolute URL the request is sent to
    pub fn url(&self) -> String {
        self.provider.url_for(&self.path)
    }

    /// Whether a body will be marshalled
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Provider this request authenticates against
    pub fn provider(&self) -> &ProviderConfig {
        &self.provider
    }

    /// Run the pipeline and return the raw body of a 200 response
    pub async fn make_request(&self) -> Result<Vec<u8>> {
        let payload = match &self.body {
            Some(body) => self.marshaller.marshal(&**body).map_err(Error::Marshal)?,
            None => Vec::new(),
        };

        let url = self.url();
        let mut request = self
            .request_factory
            .build_request(&self.method, &url, payload)
            .map_err(Error::RequestBuild)?;

        self.attach_headers(&mut request)?;

        debug!(method = %self.method, url = %url, "Sending LogDNA API request");

        let response = self
            .executor
            .execute(request)
            .await
            .map_err(Error::Transport)?;

        let status = response.status();
        let body = self
            .body_reader
            .read_body(response)
            .await
            .map_err(Error::BodyRead)?;

        if status != StatusCode::OK {
            warn!(
                method = %self.method,
                url = %url,
                status = status.as_u16(),
                "LogDNA API request rejected"
            );
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }

        debug!(status = status.as_u16(), bytes = body.len(), "LogDNA API request completed");
        Ok(body)
    }

    /// Run the pipeline and decode the 200 body as JSON
    pub async fn make_json_request<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.make_request().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn attach_headers(&self, request: &mut Request) -> Result<()> {
        let mut service_key = HeaderValue::from_str(&self.provider.service_key)
            .map_err(|e| Error::RequestBuild(e.into()))?;
        service_key.set_sensitive(true);

        let headers = request.headers_mut();
        headers.insert(HeaderName::from_static(SERVICE_KEY_HEADER), service_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        Ok(())
    }
}

impl fmt::Debug for RequestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestConfig")
            .field("provider", &self.provider)
            .field("method", &self.method)
            .field("path", &self.path)
            .field("has_body", &self.body.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`RequestConfig`]
///
/// Each setter replaces one strategy slot. Setters apply in call order, so a
/// later call for the same slot wins. Unset slots get the production default
/// in [`build`](Self::build).
pub struct RequestConfigBuilder {
    provider: Arc<ProviderConfig>,
    method: String,
    path: String,
    body: Option<Arc<dyn Payload>>,
    request_factory: Option<Arc<dyn RequestFactory>>,
    executor: Option<Arc<dyn Executor>>,
    body_reader: Option<Arc<dyn BodyReader>>,
    marshaller: Option<Arc<dyn Marshaller>>,
}

impl RequestConfigBuilder {
    /// Set the request body
    pub fn body<B>(mut self, body: B) -> Self
    where
        B: Serialize + Send + Sync + 'static,
    {
        self.body = Some(Arc::new(body));
        self
    }

    /// Replace the transport request builder
    pub fn request_factory(mut self, factory: impl RequestFactory + 'static) -> Self {
        self.request_factory = Some(Arc::new(factory));
        self
    }

    /// Replace the HTTP executor
    pub fn executor(mut self, executor: impl Executor + 'static) -> Self {
        self.executor = Some(Arc::new(executor));
        self
    }

    /// Replace the response body reader
    pub fn body_reader(mut self, reader: impl BodyReader + 'static) -> Self {
        self.body_reader = Some(Arc::new(reader));
        self
    }

    /// Replace the payload marshaller
    pub fn marshaller(mut self, marshaller: impl Marshaller + 'static) -> Self {
        self.marshaller = Some(Arc::new(marshaller));
        self
    }

    /// Finish the configuration; never fails and performs no I/O
    pub fn build(self) -> RequestConfig {
        RequestConfig {
            provider: self.provider,
            method: self.method,
            path: self.path,
            body: self.body,
            request_factory: self
                .request_factory
                .unwrap_or_else(|| Arc::new(StandardRequestFactory)),
            executor: self
                .executor
                .unwrap_or_else(|| Arc::new(ReqwestExecutor::new())),
            body_reader: self
                .body_reader
                .unwrap_or_else(|| Arc::new(FullBodyReader)),
            marshaller: self
                .marshaller
                .unwrap_or_else(|| Arc::new(JsonMarshaller)),
        }
    }
}

impl fmt::Debug for RequestConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestConfigBuilder")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("has_body", &self.body.is_some())
            .finish_non_exhaustive()
    }
}
