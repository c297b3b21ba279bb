//! Transport request construction
//!
//! Turns a method, an absolute URL and payload bytes into a `reqwest::Request`.
//! Headers are attached afterwards by the pipeline, not here.

use anyhow::anyhow;
use reqwest::{Method, Request};
use url::Url;

/// Builds the transport request for one pipeline run
pub trait RequestFactory: Send + Sync {
    /// Construct a request; the error message is surfaced to callers unchanged
    fn build_request(&self, method: &str, url: &str, body: Vec<u8>) -> anyhow::Result<Request>;
}

impl<F> RequestFactory for F
where
    F: Fn(&str, &str, Vec<u8>) -> anyhow::Result<Request> + Send + Sync,
{
    fn build_request(&self, method: &str, url: &str, body: Vec<u8>) -> anyhow::Result<Request> {
        self(method, url, body)
    }
}

/// Default factory backed by `reqwest::Request::new`
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRequestFactory;

impl RequestFactory for StandardRequestFactory {
    fn build_request(&self, method: &str, url: &str, body: Vec<u8>) -> anyhow::Result<Request> {
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|_| anyhow!("invalid HTTP method {:?}", method))?;

        let url = Url::parse(url)
            .map_err(|e| anyhow!("invalid request URL {:?}: {}", url, e))?;

        let mut request = Request::new(method, url);

        // An empty payload means no body at all, not a zero-length one.
        if !body.is_empty() {
            *request.body_mut() = Some(body.into());
        }

        Ok(request)
    }
}
