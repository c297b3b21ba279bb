//! LogDNA Core - authenticated request pipeline for the LogDNA configuration API
//!
//! This crate builds, sends and checks HTTP requests against a single LogDNA
//! account. Resource management code sits on top of it and only sees the
//! construct/execute contract of [`RequestConfig`].
//!
//! # Main Components
//!
//! - **Provider Configuration**: service key and host, loaded explicitly, from the environment or from a file
//! - **Request Pipeline**: marshal → build → authenticate → execute → read → check status
//! - **Strategies**: replaceable request builder, executor, body reader and marshaller
//! - **Error Handling**: one classified error per pipeline stage using `thiserror`
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use logdna_core::{ProviderConfig, RequestConfig, Result};
//!
//! async fn fetch_view(view_id: &str) -> Result<Vec<u8>> {
//!     let provider = Arc::new(ProviderConfig::from_env()?);
//!     RequestConfig::builder(provider, "GET", format!("v1/config/view/{}", view_id))
//!         .build()
//!         .make_request()
//!         .await
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod types;

// Re-export main types for convenience
pub use config::{ProviderConfig, DEFAULT_HOST, HOST_ENV, SERVICE_KEY_ENV};
pub use error::{Error, ErrorKind, Result};
pub use http::{
    BodyReader, Executor, FullBodyReader, JsonMarshaller, Marshaller, Payload,
    RequestConfig, RequestConfigBuilder, RequestFactory, ReqwestExecutor,
    StandardRequestFactory, TimeoutConfig,
};
pub use types::{ViewRequest, ViewResponse};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }
}
