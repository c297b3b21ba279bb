//! Error types for the LogDNA request pipeline
//!
//! Every stage of [`RequestConfig::make_request`](crate::RequestConfig::make_request)
//! fails with its own variant, and each variant renders a message that alone is
//! enough to tell which stage failed.

use std::fmt;
use thiserror::Error;
use serde::{Deserialize, Serialize};

/// Main error type for LogDNA API operations
#[derive(Error, Debug)]
pub enum Error {
    /// The payload marshaller rejected the request body
    #[error("{0}")]
    Marshal(anyhow::Error),

    /// The transport request could not be constructed
    #[error("{0}")]
    RequestBuild(anyhow::Error),

    /// The executor failed to complete the HTTP exchange
    #[error("Error during HTTP request: {0}")]
    Transport(anyhow::Error),

    /// The response body could not be read
    #[error("Error parsing HTTP response: {0}")]
    BodyRead(anyhow::Error),

    /// The server answered with anything other than 200
    #[error("status NOT OK: {status}")]
    Status {
        status: u16,
    },

    /// A 200 body did not decode into the requested type
    #[error("Error decoding HTTP response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// Provider configuration could not be loaded
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline stage an [`Error`] originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Payload serialization
    Marshal,
    /// Transport request construction
    RequestBuild,
    /// Network exchange
    Transport,
    /// Response body read
    BodyRead,
    /// Non-200 response status
    Status,
    /// Typed decoding of a successful body
    Decode,
    /// Provider configuration
    Configuration,
}

impl ErrorKind {
    /// True when the failure happened before anything reached the server
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            ErrorKind::Marshal | ErrorKind::RequestBuild | ErrorKind::Configuration
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Marshal => write!(f, "marshal"),
            ErrorKind::RequestBuild => write!(f, "request_build"),
            ErrorKind::Transport => write!(f, "transport"),
            ErrorKind::BodyRead => write!(f, "body_read"),
            ErrorKind::Status => write!(f, "status"),
            ErrorKind::Decode => write!(f, "decode"),
            ErrorKind::Configuration => write!(f, "configuration"),
        }
    }
}

impl Error {
    /// Classify this error by pipeline stage
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Marshal(_) => ErrorKind::Marshal,
            Error::RequestBuild(_) => ErrorKind::RequestBuild,
            Error::Transport(_) => ErrorKind::Transport,
            Error::BodyRead(_) => ErrorKind::BodyRead,
            Error::Status { .. } => ErrorKind::Status,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Configuration { .. } => ErrorKind::Configuration,
        }
    }

    /// HTTP status code for [`Error::Status`] failures
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status { status } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode { source: err }
    }
}
