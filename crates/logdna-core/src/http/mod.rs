//! HTTP request pipeline for the LogDNA API
//!
//! This module provides:
//! - [`RequestConfig`] and its builder, the unit of work
//! - One trait per replaceable strategy: [`RequestFactory`], [`Executor`],
//!   [`BodyReader`] and [`Marshaller`]
//! - The production implementations of each strategy
//! - Timeout configuration for the default executor

pub mod body;
pub mod builder;
pub mod client;
pub mod marshal;
pub mod request;
pub mod timeout;

pub use body::{BodyReader, FullBodyReader};
pub use builder::{RequestFactory, StandardRequestFactory};
pub use client::{shared_client, Executor, ReqwestExecutor};
pub use marshal::{JsonMarshaller, Marshaller, Payload};
pub use request::{RequestConfig, RequestConfigBuilder, JSON_CONTENT_TYPE, SERVICE_KEY_HEADER};
pub use timeout::TimeoutConfig;

// Re-export commonly used types
pub use reqwest::{Method, Request, Response, StatusCode};
