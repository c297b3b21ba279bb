//! Request payload marshalling
//!
//! A request body is held as a type-erased [`Payload`] so that a single
//! [`Marshaller`] can serialize any body handed to a
//! [`RequestConfig`](crate::RequestConfig).

use serde::Serialize;
use serde_json::Value;

/// A serializable request body
pub trait Payload: Send + Sync {
    /// Encode as compact JSON bytes
    fn to_json_vec(&self) -> serde_json::Result<Vec<u8>>;

    /// Encode as a JSON value tree
    fn to_json_value(&self) -> serde_json::Result<Value>;
}

impl<T> Payload for T
where
    T: Serialize + Send + Sync,
{
    fn to_json_vec(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    fn to_json_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Turns a request body into wire bytes
pub trait Marshaller: Send + Sync {
    /// Serialize `body`; the error message is surfaced to callers unchanged
    fn marshal(&self, body: &dyn Payload) -> anyhow::Result<Vec<u8>>;
}

impl<F> Marshaller for F
where
    F: Fn(&dyn Payload) -> anyhow::Result<Vec<u8>> + Send + Sync,
{
    fn marshal(&self, body: &dyn Payload) -> anyhow::Result<Vec<u8>> {
        self(body)
    }
}

/// Default marshaller producing compact JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMarshaller;

impl Marshaller for JsonMarshaller {
    fn marshal(&self, body: &dyn Payload) -> anyhow::Result<Vec<u8>> {
        Ok(body.to_json_vec()?)
    }
}
