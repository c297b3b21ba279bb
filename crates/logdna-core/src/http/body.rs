//! Response body reading

use std::sync::Arc;
use async_trait::async_trait;
use reqwest::Response;

/// Drains a response into bytes
#[async_trait]
pub trait BodyReader: Send + Sync {
    /// Read the whole body; the error is wrapped as a body-read failure
    async fn read_body(&self, response: Response) -> anyhow::Result<Vec<u8>>;
}

#[async_trait]
impl<T> BodyReader for Arc<T>
where
    T: BodyReader + ?Sized,
{
    async fn read_body(&self, response: Response) -> anyhow::Result<Vec<u8>> {
        (**self).read_body(response).await
    }
}

/// Default reader that buffers the entire body in memory
#[derive(Debug, Clone, Copy, Default)]
pub struct FullBodyReader;

#[async_trait]
impl BodyReader for FullBodyReader {
    async fn read_body(&self, response: Response) -> anyhow::Result<Vec<u8>> {
        Ok(response.bytes().await?.to_vec())
    }
}
