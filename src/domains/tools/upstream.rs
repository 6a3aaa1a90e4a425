//! Outbound HTTP access to the upstream API.

use async_trait::async_trait;
use tracing::debug;

use super::error::ToolError;

/// Fetches a fully assembled URL and returns the body as text.
///
/// Implementations must not inspect the status code: 4xx/5xx bodies are
/// returned like any other.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn get_text(&self, url: &str) -> Result<String, ToolError>;
}

/// [`UpstreamClient`] backed by a shared `reqwest::Client`.
///
/// No timeout is configured and nothing is retried.
#[derive(Debug, Clone, Default)]
pub struct HttpUpstream {
    client: reqwest::Client,
}

impl HttpUpstream {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstream {
    async fn get_text(&self, url: &str) -> Result<String, ToolError> {
        let response = self.client.get(url).send().await?;
        debug!("Upstream responded with status {}", response.status());
        Ok(response.text().await?)
    }
}
