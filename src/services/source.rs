//! Source Page Service
//!
//! Fetches the trending page over HTTP. One blocking round-trip per widget
//! request; failures are terminal for the request and never retried.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

/// Errors that can occur while fetching the source page
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to source page failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("source page returned status code {0}")]
    Status(u16),

    #[error("source page body could not be decoded: {0}")]
    Body(reqwest::Error),
}

/// Client for the scraped source page
///
/// Holds the shared `reqwest::Client` (with the configured timeout) and the
/// fixed source URL. Constructed once at process start and shared across
/// requests through application state.
#[derive(Debug, Clone)]
pub struct SourceClient {
    client: reqwest::Client,
    url: String,
}

impl SourceClient {
    /// Build a client with a bounded request timeout
    pub fn new(url: String, timeout_secs: u64) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client, url })
    }

    /// The configured source URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the source page and return its body as text
    ///
    /// A transport failure or non-2xx status aborts the request; a body that
    /// cannot be decoded is reported separately as `SourceError::Body` so the
    /// caller can surface it as a parse failure.
    pub async fn fetch(&self) -> Result<String, SourceError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(SourceError::Body)?;
        debug!(bytes = body.len(), url = %self.url, "Fetched source page");
        Ok(body)
    }
}
