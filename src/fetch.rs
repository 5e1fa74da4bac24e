//! Upstream Fetch Module
//!
//! Retrieves source bytes for the transform. Connection problems and
//! non-success statuses are distinct, typed failures so callers can tell
//! an upstream problem from a transform problem.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

// == Fetch Error Enum ==
/// Errors surfaced by a fetcher.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, timeout, or protocol failure
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("upstream returned status {0}")]
    Status(reqwest::StatusCode),
}

// == Fetcher Trait ==
/// Source of upstream bytes for the transform.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches the resource at `url` in full.
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError>;
}

// == HTTP Fetcher ==
/// Fetcher over a shared HTTP client with a request timeout.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Creates a fetcher whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.bytes().await?)
    }
}
