//! Page fetcher port
//!
//! Defines how the application layer retrieves raw markup for a URL.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// Errors that can occur while fetching a page
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Response from {url} too large: {bytes} bytes")]
    TooLarge { url: String, bytes: u64 },
}

impl FetchError {
    /// The URL the failed request was made to
    pub fn url(&self) -> &str {
        match self {
            FetchError::Network { url, .. }
            | FetchError::Timeout { url }
            | FetchError::Status { url, .. }
            | FetchError::TooLarge { url, .. } => url,
        }
    }
}

/// Markup retrieved for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Effective URL after redirects
    pub url: Url,
    /// Response body, decoded lossily
    pub body: String,
}

impl FetchedPage {
    pub fn new(url: Url, body: impl Into<String>) -> Self {
        Self {
            url,
            body: body.into(),
        }
    }
}

/// Retrieves raw markup over HTTP
///
/// Implementations (adapters) live in the infrastructure layer. A single
/// GET per call; no retries.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError>;
}
