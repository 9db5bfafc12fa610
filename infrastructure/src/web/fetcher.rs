//! reqwest-backed page fetcher

use async_trait::async_trait;
use outreach_application::{FetchError, FetchedPage, PageFetcher};
use reqwest::redirect::Policy;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Maximum response body size (5 MB)
pub const MAX_BODY_SIZE: usize = 5 * 1024 * 1024;

/// Redirects followed before giving up
pub const MAX_REDIRECTS: usize = 10;

/// Settings for [`HttpPageFetcher`]
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: String,
    pub max_body_bytes: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: format!("outreach-scout/{}", env!("CARGO_PKG_VERSION")),
            max_body_bytes: MAX_BODY_SIZE,
        }
    }
}

/// Plain GET fetcher; non-UTF-8 bodies are decoded lossily
pub struct HttpPageFetcher {
    client: reqwest::Client,
    max_body_bytes: usize,
}

impl HttpPageFetcher {
    pub fn new(options: FetchOptions) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self {
            client,
            max_body_bytes: options.max_body_bytes,
        })
    }

    fn request_error(url: &Url, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Network {
                url: url.to_string(),
                reason: error.to_string(),
            }
        }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        debug!("GET {}", url);

        let mut response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Self::request_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let too_large = |bytes: u64| FetchError::TooLarge {
            url: url.to_string(),
            bytes,
        };

        // Check content length
        if let Some(length) = response.content_length()
            && length > self.max_body_bytes as u64
        {
            return Err(too_large(length));
        }

        let effective_url = response.url().clone();
        let mut body = Vec::new();

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| Self::request_error(url, e))?
        {
            body.extend_from_slice(&chunk);
            if body.len() > self.max_body_bytes {
                return Err(too_large(body.len() as u64));
            }
        }

        debug!("{}: {} bytes from {}", url, body.len(), effective_url);

        Ok(FetchedPage::new(
            effective_url,
            String::from_utf8_lossy(&body).into_owned(),
        ))
    }
}
