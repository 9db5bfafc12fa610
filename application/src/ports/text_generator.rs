//! Text generator port
//!
//! Defines the interface for the text-generation capability used to draft
//! outreach and pick a recipient.

use async_trait::async_trait;
use outreach_domain::GenerationRequest;
use thiserror::Error;

/// Errors that can occur during a generation call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication rejected: {0}")]
    Unauthorized(String),

    #[error("Quota or rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Request failed (HTTP {status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Empty response")]
    EmptyResponse,

    #[error("Not configured: {0}")]
    NotConfigured(String),
}

/// Produces text for a role-tagged conversation
///
/// Returns the content of the first choice. Implementations must not retry.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}
