//! Mail transport port
//!
//! Defines how a message is handed to one configured mail account.

use async_trait::async_trait;
use outreach_domain::{MailJob, TransportConfig, TransportOutcome};
use thiserror::Error;

/// Errors that can occur while talking to a mail server
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Message rejected: {0}")]
    Rejected(String),
}

impl From<TransportError> for TransportOutcome {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Authentication(reason) => TransportOutcome::AuthFailed { reason },
            other => TransportOutcome::Failed {
                reason: other.to_string(),
            },
        }
    }
}

/// Sends mail through one transport per call
///
/// Each call opens its own connection (implicit TLS on port 465, STARTTLS
/// otherwise), authenticates, and closes it again.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Send one plain-text message
    async fn send(&self, transport: &TransportConfig, job: &MailJob) -> Result<(), TransportError>;

    /// Connect and authenticate without sending
    async fn check(&self, transport: &TransportConfig) -> Result<(), TransportError>;
}
