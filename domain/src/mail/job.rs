//! Mail job and dispatch report

use serde::{Deserialize, Serialize};

/// One message to send (Entity)
///
/// Created at dispatch time and discarded after every transport was tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailJob {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailJob {
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Result of one attempt against one transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TransportOutcome {
    Succeeded,
    /// The server rejected the credentials
    AuthFailed { reason: String },
    /// Connection, TLS, protocol or address failure
    Failed { reason: String },
}

impl TransportOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TransportOutcome::Succeeded)
    }
}

/// Outcome of one transport in configured order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportAttempt {
    /// `TransportConfig::describe()` of the transport
    pub transport: String,
    #[serde(flatten)]
    pub outcome: TransportOutcome,
}

/// Every attempt made for one job (or one configuration check)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchReport {
    pub recipient: String,
    pub attempts: Vec<TransportAttempt>,
}

impl DispatchReport {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            attempts: Vec::new(),
        }
    }

    pub fn record(&mut self, transport: impl Into<String>, outcome: TransportOutcome) {
        self.attempts.push(TransportAttempt {
            transport: transport.into(),
            outcome,
        });
    }

    /// Number of transports that delivered the message
    pub fn success_count(&self) -> usize {
        self.attempts
            .iter()
            .filter(|a| a.outcome.is_success())
            .count()
    }

    pub fn any_succeeded(&self) -> bool {
        self.success_count() > 0
    }
}
