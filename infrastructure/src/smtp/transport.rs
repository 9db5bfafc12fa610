//! lettre-backed SMTP transport

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::response::Code;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use outreach_application::{MailTransport, TransportError};
use outreach_domain::{MailJob, TransportConfig, TransportSecurity};
use std::time::Duration;
use tracing::debug;

/// SMTP reply codes that mean the credentials were refused
const AUTH_FAILURE_CODES: [&str; 3] = ["530", "534", "535"];

/// Opens one authenticated connection per send or check
pub struct SmtpMailTransport {
    timeout: Duration,
}

impl Default for SmtpMailTransport {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl SmtpMailTransport {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn connect(
        &self,
        config: &TransportConfig,
    ) -> Result<AsyncSmtpTransport<Tokio1Executor>, TransportError> {
        let builder = match config.security() {
            TransportSecurity::ImplicitTls => {
                AsyncSmtpTransport::<Tokio1Executor>::relay(config.server())
            }
            TransportSecurity::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(config.server())
            }
        }
        .map_err(|e| TransportError::Connection(e.to_string()))?;

        Ok(builder
            .port(config.port())
            .credentials(Credentials::new(
                config.username().to_string(),
                config.password().to_string(),
            ))
            .timeout(Some(self.timeout))
            .build())
    }
}

/// Build the plain-text message for `job` sent from `config`
pub fn build_message(config: &TransportConfig, job: &MailJob) -> Result<Message, TransportError> {
    let from: Mailbox = config
        .sender_email()
        .parse()
        .map_err(|e| TransportError::InvalidAddress(format!("{}: {}", config.sender_email(), e)))?;
    let to: Mailbox = job
        .recipient
        .parse()
        .map_err(|e| TransportError::InvalidAddress(format!("{}: {}", job.recipient, e)))?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(job.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(job.body.clone())
        .map_err(|e| TransportError::Rejected(e.to_string()))
}

/// Classify a lettre SMTP error by its reply code
fn classify(error: lettre::transport::smtp::Error) -> TransportError {
    classify_reply(error.status(), error.to_string())
}

/// Auth codes refuse the credentials, other codes reject the message and
/// no code at all means the conversation never got that far.
fn classify_reply(code: Option<Code>, message: String) -> TransportError {
    match code {
        Some(code) if AUTH_FAILURE_CODES.contains(&code.to_string().as_str()) => {
            TransportError::Authentication(message)
        }
        Some(_) => TransportError::Rejected(message),
        None => TransportError::Connection(message),
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send(&self, config: &TransportConfig, job: &MailJob) -> Result<(), TransportError> {
        let message = build_message(config, job)?;
        let transport = self.connect(config)?;

        debug!(
            "SMTP {}:{} ({:?}) -> {}",
            config.server(),
            config.port(),
            config.security(),
            job.recipient
        );

        transport.send(message).await.map_err(classify)?;
        Ok(())
    }

    async fn check(&self, config: &TransportConfig) -> Result<(), TransportError> {
        let transport = self.connect(config)?;

        match transport.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(TransportError::Connection(format!(
                "{}:{} did not accept the connection",
                config.server(),
                config.port()
            ))),
            Err(e) => Err(classify(e)),
        }
    }
}
