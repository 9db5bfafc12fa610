//! Dispatch Mail use case
//!
//! Sends one message through every configured transport, in order. Each
//! transport is attempted regardless of what happened to the previous one;
//! the outcome of every attempt is recorded in a [`DispatchReport`].

use crate::ports::mail_transport::MailTransport;
use crate::ports::progress::{DispatchNotifier, NoDispatchNotifier};
use outreach_domain::{
    DispatchReport, MailJob, OutreachResult, TransportAttempt, TransportConfig, TransportOutcome,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Subject used when none is given; `{host}` is replaced per result
pub const DEFAULT_SUBJECT: &str = "Backlink Opportunity for {host}";

/// Errors that prevent dispatch from starting
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("No mail transports configured")]
    NoTransports,
}

/// Build the mail job for a reviewed result.
///
/// Returns `None` when the result has no recipient. `{host}` in
/// `subject_template` is replaced with the result's host.
pub fn job_for_result(result: &OutreachResult, subject_template: &str) -> Option<MailJob> {
    let recipient = result.recipient()?;
    let subject = subject_template.replace("{host}", &result.host);
    Some(MailJob::new(recipient, subject, &result.outreach_body))
}

/// Use case for sending mail and checking transport configuration
pub struct DispatchMailUseCase<T: MailTransport + 'static> {
    transport: Arc<T>,
}

impl<T: MailTransport + 'static> DispatchMailUseCase<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Send `job` through every transport without notifications
    pub async fn execute(
        &self,
        job: &MailJob,
        transports: &[TransportConfig],
    ) -> Result<DispatchReport, DispatchError> {
        self.execute_with_notifier(job, transports, &NoDispatchNotifier)
            .await
    }

    /// Send `job` through every transport, notifying after each attempt.
    ///
    /// Individual failures are recorded, never raised. Duplicate delivery
    /// across transports is expected.
    pub async fn execute_with_notifier(
        &self,
        job: &MailJob,
        transports: &[TransportConfig],
        notifier: &dyn DispatchNotifier,
    ) -> Result<DispatchReport, DispatchError> {
        if transports.is_empty() {
            return Err(DispatchError::NoTransports);
        }

        info!(
            "Sending to {} through {} transport(s)",
            job.recipient,
            transports.len()
        );

        let mut report = DispatchReport::new(&job.recipient);

        for config in transports {
            let outcome = match self.transport.send(config, job).await {
                Ok(()) => {
                    info!("Email sent successfully via {}", config.describe());
                    TransportOutcome::Succeeded
                }
                Err(e) => {
                    warn!("{}: {}", config.describe(), e);
                    e.into()
                }
            };

            report.record(config.describe(), outcome);
            if let Some(attempt) = report.attempts.last() {
                notifier.on_attempt(attempt);
            }
        }

        notifier.on_dispatch_complete(&report.recipient, report.success_count());
        Ok(report)
    }

    /// Connect and authenticate against every transport without sending
    pub async fn check(
        &self,
        transports: &[TransportConfig],
        notifier: &dyn DispatchNotifier,
    ) -> Vec<TransportAttempt> {
        let mut attempts = Vec::with_capacity(transports.len());

        for config in transports {
            let outcome = match self.transport.check(config).await {
                Ok(()) => {
                    info!("{}: connection and login ok", config.describe());
                    TransportOutcome::Succeeded
                }
                Err(e) => {
                    warn!("{}: {}", config.describe(), e);
                    e.into()
                }
            };

            let attempt = TransportAttempt {
                transport: config.describe(),
                outcome,
            };
            notifier.on_attempt(&attempt);
            attempts.push(attempt);
        }

        attempts
    }
}
