//! Mail domain
//!
//! Transport configuration, the job to send and the per-transport report.

mod job;
mod transport;

pub use job::{DispatchReport, MailJob, TransportAttempt, TransportOutcome};
pub use transport::{IMPLICIT_TLS_PORT, TransportConfig, TransportSecurity};
