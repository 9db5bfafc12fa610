//! SMTP mail adapter
//!
//! Implements the [`MailTransport`](outreach_application::MailTransport)
//! port with `lettre`: implicit TLS on port 465, STARTTLS otherwise.

mod transport;

pub use transport::{SmtpMailTransport, build_message};
