//! Domain layer for outreach-scout
//!
//! This crate contains the core business logic, entities, and value objects.
//! It performs no I/O: markup arrives as strings and leaves as extracted
//! signals, and every network-facing step lives behind a port in the
//! application layer.
//!
//! # Core Concepts
//!
//! ## Targets and pages
//!
//! - **DomainTarget**: one normalized input line (URL + canonical host)
//! - **PageSnapshot**: fetched markup with title, description and paragraph text
//!
//! ## Contacts
//!
//! - **CandidateEmailSet**: deduplicated addresses with discovery provenance
//! - **RecipientSelection**: the chosen address, or why there is none
//!
//! ## Mail
//!
//! - **TransportConfig**: one validated sending account
//! - **DispatchReport**: per-transport outcomes for one message

pub mod contact;
pub mod core;
pub mod generation;
pub mod mail;
pub mod outreach;
pub mod page;
pub mod prompt;

// Re-export commonly used types
pub use contact::{
    CandidateEmailSet, DiscoveryMethod, MarkupScan, RecipientSelection, find_emails,
    is_email_shaped, scan_contact_page, scan_markup,
};
pub use core::{error::DomainError, target::DomainTarget};
pub use generation::{GenerationRequest, GenerationSettings, Message, Role};
pub use mail::{
    DispatchReport, IMPLICIT_TLS_PORT, MailJob, TransportAttempt, TransportConfig,
    TransportOutcome, TransportSecurity,
};
pub use outreach::{OutreachResult, SenderProfile};
pub use page::PageSnapshot;
pub use prompt::{PromptTemplate, SiteSummary};
