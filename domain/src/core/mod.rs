//! Core domain concepts shared across all subdomains.
//!
//! - [`target::DomainTarget`] — one normalized website to process
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod target;
