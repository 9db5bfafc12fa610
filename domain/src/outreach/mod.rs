//! Outreach domain
//!
//! The sender's profile and the per-domain result record produced by
//! the pipeline.

mod profile;
mod result;

pub use profile::SenderProfile;
pub use result::OutreachResult;
