//! Contact domain
//!
//! Email discovery over fetched markup and selection of one recipient
//! from what was found.

pub mod candidates;
pub mod harvest;
pub mod pattern;
pub mod selection;

pub use candidates::{CandidateEmailSet, DiscoveryMethod};
pub use harvest::{MarkupScan, scan_contact_page, scan_markup};
pub use pattern::{find_emails, is_email_shaped};
pub use selection::RecipientSelection;
