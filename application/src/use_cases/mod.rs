//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod dispatch_mail;
pub mod draft_outreach;
pub mod harvest_contacts;
pub mod run_outreach;

#[cfg(test)]
pub(crate) mod test_support;
