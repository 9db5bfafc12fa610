//! Prompt domain
//!
//! Templates for the two text-generation calls made per domain.

mod template;

pub use template::{PromptTemplate, SiteSummary};
