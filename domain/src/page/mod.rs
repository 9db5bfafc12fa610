//! Page domain
//!
//! Fetched markup and the content signals (title, description, paragraph
//! text, visible text) extracted from it.

mod snapshot;
pub mod text;

pub use snapshot::PageSnapshot;
