//! Presentation layer for outreach-scout
//!
//! This crate contains CLI definitions, output formatters
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat, ScrapeArgs, SendArgs};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{DispatchReporter, ProgressReporter, SimpleProgress};
