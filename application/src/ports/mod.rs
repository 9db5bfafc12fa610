//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod mail_transport;
pub mod page_fetcher;
pub mod progress;
pub mod text_generator;
