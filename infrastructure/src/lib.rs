//! Infrastructure layer for outreach-scout
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod openai;
pub mod smtp;
pub mod web;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGenerationConfig, FilePipelineConfig,
    FileTransportConfig,
};
pub use openai::OpenAiTextGenerator;
pub use smtp::SmtpMailTransport;
pub use web::{FetchOptions, HttpPageFetcher};
