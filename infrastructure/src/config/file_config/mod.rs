//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod generation;
mod pipeline;
mod transports;

pub use generation::FileGenerationConfig;
pub use pipeline::FilePipelineConfig;
pub use transports::FileTransportConfig;

use outreach_domain::{DomainError, SenderProfile, TransportConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("pipeline.concurrency cannot be 0")]
    InvalidConcurrency,

    #[error("{0} cannot be 0")]
    InvalidTimeout(&'static str),

    #[error("generation.model cannot be empty")]
    EmptyModelName,

    #[error("transports[{index}]: {source}")]
    InvalidTransport {
        index: usize,
        #[source]
        source: DomainError,
    },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Text generation settings
    pub generation: FileGenerationConfig,
    /// Identity used in outreach signatures
    pub sender: SenderProfile,
    /// Batch and fetch settings
    pub pipeline: FilePipelineConfig,
    /// Mail accounts, tried in order
    pub transports: Vec<FileTransportConfig>,
}

impl FileConfig {
    /// Validate the entire configuration, returning every problem found.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.pipeline.concurrency == 0 {
            issues.push(ConfigValidationError::InvalidConcurrency);
        }
        if self.pipeline.fetch_timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout(
                "pipeline.fetch_timeout_seconds",
            ));
        }
        if self.generation.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout(
                "generation.timeout_seconds",
            ));
        }
        if self.generation.model.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        if let Err(e) = self.transport_configs() {
            issues.push(e);
        }

        issues
    }

    /// Validated transports in configured order
    pub fn transport_configs(&self) -> Result<Vec<TransportConfig>, ConfigValidationError> {
        self.transports
            .iter()
            .enumerate()
            .map(|(index, transport)| {
                transport
                    .to_transport()
                    .map_err(|source| ConfigValidationError::InvalidTransport { index, source })
            })
            .collect()
    }
}
