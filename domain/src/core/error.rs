//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("Invalid transport configuration: {0}")]
    InvalidTransport(String),
}

impl DomainError {
    /// Build an `InvalidInput` error for a raw input line
    pub fn invalid_input(input: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        DomainError::InvalidInput {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if this error came from an unparsable domain line
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DomainError::InvalidInput { .. })
    }
}
