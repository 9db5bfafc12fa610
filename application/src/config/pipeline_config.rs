//! Pipeline configuration: batch fan-out and per-domain limits.
//!
//! [`PipelineConfig`] groups the static settings that control
//! [`RunOutreachUseCase`](crate::use_cases::run_outreach::RunOutreachUseCase).
//! Network timeouts belong to the fetcher adapter, not here.

use serde::{Deserialize, Serialize};

/// Batch and per-domain control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Maximum number of domains processed at the same time.
    pub concurrency: usize,
    /// Maximum number of contact pages fetched per domain.
    pub max_contact_pages: usize,
    /// Number of characters of paragraph text passed to the outreach prompt.
    pub excerpt_chars: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            concurrency: 4,
            max_contact_pages: 3,
            excerpt_chars: 500,
        }
    }
}

impl PipelineConfig {
    // ==================== Builder Methods ====================

    /// Zero is treated as one.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_max_contact_pages(mut self, max: usize) -> Self {
        self.max_contact_pages = max;
        self
    }

    pub fn with_excerpt_chars(mut self, chars: usize) -> Self {
        self.excerpt_chars = chars;
        self
    }
}
