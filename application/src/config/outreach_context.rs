//! Per-run outreach context.
//!
//! [`OutreachContext`] is built once at startup from configuration and
//! shared read-only by every domain in a batch. It replaces any ambient
//! "current sender" state: use cases receive it explicitly.

use outreach_domain::{GenerationSettings, SenderProfile};
use serde::{Deserialize, Serialize};

/// Sender identity and generation settings for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutreachContext {
    pub sender: SenderProfile,
    pub generation: GenerationSettings,
}

impl OutreachContext {
    pub fn new(sender: SenderProfile, generation: GenerationSettings) -> Self {
        Self { sender, generation }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.generation.model = model.into();
        self
    }
}
