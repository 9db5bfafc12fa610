//! Outreach result entity

use crate::contact::{CandidateEmailSet, RecipientSelection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The pipeline's output for one domain (Entity)
///
/// Only changed through explicit review (`with_body`, `with_recipient`)
/// before dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutreachResult {
    /// Canonical host of the processed domain
    pub host: String,
    /// URL that was fetched
    pub url: String,
    /// Generated outreach message body
    pub outreach_body: String,
    /// Which address to send to, or why there is none
    pub selection: RecipientSelection,
    /// Every address found for this domain
    pub candidates: CandidateEmailSet,
    pub generated_at: DateTime<Utc>,
}

impl OutreachResult {
    pub fn new(
        host: impl Into<String>,
        url: impl Into<String>,
        outreach_body: impl Into<String>,
        selection: RecipientSelection,
        candidates: CandidateEmailSet,
    ) -> Self {
        Self {
            host: host.into(),
            url: url.into(),
            outreach_body: outreach_body.into(),
            selection,
            candidates,
            generated_at: Utc::now(),
        }
    }

    /// The address this result would be sent to
    pub fn recipient(&self) -> Option<&str> {
        self.selection.recipient()
    }

    /// Replace the message body after review
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.outreach_body = body.into();
        self
    }

    /// Override the recipient after review.
    ///
    /// A harvested address becomes a regular selection; anything else is
    /// kept but marked as a manual choice.
    pub fn with_recipient(mut self, email: &str) -> Self {
        let email = email.trim().to_lowercase();
        self.selection = if self.candidates.contains(&email) {
            RecipientSelection::Selected { email }
        } else {
            RecipientSelection::Manual { email }
        };
        self
    }
}
