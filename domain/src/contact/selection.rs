//! Recipient selection outcome and reply validation

use super::candidates::CandidateEmailSet;
use super::pattern::is_email_shaped;
use serde::{Deserialize, Serialize};

/// Outcome of choosing one outreach recipient for a domain (Value Object)
///
/// "Nothing was found" and "the model suggested something we cannot use"
/// are different situations and stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecipientSelection {
    /// A member of the domain's candidate set
    Selected { email: String },
    /// The candidate set was empty, so no selection was attempted
    NoCandidates,
    /// The model's reply was malformed or not in the candidate set
    Rejected { suggestion: String },
    /// Set by hand during review; not required to be a harvested address
    Manual { email: String },
}

impl RecipientSelection {
    /// Validate a raw model reply against `candidates`
    pub fn from_reply(reply: &str, candidates: &CandidateEmailSet) -> Self {
        if candidates.is_empty() {
            return RecipientSelection::NoCandidates;
        }

        let cleaned = clean_reply(reply);
        if is_email_shaped(&cleaned) && candidates.contains(&cleaned) {
            RecipientSelection::Selected { email: cleaned }
        } else {
            RecipientSelection::Rejected {
                suggestion: reply.trim().to_string(),
            }
        }
    }

    /// The address to send to, if there is one
    pub fn recipient(&self) -> Option<&str> {
        match self {
            RecipientSelection::Selected { email } | RecipientSelection::Manual { email } => {
                Some(email)
            }
            RecipientSelection::NoCandidates | RecipientSelection::Rejected { .. } => None,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.recipient().is_some()
    }
}

/// Strip the wrapping models like to add around a bare address
fn clean_reply(reply: &str) -> String {
    let wrapper = |c: char| matches!(c, '"' | '\'' | '`' | '<' | '>' | '*');

    let mut value = reply.trim().trim_end_matches('.').trim_matches(wrapper);
    if let Some(prefix) = value.get(..7)
        && prefix.eq_ignore_ascii_case("mailto:")
    {
        value = &value[7..];
    }
    value.trim().trim_matches(wrapper).to_lowercase()
}
