//! Candidate email set with per-address provenance

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// How an address was discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryMethod {
    /// Regex scan of the raw markup
    Markup,
    /// `mailto:` link target
    Mailto,
    /// Regex scan of rendered text nodes
    VisibleText,
    /// Regex scan of element attribute values
    Attribute,
    /// Regex scan of a linked "contact" page
    ContactPage,
}

impl DiscoveryMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscoveryMethod::Markup => "markup",
            DiscoveryMethod::Mailto => "mailto",
            DiscoveryMethod::VisibleText => "visible_text",
            DiscoveryMethod::Attribute => "attribute",
            DiscoveryMethod::ContactPage => "contact_page",
        }
    }
}

impl std::fmt::Display for DiscoveryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Deduplicated addresses found for one domain (Entity)
///
/// Addresses are lowercased on insertion, so membership is
/// case-insensitive. Iteration is in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateEmailSet {
    entries: BTreeMap<String, BTreeSet<DiscoveryMethod>>,
}

impl CandidateEmailSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `email` as found by `method`. Returns true if the address is new.
    pub fn insert(&mut self, email: &str, method: DiscoveryMethod) -> bool {
        let key = email.trim().to_lowercase();
        if key.is_empty() {
            return false;
        }
        let is_new = !self.entries.contains_key(&key);
        self.entries.entry(key).or_default().insert(method);
        is_new
    }

    /// Record every address from `emails` with the same method
    pub fn extend<I, S>(&mut self, emails: I, method: DiscoveryMethod)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for email in emails {
            self.insert(email.as_ref(), method);
        }
    }

    /// Fold another set into this one, keeping provenance from both
    pub fn merge(&mut self, other: CandidateEmailSet) {
        for (email, methods) in other.entries {
            self.entries.entry(email).or_default().extend(methods);
        }
    }

    pub fn contains(&self, email: &str) -> bool {
        self.entries.contains_key(&email.trim().to_lowercase())
    }

    /// Discovery methods recorded for `email`
    pub fn methods(&self, email: &str) -> Option<&BTreeSet<DiscoveryMethod>> {
        self.entries.get(&email.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Addresses in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Comma-joined rendering used in the selection prompt
    pub fn joined(&self) -> String {
        self.iter().collect::<Vec<_>>().join(", ")
    }
}
