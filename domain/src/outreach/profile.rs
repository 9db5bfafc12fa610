//! Sender profile value object

use serde::{Deserialize, Serialize};

/// Who the outreach is from; rendered into the message signature
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SenderProfile {
    pub name: String,
    pub business_name: String,
    pub website: String,
    pub business_description: String,
    pub email: String,
    pub phone: String,
}

impl SenderProfile {
    /// Signature lines in display order, as (label, value) pairs
    pub fn signature_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("Name", self.name.as_str()),
            ("Business Name", self.business_name.as_str()),
            ("Website", self.website.as_str()),
            ("Business Description", self.business_description.as_str()),
            ("Email", self.email.as_str()),
            ("Phone Number", self.phone.as_str()),
        ]
    }

    /// True when no field carries a value
    pub fn is_empty(&self) -> bool {
        self.signature_fields()
            .iter()
            .all(|(_, value)| value.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_empty() {
        assert!(SenderProfile::default().is_empty());
    }

    #[test]
    fn test_signature_fields_order() {
        let profile = SenderProfile {
            name: "Ada".to_string(),
            phone: "555-0100".to_string(),
            ..Default::default()
        };
        let fields = profile.signature_fields();
        assert_eq!(fields[0], ("Name", "Ada"));
        assert_eq!(fields[5], ("Phone Number", "555-0100"));
        assert!(!profile.is_empty());
    }
}
