//! Prompt templates for outreach drafting and recipient selection

use crate::outreach::SenderProfile;

/// Site signals fed into the outreach prompt
#[derive(Debug, Clone, Copy)]
pub struct SiteSummary<'a> {
    pub host: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    /// Leading slice of the page's paragraph text
    pub excerpt: &'a str,
}

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// User prompt asking for a personalized backlink outreach email
    pub fn outreach_prompt(site: &SiteSummary<'_>, sender: &SenderProfile) -> String {
        let mut prompt = format!(
            r#"Based on the following information about the website {}:

Title: {}
Description: {}
Main Text: {}...

Craft a personalized email outreach for a backlink opportunity.
The email should be friendly, engaging, and highlight the relevance of the website's content to our business.
Keep the email concise and actionable.
"#,
            site.host, site.title, site.description, site.excerpt
        );

        prompt.push_str("\nEnd the email with a signature containing the following details:\n");
        for (label, value) in sender.signature_fields() {
            prompt.push_str(&format!("{}: {}\n", label, value));
        }

        prompt
    }

    /// User prompt asking which harvested address should receive the outreach
    pub fn selection_prompt(host: &str, candidates: &str) -> String {
        format!(
            r#"Here are the email addresses found on the website {}:

{}

Based on the website content and the personalized outreach email, which email address would be the most appropriate to send the outreach to? Choose exactly one address from the list above. Please make sure to only respond with the suggested email, nothing else!"#,
            host, candidates
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outreach_prompt_contains_site_and_signature() {
        let site = SiteSummary {
            host: "foo.com",
            title: "Foo",
            description: "",
            excerpt: "We sell foo.",
        };
        let sender = SenderProfile {
            name: "Ada".to_string(),
            business_name: "Ada Links".to_string(),
            ..Default::default()
        };
        let prompt = PromptTemplate::outreach_prompt(&site, &sender);

        assert!(prompt.contains("website foo.com"));
        assert!(prompt.contains("Title: Foo\n"));
        assert!(prompt.contains("Description: \n"));
        assert!(prompt.contains("Main Text: We sell foo...."));
        assert!(prompt.contains("Name: Ada\n"));
        assert!(prompt.contains("Business Name: Ada Links\n"));
        assert!(prompt.contains("Phone Number: \n"));
    }

    #[test]
    fn test_selection_prompt_lists_candidates() {
        let prompt = PromptTemplate::selection_prompt("foo.com", "a@foo.com, b@foo.com");
        assert!(prompt.contains("website foo.com"));
        assert!(prompt.contains("\n\na@foo.com, b@foo.com\n\n"));
        assert!(prompt.contains("only respond with the suggested email"));
    }
}
