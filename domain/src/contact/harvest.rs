//! Markup extraction passes for email harvesting
//!
//! Each pass looks at the same document from a different angle and
//! contributes independently to one [`CandidateEmailSet`]:
//!
//! | Pass | Source | Method |
//! |------|--------|--------|
//! | 1 | raw markup | [`DiscoveryMethod::Markup`] |
//! | 2 | `mailto:` anchor targets | [`DiscoveryMethod::Mailto`] |
//! | 3 | rendered text nodes | [`DiscoveryMethod::VisibleText`] |
//! | 4 | attribute values | [`DiscoveryMethod::Attribute`] |
//!
//! Anchors labelled "Contact" / "Contact Us" are collected as follow-up
//! links; fetching them is left to the caller, whose results go through
//! [`scan_contact_page`].

use super::candidates::{CandidateEmailSet, DiscoveryMethod};
use super::pattern::{find_emails, is_email_shaped};
use crate::page::text::{visible_text, visible_text_nodes};
use regex::Regex;
use scraper::{ElementRef, Html};
use std::sync::LazyLock;
use url::Url;

static CONTACT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bcontact(\s+us)?\b").expect("contact label pattern"));

/// Result of scanning one page's markup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupScan {
    /// Addresses found by passes 1-4
    pub candidates: CandidateEmailSet,
    /// Resolved "contact" links worth fetching, deduplicated and capped
    pub contact_links: Vec<Url>,
}

/// Run passes 1-4 over `markup` and collect up to `max_contact_links`
/// contact-page links resolved against `base`.
pub fn scan_markup(markup: &str, base: &Url, max_contact_links: usize) -> MarkupScan {
    let document = Html::parse_document(markup);
    let mut candidates = CandidateEmailSet::new();

    candidates.extend(find_emails(markup), DiscoveryMethod::Markup);
    candidates.extend(mailto_addresses(&document), DiscoveryMethod::Mailto);
    for node in visible_text_nodes(&document) {
        candidates.extend(find_emails(&node), DiscoveryMethod::VisibleText);
    }
    candidates.extend(attribute_emails(&document), DiscoveryMethod::Attribute);

    let contact_links = contact_links(&document, base, max_contact_links);

    MarkupScan {
        candidates,
        contact_links,
    }
}

/// Regex-scan the visible text of a fetched contact page
pub fn scan_contact_page(markup: &str) -> CandidateEmailSet {
    let document = Html::parse_document(markup);
    let mut candidates = CandidateEmailSet::new();
    candidates.extend(
        find_emails(&visible_text(&document)),
        DiscoveryMethod::ContactPage,
    );
    candidates
}

fn anchors(document: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "a")
}

fn mailto_addresses(document: &Html) -> Vec<String> {
    let mut found = Vec::new();

    for anchor in anchors(document) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let href = href.trim();
        let Some(prefix) = href.get(..7) else {
            continue;
        };
        if !prefix.eq_ignore_ascii_case("mailto:") {
            continue;
        }

        let recipients = href[7..].split('?').next().unwrap_or_default();
        for address in recipients.split(',') {
            let address = address.trim().to_lowercase();
            if is_email_shaped(&address) {
                found.push(address);
            }
        }
    }

    found
}

fn attribute_emails(document: &Html) -> Vec<String> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .flat_map(|el| {
            el.value()
                .attrs()
                .flat_map(|(_, value)| find_emails(value).collect::<Vec<_>>())
                .collect::<Vec<_>>()
        })
        .collect()
}

fn contact_links(document: &Html, base: &Url, max_links: usize) -> Vec<Url> {
    let mut page = base.clone();
    page.set_fragment(None);

    let mut links: Vec<Url> = Vec::new();

    for anchor in anchors(document) {
        if links.len() >= max_links {
            break;
        }

        let label = anchor.text().collect::<String>();
        if !CONTACT_LABEL.is_match(&label) {
            continue;
        }

        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Ok(mut resolved) = base.join(href.trim()) else {
            continue;
        };
        if !matches!(resolved.scheme(), "http" | "https") {
            continue;
        }
        resolved.set_fragment(None);

        if resolved != page && !links.contains(&resolved) {
            links.push(resolved);
        }
    }

    links
}
