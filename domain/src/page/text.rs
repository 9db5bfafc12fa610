//! Visible-text collection from parsed markup

use scraper::{ElementRef, Html, Node};

/// Elements whose subtree never renders as text
const SKIP_TAGS: [&str; 5] = ["script", "style", "noscript", "template", "svg"];

/// Collect the trimmed, non-empty text nodes a browser would render.
pub fn visible_text_nodes(document: &Html) -> Vec<String> {
    collect_element_text(document.root_element())
}

/// Visible text of the whole document, joined with single spaces
pub fn visible_text(document: &Html) -> String {
    visible_text_nodes(document).join(" ")
}

fn collect_element_text(element: ElementRef) -> Vec<String> {
    if SKIP_TAGS.contains(&element.value().name()) {
        return Vec::new();
    }

    let mut parts = Vec::new();

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let t = text.trim();
                if !t.is_empty() {
                    parts.push(t.to_string());
                }
            }
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    parts.extend(collect_element_text(child_el));
                }
            }
            _ => {}
        }
    }

    parts
}

/// Collapse runs of whitespace into single spaces
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
