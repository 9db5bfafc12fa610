//! Page snapshot entity and content extraction

use super::text::collapse_whitespace;
use scraper::{ElementRef, Html};
use url::Url;

/// Markup retrieved for one URL, plus the content signals extracted from it
///
/// Missing structural elements never fail extraction: an absent title,
/// description or paragraph body is an empty string, which downstream
/// stages read as "no signal".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    url: Url,
    markup: String,
    title: String,
    description: String,
    main_text: String,
}

impl PageSnapshot {
    /// Parse `markup` fetched from `url` and extract its content signals
    pub fn from_markup(url: Url, markup: impl Into<String>) -> Self {
        let markup = markup.into();
        let document = Html::parse_document(&markup);

        let title = extract_title(&document);
        let description = extract_description(&document);
        let main_text = extract_paragraph_text(&document);

        Self {
            url,
            markup,
            title,
            description,
            main_text,
        }
    }

    /// The resolved URL this markup was fetched from
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Paragraph text of the whole page
    pub fn main_text(&self) -> &str {
        &self.main_text
    }

    /// The first `max_chars` characters of the paragraph text, for prompts
    pub fn excerpt(&self, max_chars: usize) -> &str {
        match self.main_text.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.main_text[..idx],
            None => &self.main_text,
        }
    }
}

fn elements<'a>(document: &'a Html, name: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == name)
}

fn extract_title(document: &Html) -> String {
    elements(document, "title")
        .next()
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .unwrap_or_default()
}

fn extract_description(document: &Html) -> String {
    elements(document, "meta")
        .find(|el| {
            el.value()
                .attr("name")
                .is_some_and(|name| name.trim().eq_ignore_ascii_case("description"))
        })
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default()
}

fn extract_paragraph_text(document: &Html) -> String {
    elements(document, "p")
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
