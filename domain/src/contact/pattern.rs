//! Email-shaped token matching

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+").expect("email token pattern")
});

static EMAIL_EXACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)+$").expect("email exact pattern")
});

/// Find every email-shaped token in `text`, lowercased.
///
/// Sentence punctuation swallowed by the domain part (`me@foo.com.`) is
/// stripped; tokens left without a dotted domain are dropped.
pub fn find_emails(text: &str) -> impl Iterator<Item = String> + '_ {
    EMAIL_TOKEN
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches(['.', '-']).to_lowercase())
        .filter(|candidate| is_email_shaped(candidate))
}

/// Check whether the whole of `value` is a single email address
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_EXACT.is_match(value)
}
