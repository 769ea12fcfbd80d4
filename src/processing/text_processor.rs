//! Text normalization

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Collapse every run of whitespace to a single space, lower-case, and trim.
///
/// This is the canonical form every extractor works on. It never fails and
/// `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(text, " ");
    collapsed.to_lowercase().trim().to_string()
}

/// Normalize each line of `text` on its own, keeping the line breaks.
///
/// Lines that normalize to nothing are dropped, so the result is a
/// newline-separated list of non-empty normalized paragraphs.
pub fn normalize_paragraphs(text: &str) -> String {
    paragraphs(text)
        .map(normalize)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split text into newline-delimited paragraphs.
pub fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

/// Character length of a paragraph once surrounding whitespace is removed.
pub fn trimmed_len(paragraph: &str) -> usize {
    paragraph.trim().chars().count()
}
