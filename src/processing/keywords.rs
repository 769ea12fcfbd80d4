//! Keyword extraction from named entities and nouns

use crate::processing::tagger::TaggedDocument;
use log::debug;
use std::collections::HashSet;

/// Default cap on the number of keywords returned.
pub const MAX_KEYWORDS: usize = 50;

/// Terms must be longer than this many characters to count as keywords.
pub const MIN_KEYWORD_CHARS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordOptions {
    pub max_keywords: usize,
    pub min_chars: usize,
}

impl Default for KeywordOptions {
    fn default() -> Self {
        Self {
            max_keywords: MAX_KEYWORDS,
            min_chars: MIN_KEYWORD_CHARS,
        }
    }
}

/// Extract salient terms with the default limits.
pub fn extract_keywords(normalized: &str) -> Vec<String> {
    extract_keywords_with(normalized, KeywordOptions::default())
}

/// Collect entity texts, then noun tokens, longer than `min_chars`.
///
/// Output is duplicate-free in first-seen order and capped at
/// `max_keywords`. A document that cannot be parsed yields no keywords.
pub fn extract_keywords_with(normalized: &str, options: KeywordOptions) -> Vec<String> {
    let doc = match TaggedDocument::parse(normalized) {
        Ok(doc) => doc,
        Err(e) => {
            debug!("Keyword extraction skipped: {}", e);
            return Vec::new();
        }
    };

    let entity_terms = doc.entities().iter().map(|e| e.text.as_str());
    let noun_terms = doc
        .tokens()
        .iter()
        .filter(|t| t.is_noun())
        .map(|t| t.text.as_str());

    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    for term in entity_terms.chain(noun_terms) {
        if term.chars().count() <= options.min_chars {
            continue;
        }
        let term = term.to_lowercase();
        if seen.insert(term.clone()) {
            keywords.push(term);
        }
    }

    keywords.truncate(options.max_keywords);
    keywords
}
