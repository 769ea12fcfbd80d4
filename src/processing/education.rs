//! Education mentions

use crate::processing::lexicon;
use crate::processing::text_processor::{paragraphs, trimmed_len};

/// Paragraphs must be longer than this many characters once trimmed.
pub const MIN_PARAGRAPH_CHARS: usize = 10;

pub fn extract_education(text: &str) -> Vec<String> {
    extract_education_with(text, MIN_PARAGRAPH_CHARS)
}

/// Trimmed paragraphs that mention any education term and are longer than
/// `min_chars`, in paragraph order.
pub fn extract_education_with(text: &str, min_chars: usize) -> Vec<String> {
    paragraphs(text)
        .filter(|para| lexicon::EDUCATION.iter().any(|term| para.contains(term)))
        .filter(|para| trimmed_len(para) > min_chars)
        .map(|para| para.trim().to_string())
        .collect()
}
