//! Work-experience mentions
//!
//! A paragraph counts as experience when it carries a section-heading cue
//! ("work experience:"), a month-year date range ("jan 2018 - present") or
//! a bare year range ("2012-2016").

use crate::processing::education::MIN_PARAGRAPH_CHARS;
use crate::processing::text_processor::{paragraphs, trimmed_len};
use regex::RegexSet;
use std::sync::LazyLock;

const MONTHS: &str = "jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec";

static EXPERIENCE_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(?i)(experience|work|employment|job).*?:".to_string(),
        format!(
            r"(?i)({m})[\s.,]+[0-9]{{4}}\s*[-\x{{2013}}\x{{2014}}]\s*({m}|present)",
            m = MONTHS
        ),
        r"(?i)[0-9]{4}\s*[-\x{2013}\x{2014}]\s*([0-9]{4}|present)".to_string(),
    ])
    .expect("Invalid experience regex")
});

/// Whether a single paragraph matches any experience cue.
pub fn is_experience(paragraph: &str) -> bool {
    EXPERIENCE_PATTERNS.is_match(paragraph)
}

pub fn extract_experience(text: &str) -> Vec<String> {
    extract_experience_with(text, MIN_PARAGRAPH_CHARS)
}

/// Trimmed experience paragraphs longer than `min_chars`, in order.
pub fn extract_experience_with(text: &str, min_chars: usize) -> Vec<String> {
    paragraphs(text)
        .filter(|para| is_experience(para))
        .filter(|para| trimmed_len(para) > min_chars)
        .map(|para| para.trim().to_string())
        .collect()
}
