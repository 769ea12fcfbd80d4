//! Skill matching against the skill lexicon

use crate::error::{Result, ResumeAnalyzerError};
use crate::processing::lexicon;
use crate::processing::text_processor::normalize;
use aho_corasick::{AhoCorasick, MatchKind};
use std::sync::LazyLock;

static DEFAULT_MATCHER: LazyLock<SkillMatcher> = LazyLock::new(|| {
    SkillMatcher::new().expect("Invalid built-in skill lexicon")
});

/// Substring matcher over an ordered list of skill terms.
///
/// Every term found anywhere in the text is reported once, in term order.
/// There is no word-boundary check, so "java" matches inside "javascript".
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    automaton: AhoCorasick,
    terms: Vec<String>,
}

impl SkillMatcher {
    /// Create a matcher over the built-in lexicon
    pub fn new() -> Result<Self> {
        Self::with_custom_skills(Vec::new())
    }

    /// Create a matcher over the built-in lexicon followed by `additional`.
    pub fn with_custom_skills(additional: Vec<String>) -> Result<Self> {
        let mut terms: Vec<String> = lexicon::SKILLS.iter().map(|s| s.to_string()).collect();

        for skill in additional {
            let skill = normalize(&skill);
            if !skill.is_empty() && !terms.contains(&skill) {
                terms.push(skill);
            }
        }

        // Standard semantics are required for overlapping search.
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&terms)
            .map_err(|e| {
                ResumeAnalyzerError::TextProcessing(format!("Failed to build skill matcher: {}", e))
            })?;

        Ok(Self { automaton, terms })
    }

    /// Terms contained in `normalized`, in term order.
    pub fn find(&self, normalized: &str) -> Vec<String> {
        let mut found = vec![false; self.terms.len()];
        for mat in self.automaton.find_overlapping_iter(normalized) {
            found[mat.pattern().as_usize()] = true;
        }

        self.terms
            .iter()
            .zip(found)
            .filter_map(|(term, hit)| hit.then(|| term.clone()))
            .collect()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}

/// Match `normalized` against the built-in skill lexicon.
pub fn extract_skills(normalized: &str) -> Vec<String> {
    DEFAULT_MATCHER.find(normalized)
}
