//! Analysis coordinator: normalizes once, runs the four extractors and
//! assembles the result.

use crate::error::Result;
use crate::processing::education::{extract_education_with, MIN_PARAGRAPH_CHARS};
use crate::processing::experience::extract_experience_with;
use crate::processing::keywords::{extract_keywords_with, KeywordOptions, MAX_KEYWORDS, MIN_KEYWORD_CHARS};
use crate::processing::skills::SkillMatcher;
use crate::processing::text_processor::{normalize, normalize_paragraphs};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static DEFAULT_ANALYZER: LazyLock<ResumeAnalyzer> =
    LazyLock::new(|| ResumeAnalyzer::new().expect("Invalid built-in skill lexicon"));

/// The four categorized lists produced for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub keywords: Vec<String>,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub experience: Vec<String>,
}

impl AnalysisResult {
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
            && self.skills.is_empty()
            && self.education.is_empty()
            && self.experience.is_empty()
    }
}

/// How paragraphs are formed for the education and experience scans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphMode {
    /// Split the raw text on newlines, then normalize each paragraph.
    #[default]
    Lines,
    /// Scan the fully normalized text, which has no newlines left, as a
    /// single paragraph.
    Collapsed,
}

impl fmt::Display for ParagraphMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParagraphMode::Lines => write!(f, "lines"),
            ParagraphMode::Collapsed => write!(f, "collapsed"),
        }
    }
}

impl std::str::FromStr for ParagraphMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lines" => Ok(ParagraphMode::Lines),
            "collapsed" => Ok(ParagraphMode::Collapsed),
            _ => Err(format!(
                "Invalid paragraph mode: {}. Supported: lines, collapsed",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    pub max_keywords: usize,
    pub min_keyword_chars: usize,
    pub min_paragraph_chars: usize,
    pub paragraph_mode: ParagraphMode,
    /// Extra skill terms matched after the built-in lexicon.
    #[serde(default)]
    pub extra_skills: Vec<String>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            max_keywords: MAX_KEYWORDS,
            min_keyword_chars: MIN_KEYWORD_CHARS,
            min_paragraph_chars: MIN_PARAGRAPH_CHARS,
            paragraph_mode: ParagraphMode::Lines,
            extra_skills: Vec::new(),
        }
    }
}

/// Resume analysis engine. Immutable after construction and safe to share
/// across threads.
#[derive(Debug, Clone)]
pub struct ResumeAnalyzer {
    settings: AnalysisSettings,
    skill_matcher: SkillMatcher,
}

impl ResumeAnalyzer {
    pub fn new() -> Result<Self> {
        Self::with_settings(AnalysisSettings::default())
    }

    pub fn with_settings(settings: AnalysisSettings) -> Result<Self> {
        let skill_matcher = SkillMatcher::with_custom_skills(settings.extra_skills.clone())?;
        Ok(Self {
            settings,
            skill_matcher,
        })
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    pub fn skill_count(&self) -> usize {
        self.skill_matcher.term_count()
    }

    /// Analyze raw document text. Never fails; unusable input gives empty
    /// lists.
    pub fn analyze(&self, raw: &str) -> AnalysisResult {
        let normalized = normalize(raw);
        let paragraph_text = match self.settings.paragraph_mode {
            ParagraphMode::Lines => normalize_paragraphs(raw),
            ParagraphMode::Collapsed => normalized.clone(),
        };

        let keyword_options = KeywordOptions {
            max_keywords: self.settings.max_keywords,
            min_chars: self.settings.min_keyword_chars,
        };

        let result = AnalysisResult {
            keywords: extract_keywords_with(&normalized, keyword_options),
            skills: self.skill_matcher.find(&normalized),
            education: extract_education_with(&paragraph_text, self.settings.min_paragraph_chars),
            experience: extract_experience_with(&paragraph_text, self.settings.min_paragraph_chars),
        };

        debug!(
            "Analyzed {} chars: {} keywords, {} skills, {} education, {} experience",
            raw.chars().count(),
            result.keywords.len(),
            result.skills.len(),
            result.education.len(),
            result.experience.len()
        );

        result
    }
}

/// Analyze raw text with default settings.
pub fn analyze(raw: &str) -> AnalysisResult {
    DEFAULT_ANALYZER.analyze(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Smith\n\
        Senior Software Engineer\n\
        \n\
        Work Experience: Jan 2018 - Present, Senior Engineer at Acme Corp\n\
        Built payment services in Python and Go.\n\
        Initech Inc. 2012-2016, backend developer\n\
        \n\
        Education\n\
        B.Sc in Computer Science, University of Toronto, 2012\n\
        Skills: Docker, Kubernetes, PostgreSQL";

    #[test]
    fn test_empty_input() {
        let result = analyze("");
        assert!(result.is_empty());
        assert_eq!(result, AnalysisResult::default());
    }

    #[test]
    fn test_scenario_python_javascript_bsc() {
        let text = "I have 5 years experience in Python and JavaScript. \
                    B.Sc in Computer Science, MIT, 2015.";
        let result = analyze(text);
        assert!(result.skills.contains(&"python".to_string()));
        assert!(result.skills.contains(&"javascript".to_string()));
        assert!(result
            .education
            .iter()
            .any(|e| e.contains("b.sc") || e.contains("computer science")));
    }

    #[test]
    fn test_uppercase_skill() {
        assert_eq!(analyze("PYTHON").skills, vec!["python"]);
    }

    #[test]
    fn test_lines_mode_splits_paragraphs() {
        let result = analyze(RESUME);
        assert_eq!(
            result.experience,
            vec![
                "work experience: jan 2018 - present, senior engineer at acme corp",
                "initech inc. 2012-2016, backend developer",
            ]
        );
        assert_eq!(
            result.education,
            vec!["b.sc in computer science, university of toronto, 2012"]
        );
        assert!(result.skills.contains(&"docker".to_string()));
        assert!(result.skills.contains(&"postgresql".to_string()));
        assert!(result.keywords.contains(&"acme corp".to_string()));
    }

    #[test]
    fn test_collapsed_mode_scans_whole_text() {
        let settings = AnalysisSettings {
            paragraph_mode: ParagraphMode::Collapsed,
            ..AnalysisSettings::default()
        };
        let analyzer = ResumeAnalyzer::with_settings(settings).unwrap();
        let result = analyzer.analyze(RESUME);

        let whole = normalize(RESUME);
        assert_eq!(result.experience, vec![whole.clone()]);
        assert_eq!(result.education, vec![whole]);
    }

    #[test]
    fn test_result_invariants() {
        let result = analyze(RESUME);
        assert!(result.keywords.len() <= MAX_KEYWORDS);

        let mut unique = result.keywords.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), result.keywords.len());

        for entry in result.education.iter().chain(result.experience.iter()) {
            assert!(entry.trim().chars().count() > MIN_PARAGRAPH_CHARS);
        }
    }

    #[test]
    fn test_large_document_keeps_keywords() {
        let mut text = "built payment platforms\n".repeat(70_000);
        text.push_str("Work Experience: Jan 2018 - Present, Senior Engineer at Acme Corp\n");

        let result = analyze(&text);
        assert!(result.keywords.contains(&"payment".to_string()));
        assert_eq!(result.experience.len(), 1);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(analyze(RESUME), analyze(RESUME));
    }

    #[test]
    fn test_extra_skills() {
        let settings = AnalysisSettings {
            extra_skills: vec!["Rust".to_string()],
            ..AnalysisSettings::default()
        };
        let analyzer = ResumeAnalyzer::with_settings(settings).unwrap();
        assert_eq!(analyzer.analyze("Rust and SQL").skills, vec!["sql", "rust"]);
    }

    #[test]
    fn test_paragraph_mode_parse() {
        assert_eq!("LINES".parse::<ParagraphMode>().unwrap(), ParagraphMode::Lines);
        assert_eq!("collapsed".parse::<ParagraphMode>().unwrap(), ParagraphMode::Collapsed);
        assert!("single".parse::<ParagraphMode>().is_err());
    }

    #[test]
    fn test_shared_across_threads() {
        let analyzer = std::sync::Arc::new(ResumeAnalyzer::new().unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let analyzer = analyzer.clone();
                std::thread::spawn(move || analyzer.analyze(RESUME))
            })
            .collect();
        let expected = analyze(RESUME);
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
