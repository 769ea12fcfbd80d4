//! Report structures handed to the formatters

use crate::processing::{AnalysisResult, ParagraphMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metadata: ReportMetadata,
    pub summary: AnalysisSummary,
    /// Serialized as top-level `keywords`, `skills`, `education` and
    /// `experience` fields.
    #[serde(flatten)]
    pub result: AnalysisResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub source_file: String,
    pub generated_at: DateTime<Utc>,
    pub analyzer_version: String,
    pub character_count: usize,
    pub processing_time_ms: u64,
    pub paragraph_mode: ParagraphMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub keyword_count: usize,
    pub skill_count: usize,
    pub education_count: usize,
    pub experience_count: usize,
}

impl AnalysisSummary {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            keyword_count: result.keywords.len(),
            skill_count: result.skills.len(),
            education_count: result.education.len(),
            experience_count: result.experience.len(),
        }
    }
}

impl AnalysisReport {
    pub fn new(
        source_file: impl Into<String>,
        raw_text: &str,
        result: AnalysisResult,
        paragraph_mode: ParagraphMode,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            metadata: ReportMetadata {
                source_file: source_file.into(),
                generated_at: Utc::now(),
                analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
                character_count: raw_text.chars().count(),
                processing_time_ms,
                paragraph_mode,
            },
            summary: AnalysisSummary::from_result(&result),
            result,
        }
    }

    /// File name of the source, without its directory.
    pub fn source_name(&self) -> String {
        Path::new(&self.metadata.source_file)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.metadata.source_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            keywords: vec!["acme corp".to_string(), "engineer".to_string()],
            skills: vec!["python".to_string()],
            education: vec![],
            experience: vec!["work experience: jan 2018 - present".to_string()],
        }
    }

    #[test]
    fn test_summary_counts() {
        let report = AnalysisReport::new("cv.txt", "Some text", sample_result(), ParagraphMode::Lines, 3);
        assert_eq!(report.summary.keyword_count, 2);
        assert_eq!(report.summary.skill_count, 1);
        assert_eq!(report.summary.education_count, 0);
        assert_eq!(report.summary.experience_count, 1);
        assert_eq!(report.metadata.character_count, 9);
    }

    #[test]
    fn test_json_shape() {
        let report = AnalysisReport::new("/tmp/cv.pdf", "", sample_result(), ParagraphMode::Lines, 0);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["skills"][0], "python");
        assert_eq!(value["keywords"].as_array().unwrap().len(), 2);
        assert_eq!(value["metadata"]["paragraph_mode"], "lines");

        let back: AnalysisReport = serde_json::from_value(value).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_source_name() {
        let report = AnalysisReport::new("/tmp/resumes/cv.pdf", "", sample_result(), ParagraphMode::Lines, 0);
        assert_eq!(report.source_name(), "cv.pdf");
    }
}
