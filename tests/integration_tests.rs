//! Integration tests for the resume analyzer

use resume_analyzer::config::InputConfig;
use resume_analyzer::input::InputManager;
use resume_analyzer::output::formatter::ReportGenerator;
use resume_analyzer::output::report::AnalysisReport;
use resume_analyzer::processing::text_processor::normalize;
use resume_analyzer::{analyze, AnalysisSettings, ParagraphMode, ResumeAnalyzer, ResumeAnalyzerError};
use resume_analyzer::config::OutputFormat;
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    let path = Path::new("tests/fixtures/sample_resume.txt");

    manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeAnalyzerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeAnalyzerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_file_size_cap() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.txt");
    std::fs::write(&path, "x".repeat(64)).unwrap();

    let mut manager = InputManager::new().with_max_file_size(32);
    let result = manager.extract_text(&path).await;
    assert!(matches!(
        result,
        Err(ResumeAnalyzerError::FileTooLarge { size: 64, limit: 32, .. })
    ));
}

#[tokio::test]
async fn test_extension_allow_list() {
    let config = InputConfig {
        allowed_extensions: vec!["pdf".to_string()],
        ..InputConfig::default()
    };
    let mut manager = InputManager::from_config(&config);
    let result = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await;
    assert!(matches!(result, Err(ResumeAnalyzerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_end_to_end_txt_analysis() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let result = analyze(&text);

    for skill in ["python", "javascript", "java", "react", "docker", "kubernetes", "postgresql", "sql"] {
        assert!(result.skills.contains(&skill.to_string()), "missing skill {}", skill);
    }

    assert_eq!(
        result.experience,
        vec![
            "work experience: jan 2018 - present, senior engineer at acme corp",
            "initech inc. 2012-2016, backend developer working with java and react",
        ]
    );
    assert_eq!(
        result.education,
        vec!["b.sc in computer science, university of washington, 2012"]
    );

    assert!(!result.keywords.is_empty());
    assert!(result.keywords.len() <= 50);
    assert!(result.keywords.contains(&"acme corp".to_string()));
}

#[tokio::test]
async fn test_end_to_end_markdown_analysis() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    let result = analyze(&text);
    assert!(result
        .experience
        .iter()
        .any(|e| e.starts_with("work experience: jan 2018 - present")));
    assert_eq!(result.education.len(), 1);
}

#[test]
fn test_collapsed_mode_single_paragraph() {
    let text = std::fs::read_to_string("tests/fixtures/sample_resume.txt").unwrap();
    let analyzer = ResumeAnalyzer::with_settings(AnalysisSettings {
        paragraph_mode: ParagraphMode::Collapsed,
        ..AnalysisSettings::default()
    })
    .unwrap();

    let result = analyzer.analyze(&text);
    assert_eq!(result.experience, vec![normalize(&text)]);
    assert_eq!(result.education, vec![normalize(&text)]);
    // Keywords and skills do not depend on paragraph handling.
    assert_eq!(result.skills, analyze(&text).skills);
    assert_eq!(result.keywords, analyze(&text).keywords);
}

#[test]
fn test_empty_document() {
    let result = analyze("");
    assert!(result.keywords.is_empty());
    assert!(result.skills.is_empty());
    assert!(result.education.is_empty());
    assert!(result.experience.is_empty());
}

#[test]
fn test_year_range_paragraph() {
    let result = analyze("Summary\n2012-2016 Acme\nOther");
    assert_eq!(result.experience, vec!["2012-2016 acme"]);
}

#[test]
fn test_report_rendering_all_formats() {
    let text = std::fs::read_to_string("tests/fixtures/sample_resume.txt").unwrap();
    let report = AnalysisReport::new(
        "tests/fixtures/sample_resume.txt",
        &text,
        analyze(&text),
        ParagraphMode::Lines,
        1,
    );

    let generator = ReportGenerator::new();
    for format in [OutputFormat::Console, OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Html] {
        let rendered = generator.generate_report(&report, &format).unwrap();
        assert!(rendered.contains("postgresql"), "{:?} output lacks skills", format);
    }
}
