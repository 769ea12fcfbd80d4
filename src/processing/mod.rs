//! Resume analysis engine
//! Normalization, language analysis and the four extraction strategies

pub mod lexicon;
pub mod text_processor;
pub mod tagger;
pub mod keywords;
pub mod skills;
pub mod education;
pub mod experience;
pub mod analyzer;

pub use analyzer::{analyze, AnalysisResult, AnalysisSettings, ParagraphMode, ResumeAnalyzer};
