//! Configuration management for the resume analyzer

use crate::error::{Result, ResumeAnalyzerError};
use crate::processing::text_processor::normalize;
use crate::processing::AnalysisSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default upload cap: 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 << 20;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub analysis: AnalysisSettings,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub max_file_size_bytes: u64,
    pub enable_cache: bool,
    pub allowed_extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub pretty_json: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE,
            enable_cache: true,
            allowed_extensions: vec!["pdf".to_string(), "txt".to_string(), "md".to_string()],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            pretty_json: true,
            color_output: true,
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            ResumeAnalyzerError::Configuration(format!(
                "Failed to parse config {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }

    /// Update a single dotted key such as `analysis.max_keywords`.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "analysis.max_keywords" => self.analysis.max_keywords = parse_value(key, value)?,
            "analysis.min_keyword_chars" => {
                self.analysis.min_keyword_chars = parse_value(key, value)?
            }
            "analysis.min_paragraph_chars" => {
                self.analysis.min_paragraph_chars = parse_value(key, value)?
            }
            "analysis.paragraph_mode" => {
                self.analysis.paragraph_mode =
                    value.parse().map_err(ResumeAnalyzerError::Configuration)?
            }
            "analysis.extra_skills" => {
                self.analysis.extra_skills = value
                    .split(',')
                    .map(normalize)
                    .filter(|s| !s.is_empty())
                    .collect()
            }
            "input.max_file_size_bytes" => {
                self.input.max_file_size_bytes = parse_value(key, value)?
            }
            "input.enable_cache" => self.input.enable_cache = parse_value(key, value)?,
            "input.allowed_extensions" => {
                self.input.allowed_extensions = value
                    .split(',')
                    .map(|s| s.trim().trim_start_matches('.').to_lowercase())
                    .filter(|s| !s.is_empty())
                    .collect()
            }
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(ResumeAnalyzerError::Configuration)?
            }
            "output.detailed" => self.output.detailed = parse_value(key, value)?,
            "output.pretty_json" => self.output.pretty_json = parse_value(key, value)?,
            "output.color_output" => self.output.color_output = parse_value(key, value)?,
            _ => {
                return Err(ResumeAnalyzerError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        ResumeAnalyzerError::Configuration(format!("Invalid value for {}: {}", key, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::ParagraphMode;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.analysis.max_keywords, 50);
        assert_eq!(config.analysis.paragraph_mode, ParagraphMode::Lines);
        assert_eq!(config.input.max_file_size_bytes, 10 * 1024 * 1024);
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.analysis.paragraph_mode = ParagraphMode::Collapsed;
        config.analysis.extra_skills = vec!["rust".to_string()];
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("paragraph_mode = \"collapsed\""));
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "analysis = 3").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ResumeAnalyzerError::Configuration(_))
        ));
    }

    #[test]
    fn test_set_value() {
        let mut config = Config::default();
        config.set_value("analysis.max_keywords", "20").unwrap();
        config.set_value("analysis.paragraph_mode", "collapsed").unwrap();
        config.set_value("analysis.extra_skills", "Rust, Haskell,").unwrap();
        config.set_value("output.format", "md").unwrap();
        config.set_value("input.enable_cache", "false").unwrap();

        assert_eq!(config.analysis.max_keywords, 20);
        assert_eq!(config.analysis.paragraph_mode, ParagraphMode::Collapsed);
        assert_eq!(config.analysis.extra_skills, vec!["rust", "haskell"]);
        assert_eq!(config.output.format, OutputFormat::Markdown);
        assert!(!config.input.enable_cache);
    }

    #[test]
    fn test_set_extra_skills_normalized() {
        let mut config = Config::default();
        config
            .set_value("analysis.extra_skills", "Machine  Learning,rest\tclient")
            .unwrap();
        assert_eq!(
            config.analysis.extra_skills,
            vec!["machine learning", "rest client"]
        );
    }

    #[test]
    fn test_set_value_rejects_bad_input() {
        let mut config = Config::default();
        assert!(config.set_value("analysis.max_keywords", "many").is_err());
        assert!(config.set_value("analysis.paragraph_mode", "single").is_err());
        assert!(config.set_value("scoring.weight", "1").is_err());
    }
}
