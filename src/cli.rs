//! CLI interface for the resume analyzer

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-analyzer")]
#[command(about = "Extract keywords, skills, education and experience from resumes")]
#[command(long_about = "Analyze resumes (PDF, TXT, MD) with text normalization, part-of-speech keyword extraction, skill lexicon matching and paragraph-level education/experience detection")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one or more resume files
    Analyze {
        /// Resume files (PDF, TXT, MD)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        format: Option<String>,

        /// Include extra detail in console output
        #[arg(short, long)]
        detailed: bool,

        /// Save output to a file (a directory when several files are given)
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Paragraph handling: lines or collapsed
        #[arg(long)]
        paragraph_mode: Option<String>,
    },

    /// Analyze text given on the command line or on stdin
    Text {
        /// Text to analyze; read from stdin when omitted
        text: Option<String>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "analysis.max_keywords")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[String]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            let ext = ext.to_lowercase();
            if allowed_extensions.iter().any(|allowed| *allowed == ext) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze_command() {
        let cli = Cli::try_parse_from([
            "resume-analyzer",
            "analyze",
            "a.pdf",
            "b.txt",
            "--format",
            "json",
            "--paragraph-mode",
            "collapsed",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze {
                files,
                format,
                paragraph_mode,
                ..
            } => {
                assert_eq!(files.len(), 2);
                assert_eq!(format.as_deref(), Some("json"));
                assert_eq!(paragraph_mode.as_deref(), Some("collapsed"));
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(parse_output_format("MD").unwrap(), OutputFormat::Markdown);
        assert_eq!(parse_output_format("html").unwrap(), OutputFormat::Html);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_extension_validation() {
        let allowed = vec!["pdf".to_string(), "txt".to_string()];
        assert!(validate_file_extension(Path::new("cv.PDF"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("cv.docx"), &allowed).is_err());
        assert!(validate_file_extension(Path::new("cv"), &allowed).is_err());
    }
}
