//! Output formatters for analysis reports

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{Result, ResumeAnalyzerError};
use crate::output::report::AnalysisReport;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Keywords shown by the console formatter unless detailed output is on.
const CONSOLE_KEYWORD_PREVIEW: usize = 15;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Analysis: {{ source_name }}</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        h1 { color: #007acc; border-bottom: 3px solid #007acc; padding-bottom: 10px; }
        h2 { color: #495057; border-bottom: 2px solid #e9ecef; padding-bottom: 6px; }
        .tag {
            display: inline-block;
            padding: 4px 10px;
            margin: 3px;
            border-radius: 12px;
            background: #e7f3fb;
            color: #005a96;
        }
        .empty { color: #999; font-style: italic; }
        .metadata { margin-top: 30px; font-size: 0.9em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <h1>Resume Analysis: {{ source_name }}</h1>

        <h2>Skills ({{ skills.len() }})</h2>
        {% if skills.is_empty() %}<p class="empty">No skills recognized</p>{% endif %}
        <div>{% for skill in skills %}<span class="tag">{{ skill }}</span>{% endfor %}</div>

        <h2>Education ({{ education.len() }})</h2>
        {% if education.is_empty() %}<p class="empty">No education entries found</p>{% endif %}
        <ul>{% for entry in education %}<li>{{ entry }}</li>{% endfor %}</ul>

        <h2>Experience ({{ experience.len() }})</h2>
        {% if experience.is_empty() %}<p class="empty">No experience entries found</p>{% endif %}
        <ul>{% for entry in experience %}<li>{{ entry }}</li>{% endfor %}</ul>

        <h2>Keywords ({{ keywords.len() }})</h2>
        {% if keywords.is_empty() %}<p class="empty">No keywords extracted</p>{% endif %}
        <div>{% for keyword in keywords %}<span class="tag">{{ keyword }}</span>{% endfor %}</div>

        <div class="metadata">
            <p><strong>Generated:</strong> {{ generated_at }} | <strong>Processing time:</strong> {{ processing_time }}ms</p>
            <p><strong>Characters:</strong> {{ character_count }} | <strong>Paragraph mode:</strong> {{ paragraph_mode }}</p>
            <p>Generated by Resume Analyzer v{{ version }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate<'a> {
    include_styles: bool,
    source_name: String,
    generated_at: String,
    processing_time: u64,
    character_count: usize,
    paragraph_mode: String,
    version: &'a str,
    keywords: &'a [String],
    skills: &'a [String],
    education: &'a [String],
    experience: &'a [String],
}

fn format_timestamp(report: &AnalysisReport) -> String {
    report
        .metadata
        .generated_at
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string()
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_list(&self, output: &mut String, title: &str, entries: &[String], empty: &str) {
        output.push_str(&self.format_header(&format!("{} ({})", title, entries.len()), 2));
        if entries.is_empty() {
            output.push_str(&format!("  {}\n", self.colorize(empty, Color::BrightBlack)));
        }
        for (i, entry) in entries.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, entry));
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();
        let result = &report.result;

        output.push_str(&self.format_header(
            &format!("📄 RESUME ANALYSIS: {}", report.source_name()),
            1,
        ));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            format_timestamp(report),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header(&format!("Skills ({})", result.skills.len()), 2));
        if result.skills.is_empty() {
            output.push_str(&format!(
                "  {}\n",
                self.colorize("No skills recognized", Color::BrightBlack)
            ));
        } else {
            let skills: Vec<String> = result
                .skills
                .iter()
                .map(|s| self.colorize(s, Color::Cyan))
                .collect();
            output.push_str(&format!("  {}\n", skills.join(", ")));
        }

        self.format_list(&mut output, "Education", &result.education, "No education entries found");
        self.format_list(&mut output, "Experience", &result.experience, "No experience entries found");

        output.push_str(&self.format_header(&format!("Keywords ({})", result.keywords.len()), 2));
        if result.keywords.is_empty() {
            output.push_str(&format!(
                "  {}\n",
                self.colorize("No keywords extracted", Color::BrightBlack)
            ));
        } else {
            let shown = if self.detailed {
                result.keywords.len()
            } else {
                result.keywords.len().min(CONSOLE_KEYWORD_PREVIEW)
            };
            output.push_str(&format!("  {}\n", result.keywords[..shown].join(", ")));
            if shown < result.keywords.len() {
                output.push_str(&format!(
                    "  ... and {} more (use --detailed to show all)\n",
                    result.keywords.len() - shown
                ));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("Details", 3));
            output.push_str(&format!("  Source: {}\n", report.metadata.source_file));
            output.push_str(&format!("  Characters: {}\n", report.metadata.character_count));
            output.push_str(&format!("  Paragraph mode: {}\n", report.metadata.paragraph_mode));
            output.push_str(&format!("  Analyzer version: {}\n", report.metadata.analyzer_version));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn push_list(output: &mut String, title: &str, entries: &[String]) {
        output.push_str(&format!("## {} ({})\n\n", title, entries.len()));
        if entries.is_empty() {
            output.push_str("_None found_\n\n");
            return;
        }
        for entry in entries {
            output.push_str(&format!("- {}\n", entry));
        }
        output.push('\n');
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();
        let result = &report.result;

        output.push_str(&format!("# 📄 Resume Analysis: {}\n\n", report.source_name()));

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n\n",
                format_timestamp(report),
                report.metadata.processing_time_ms
            ));
        }

        output.push_str("| Category | Count |\n");
        output.push_str("|----------|-------|\n");
        output.push_str(&format!("| Skills | {} |\n", report.summary.skill_count));
        output.push_str(&format!("| Education | {} |\n", report.summary.education_count));
        output.push_str(&format!("| Experience | {} |\n", report.summary.experience_count));
        output.push_str(&format!("| Keywords | {} |\n\n", report.summary.keyword_count));

        Self::push_list(&mut output, "Skills", &result.skills);
        Self::push_list(&mut output, "Education", &result.education);
        Self::push_list(&mut output, "Experience", &result.experience);

        output.push_str(&format!("## Keywords ({})\n\n", result.keywords.len()));
        if result.keywords.is_empty() {
            output.push_str("_None found_\n\n");
        } else {
            let quoted: Vec<String> = result.keywords.iter().map(|k| format!("`{}`", k)).collect();
            output.push_str(&format!("{}\n\n", quoted.join(", ")));
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by Resume Analyzer v{} | {} characters | paragraph mode: {}*\n",
                report.metadata.analyzer_version,
                report.metadata.character_count,
                report.metadata.paragraph_mode
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let template = HtmlTemplate {
            include_styles: self.include_styles,
            source_name: report.source_name(),
            generated_at: format_timestamp(report),
            processing_time: report.metadata.processing_time_ms,
            character_count: report.metadata.character_count,
            paragraph_mode: report.metadata.paragraph_mode.to_string(),
            version: &report.metadata.analyzer_version,
            keywords: &report.result.keywords,
            skills: &report.result.skills,
            education: &report.result.education,
            experience: &report.result.experience,
        };
        template
            .render()
            .map_err(|e| ResumeAnalyzerError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::from_config(&OutputConfig::default())
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(config.color_output, config.detailed),
            json_formatter: JsonFormatter::new(config.pretty_json),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
            OutputFormat::Html => &self.html_formatter,
        };
        formatter.format_report(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_analysis{}.{}", base_name, timestamp_suffix, extension)
}
