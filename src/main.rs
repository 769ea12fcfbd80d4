//! Resume analyzer: extract keywords, skills, education and experience
//! from resumes

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use resume_analyzer::cli::{self, Cli, Commands, ConfigAction};
use resume_analyzer::config::{Config, OutputFormat};
use resume_analyzer::input::InputManager;
use resume_analyzer::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_analyzer::output::report::AnalysisReport;
use resume_analyzer::processing::{ParagraphMode, ResumeAnalyzer};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("reading config file {}", path.display())),
        None => Config::load().context("loading default config"),
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            files,
            format,
            detailed,
            save,
            paragraph_mode,
        } => {
            if let Some(mode) = paragraph_mode {
                config.analysis.paragraph_mode = mode
                    .parse::<ParagraphMode>()
                    .map_err(anyhow::Error::msg)?;
            }
            if detailed {
                config.output.detailed = true;
            }
            let output_format = resolve_format(format.as_deref(), &config)?;

            for file in &files {
                cli::validate_file_extension(file, &config.input.allowed_extensions)
                    .map_err(anyhow::Error::msg)
                    .with_context(|| format!("resume file {}", file.display()))?;
            }

            let analyzer = ResumeAnalyzer::with_settings(config.analysis.clone())?;
            let generator = ReportGenerator::from_config(&config.output);
            let mut input_manager = InputManager::from_config(&config.input);

            info!(
                "Analyzing {} file(s) with {} skill terms, paragraph mode {}",
                files.len(),
                analyzer.skill_count(),
                config.analysis.paragraph_mode
            );

            let progress = (files.len() > 1).then(|| {
                let bar = ProgressBar::new(files.len() as u64);
                bar.set_style(
                    ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_bar()),
                );
                bar
            });

            let mut failures = 0;
            for file in &files {
                if let Some(bar) = &progress {
                    bar.set_message(file.display().to_string());
                }

                match analyze_file(&mut input_manager, &analyzer, file).await {
                    Ok(report) => {
                        let rendered = generator.generate_report(&report, &output_format)?;
                        match save_target(save.as_deref(), files.len(), &output_format, file) {
                            Some(target) => {
                                save_report_to_file(&rendered, &target)?;
                                info!("Saved report to {}", target.display());
                            }
                            None => match &progress {
                                Some(bar) => bar.println(rendered),
                                None => println!("{}", rendered),
                            },
                        }
                    }
                    Err(e) => {
                        failures += 1;
                        warn!("Skipping {}: {:#}", file.display(), e);
                    }
                }

                if let Some(bar) = &progress {
                    bar.inc(1);
                }
            }

            if let Some(bar) = progress {
                bar.finish_with_message("done");
            }

            if failures == files.len() {
                anyhow::bail!("no resume could be analyzed");
            }
        }

        Commands::Text { text, format } => {
            let output_format = resolve_format(format.as_deref(), &config)?;
            let raw = match text {
                Some(text) => text,
                None => {
                    let mut buffer = String::new();
                    tokio::io::stdin()
                        .read_to_string(&mut buffer)
                        .await
                        .context("reading resume text from stdin")?;
                    buffer
                }
            };

            let analyzer = ResumeAnalyzer::with_settings(config.analysis.clone())?;
            let started = Instant::now();
            let result = analyzer.analyze(&raw);
            let report = AnalysisReport::new(
                "stdin",
                &raw,
                result,
                config.analysis.paragraph_mode,
                started.elapsed().as_millis() as u64,
            );

            let generator = ReportGenerator::from_config(&config.output);
            println!("{}", generator.generate_report(&report, &output_format)?);
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("{}", toml::to_string_pretty(&config)?);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                save_config(&Config::default(), config_path.as_deref())?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Set { key, value }) => {
                config.set_value(&key, &value)?;
                save_config(&config, config_path.as_deref())?;
                println!("✅ {} = {}", key, value);
            }
        },
    }

    Ok(())
}

async fn analyze_file(
    input_manager: &mut InputManager,
    analyzer: &ResumeAnalyzer,
    file: &Path,
) -> Result<AnalysisReport> {
    let raw = input_manager
        .extract_text(file)
        .await
        .with_context(|| format!("extracting text from {}", file.display()))?;

    let started = Instant::now();
    let result = analyzer.analyze(&raw);
    let elapsed = started.elapsed().as_millis() as u64;

    if result.is_empty() {
        warn!("Nothing recognized in {}", file.display());
    }

    Ok(AnalysisReport::new(
        file.to_string_lossy(),
        &raw,
        result,
        analyzer.settings().paragraph_mode,
        elapsed,
    ))
}

fn resolve_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match flag {
        Some(format) => cli::parse_output_format(format).map_err(anyhow::Error::msg),
        None => Ok(config.output.format),
    }
}

/// Where to write a report, if `--save` was given. With several input
/// files the save path is a directory.
fn save_target(save: Option<&Path>, file_count: usize, format: &OutputFormat, file: &Path) -> Option<PathBuf> {
    let save = save?;
    if file_count > 1 || save.is_dir() {
        Some(save.join(suggest_filename(format, &file.to_string_lossy(), false)))
    } else {
        Some(save.to_path_buf())
    }
}

fn save_config(config: &Config, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => config.save_to(path)?,
        None => config.save()?,
    }
    Ok(())
}
