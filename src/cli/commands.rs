//! CLI command implementations

use anyhow::Result;
use std::path::PathBuf;

use crate::analysis::{
    read_input, render_json, render_text, run_analysis, validate_transcript, Analysis,
};
use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::llm::{build_analysis_prompt, build_provider};
use crate::AnalyzerError;

/// Analyze a transcript with the configured provider and print the sections.
pub async fn analyze_transcript(
    settings: &Settings,
    input: Option<PathBuf>,
    transcript: Option<String>,
    json: bool,
    raw: bool,
) -> Result<()> {
    let input = match transcript {
        Some(inline) => inline,
        None => read_input(input.as_deref())?,
    };

    // Reject bad input before the provider needs any credentials.
    if let Err(err) = validate_transcript(&input) {
        return report_input_error(err);
    }

    let provider = build_provider(settings)?;
    let analysis = match run_analysis(provider.as_ref(), &input).await {
        Ok(analysis) => analysis,
        Err(err) => return report_input_error(err),
    };

    print_analysis(&analysis, json, raw)
}

/// Parse previously generated analysis text without calling a model.
pub fn parse_output(input: Option<PathBuf>, json: bool) -> Result<()> {
    let text = read_input(input.as_deref())?;
    let analysis = Analysis::from_raw(text);

    if analysis.is_format_mismatch() {
        tracing::warn!("Input did not contain any recognized section labels");
    }

    print_analysis(&analysis, json, false)
}

/// Print the prompt that `analyze` would send for a transcript.
pub fn show_prompt(input: Option<PathBuf>) -> Result<()> {
    let input = read_input(input.as_deref())?;

    match validate_transcript(&input) {
        Ok(transcript) => {
            println!("{}", build_analysis_prompt(&transcript));
            Ok(())
        }
        Err(err) => report_input_error(err),
    }
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(&redacted(settings))?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

// Helper functions

/// An empty transcript is a notice, not a failure; everything else propagates.
fn report_input_error(err: AnalyzerError) -> Result<()> {
    match err {
        AnalyzerError::EmptyTranscript => {
            eprintln!("warning: {}", err);
            Ok(())
        }
        other => Err(other.into()),
    }
}

fn print_analysis(analysis: &Analysis, json: bool, raw: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&render_json(analysis, raw))?
        );
        return Ok(());
    }

    if raw {
        println!("Raw Output");
        println!("{}", "-".repeat(40));
        println!("{}", analysis.raw.trim_end());
        println!();
    }

    print!("{}", render_text(&analysis.sections));
    Ok(())
}

/// Copy of the settings with secrets masked, for display.
fn redacted(settings: &Settings) -> Settings {
    let mut shown = settings.clone();
    for secret in [&mut shown.llm.api_key, &mut shown.llm.access_token] {
        if !secret.is_empty() {
            *secret = "********".to_string();
        }
    }
    shown
}
