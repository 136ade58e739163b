//! transcript-analyzer - Product-management artifacts from meeting transcripts
//!
//! Entry point for the transcript-analyzer CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use transcript_analyzer::cli::{Cli, Commands};
use transcript_analyzer::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            transcript_analyzer::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;
            init_logging(&settings, cli.verbose);

            match &settings.config_file {
                Some(path) => tracing::debug!(path = %path.display(), "Loaded config file"),
                None => tracing::info!("No config file found, using defaults"),
            }

            // Execute command
            match command {
                Commands::Analyze {
                    input,
                    transcript,
                    json,
                    raw,
                } => {
                    transcript_analyzer::cli::commands::analyze_transcript(
                        &settings, input, transcript, json, raw,
                    )
                    .await?;
                }
                Commands::Parse { input, json } => {
                    transcript_analyzer::cli::commands::parse_output(input, json)?;
                }
                Commands::Prompt { input } => {
                    transcript_analyzer::cli::commands::show_prompt(input)?;
                }
                Commands::Config(config_cmd) => {
                    transcript_analyzer::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}

/// RUST_LOG wins, then --verbose, then the configured level.
fn init_logging(settings: &Settings, verbose: bool) {
    let fallback = if verbose {
        "debug"
    } else {
        settings.general.log_level.as_str()
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
