//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// transcript-analyzer - Turn meeting transcripts into user stories, epics, and more
#[derive(Parser, Debug)]
#[command(name = "transcript-analyzer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a transcript JSON document with the configured model
    Analyze {
        /// Transcript JSON file (reads stdin when omitted or "-")
        input: Option<PathBuf>,

        /// Transcript JSON given inline instead of a file
        #[arg(short, long, conflicts_with = "input")]
        transcript: Option<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Also print the unparsed model output
        #[arg(long)]
        raw: bool,
    },

    /// Split already generated analysis text into sections (no model call)
    Parse {
        /// Text file (reads stdin when omitted or "-")
        input: Option<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the prompt that would be sent for a transcript
    Prompt {
        /// Transcript JSON file (reads stdin when omitted or "-")
        input: Option<PathBuf>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
