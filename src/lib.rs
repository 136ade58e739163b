//! transcript-analyzer - Turn meeting transcripts into product-management artifacts
//!
//! A transcript (JSON) is sent to Gemini once, and the generated text is split
//! into user stories, epics, ambiguity analysis, problem statement, and success
//! criteria.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod llm;

use thiserror::Error;

use crate::llm::InvocationError;

/// Main error type for transcript-analyzer
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Please enter a transcript JSON.")]
    EmptyTranscript,

    #[error("Invalid JSON format. Please provide valid JSON. ({0})")]
    InvalidTranscript(#[from] serde_json::Error),

    #[error("Generation failed: {0}")]
    Invocation(#[from] InvocationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "transcript-analyzer";
