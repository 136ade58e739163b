//! Transcript analysis pipeline
//!
//! Validate the transcript, ask the provider for an analysis, and split the
//! generated text into sections.

pub mod render;
pub mod sections;
pub mod transcript;

pub use render::{render_json, render_text};
pub use sections::{parse_sections, section_key, ParsedAnalysis, Section};
pub use transcript::{read_input, validate_transcript};

use crate::llm::{GenerationRequest, LlmProvider};
use crate::Result;

/// Result of one analysis request.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Text exactly as returned by the model
    pub raw: String,

    /// Sections parsed out of `raw`
    pub sections: ParsedAnalysis,
}

impl Analysis {
    /// Parse already generated text.
    pub fn from_raw(raw: String) -> Self {
        let sections = parse_sections(&raw);
        Self { raw, sections }
    }

    /// True when the model output contained none of the expected labels.
    pub fn is_format_mismatch(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Run one analysis: validate `input`, invoke the provider once, parse.
///
/// Empty or malformed input fails before the provider is called. Output that
/// lacks some or all labels is not an error.
pub async fn run_analysis(provider: &dyn LlmProvider, input: &str) -> Result<Analysis> {
    let transcript = validate_transcript(input)?;

    tracing::info!(bytes = transcript.len(), "Analyzing transcript");
    let raw = provider
        .generate(GenerationRequest {
            transcript: &transcript,
        })
        .await?;

    let analysis = Analysis::from_raw(raw);
    if analysis.is_format_mismatch() {
        tracing::warn!("Model output did not contain any recognized section labels");
    } else if !analysis.sections.missing().is_empty() {
        let missing: Vec<&str> = analysis
            .sections
            .missing()
            .iter()
            .map(|s| s.key())
            .collect();
        tracing::warn!(?missing, "Model output is missing some sections");
    }

    Ok(analysis)
}
