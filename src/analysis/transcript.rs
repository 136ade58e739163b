//! Transcript input handling

use std::io::Read;
use std::path::Path;

use crate::{AnalyzerError, Result};

/// Read raw input from a file, or from stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Check that `input` is a non-empty, well-formed JSON document.
///
/// Returns the document re-serialized in compact form, which is what gets
/// embedded in the prompt.
pub fn validate_transcript(input: &str) -> Result<String> {
    if input.trim().is_empty() {
        return Err(AnalyzerError::EmptyTranscript);
    }

    let value: serde_json::Value = serde_json::from_str(input)?;
    Ok(serde_json::to_string(&value)?)
}
