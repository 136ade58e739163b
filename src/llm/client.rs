use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

use crate::config::Settings;
use crate::llm::gemini::GeminiClient;
use crate::llm::vertex::VertexClient;

/// Upper bound on generated tokens for one analysis.
pub const MAX_OUTPUT_TOKENS: u32 = 8192;

/// Low sampling temperature, favoring repeatable output.
pub const TEMPERATURE: f32 = 0.2;

/// Generation request payload.
pub struct GenerationRequest<'a> {
    /// Transcript JSON, already validated.
    pub transcript: &'a str,
}

/// Failure reported by a generation backend.
#[derive(Error, Debug)]
pub enum InvocationError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("prompt was blocked: {0}")]
    Blocked(String),

    #[error("response did not contain any text")]
    EmptyResponse,
}

/// A text generation backend: transcript in, raw analysis text out.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn generate(&self, request: GenerationRequest<'_>)
        -> std::result::Result<String, InvocationError>;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn LlmProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "gemini" => Ok(Box::new(GeminiClient::from_settings(settings)?)),
        "vertex" => Ok(Box::new(VertexClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: gemini, vertex",
            other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn build_err(settings: &Settings) -> String {
        match build_provider(settings) {
            Ok(_) => panic!("expected provider creation to fail"),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn unsupported_provider_returns_error() {
        let mut settings = Settings::default();
        settings.llm.provider = "unknown".to_string();

        assert!(build_err(&settings).contains("Unsupported llm.provider"));
    }

    #[test]
    fn gemini_provider_requires_api_key() {
        let mut settings = Settings::default();
        settings.llm.provider = "gemini".to_string();

        assert!(build_err(&settings).contains("Gemini API key is missing"));
    }

    #[test]
    fn vertex_provider_requires_project_id() {
        let mut settings = Settings::default();
        settings.llm.access_token = "token".to_string();

        assert!(build_err(&settings).contains("project id is missing"));
    }

    #[test]
    fn vertex_provider_requires_access_token() {
        let mut settings = Settings::default();
        settings.llm.project_id = "my-project".to_string();

        assert!(build_err(&settings).contains("access token is missing"));
    }

    #[test]
    fn provider_name_is_case_insensitive() {
        let mut settings = Settings::default();
        settings.llm.provider = "Gemini".to_string();
        settings.llm.api_key = "key".to_string();

        assert!(build_provider(&settings).is_ok());
    }
}
