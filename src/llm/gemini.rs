use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::{
    GenerationRequest, InvocationError, LlmProvider, MAX_OUTPUT_TOKENS, TEMPERATURE,
};
use crate::llm::prompts::build_analysis_prompt;

const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Client for the Gemini API (API key auth).
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.llm.api_key.trim().to_string();
        if api_key.is_empty() {
            anyhow::bail!(
                "Gemini API key is missing. Set llm.api_key in config or TRANSCRIPT_ANALYZER_GEMINI_API_KEY."
            );
        }

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_GEMINI_ENDPOINT.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            http: build_http_client(settings)?,
            api_key,
            model: model_name(settings),
            endpoint,
        })
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }
}

#[async_trait]
impl LlmProvider for GeminiClient {
    async fn generate(
        &self,
        request: GenerationRequest<'_>,
    ) -> std::result::Result<String, InvocationError> {
        tracing::debug!(model = %self.model, "Sending analysis request to Gemini");
        send_generate_content(self.http.post(self.request_url()), request).await
    }
}

/// HTTP client with the configured request timeout.
pub(crate) fn build_http_client(settings: &Settings) -> Result<Client> {
    Client::builder()
        .timeout(std::time::Duration::from_secs(settings.llm.timeout_secs))
        .build()
        .context("Failed to build HTTP client")
}

pub(crate) fn model_name(settings: &Settings) -> String {
    if settings.llm.model.trim().is_empty() {
        DEFAULT_GEMINI_MODEL.to_string()
    } else {
        settings.llm.model.trim().to_string()
    }
}

/// Send a `generateContent` call and pull the generated text out of the reply.
///
/// Shared by the Gemini and Vertex AI clients, which speak the same body format.
pub(crate) async fn send_generate_content(
    builder: RequestBuilder,
    request: GenerationRequest<'_>,
) -> std::result::Result<String, InvocationError> {
    let body = GenerateContentRequest::new(build_analysis_prompt(request.transcript));

    let response = builder.json(&body).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(InvocationError::Status { status, body });
    }

    let payload: GenerateContentResponse =
        response.json().await.map_err(InvocationError::Decode)?;

    extract_text(payload)
}

/// Concatenate the text parts of the first candidate.
fn extract_text(payload: GenerateContentResponse) -> std::result::Result<String, InvocationError> {
    if let Some(reason) = payload.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(InvocationError::Blocked(reason));
    }

    let candidate = payload
        .candidates
        .into_iter()
        .next()
        .ok_or(InvocationError::EmptyResponse)?;

    if let Some(reason) = candidate.finish_reason.as_deref() {
        if reason != "STOP" {
            tracing::warn!(finish_reason = reason, "Generation did not finish normally");
        }
    }

    let text: String = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if text.trim().is_empty() {
        return Err(InvocationError::EmptyResponse);
    }

    Ok(text)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn new(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
                temperature: TEMPERATURE,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<ContentResponse>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}
