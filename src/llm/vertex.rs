use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

use crate::config::Settings;
use crate::llm::client::{GenerationRequest, InvocationError, LlmProvider};
use crate::llm::gemini::{build_http_client, model_name, send_generate_content};

/// Client for Gemini models served through Vertex AI (bearer token auth).
pub struct VertexClient {
    http: Client,
    access_token: String,
    project_id: String,
    location: String,
    model: String,
    endpoint: Option<String>,
}

impl VertexClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let project_id = settings.llm.project_id.trim().to_string();
        if project_id.is_empty() {
            anyhow::bail!(
                "Vertex AI project id is missing. Set llm.project_id in config or PROJECT_ID."
            );
        }

        let access_token = settings.llm.access_token.trim().to_string();
        if access_token.is_empty() {
            anyhow::bail!(
                "Vertex AI access token is missing. Set llm.access_token in config or TRANSCRIPT_ANALYZER_ACCESS_TOKEN \
                 (e.g. from `gcloud auth print-access-token`)."
            );
        }

        let endpoint = Some(settings.llm.endpoint.trim().trim_end_matches('/'))
            .filter(|e| !e.is_empty())
            .map(str::to_string);

        Ok(Self {
            http: build_http_client(settings)?,
            access_token,
            project_id,
            location: settings.llm.location.trim().to_string(),
            model: model_name(settings),
            endpoint,
        })
    }

    fn request_url(&self) -> String {
        let base = self
            .endpoint
            .clone()
            .unwrap_or_else(|| format!("https://{}-aiplatform.googleapis.com/v1", self.location));

        format!(
            "{}/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
            base, self.project_id, self.location, self.model
        )
    }
}

#[async_trait]
impl LlmProvider for VertexClient {
    async fn generate(
        &self,
        request: GenerationRequest<'_>,
    ) -> std::result::Result<String, InvocationError> {
        tracing::debug!(
            model = %self.model,
            project = %self.project_id,
            location = %self.location,
            "Sending analysis request to Vertex AI"
        );

        let builder = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.access_token);

        send_generate_content(builder, request).await
    }
}
