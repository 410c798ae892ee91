use crate::config::LlmConfig;
use crate::error::{DocQaError, Result};
use crate::models::{CompletionRequest, CompletionResponse};
use async_trait::async_trait;
use reqwest::Client;

/// One completion round-trip against an LLM service.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

/// Client for any OpenAI-compatible `/chat/completions` endpoint
/// (OpenAI itself, OpenRouter, a local proxy, ...).
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    api_base: String,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CompletionBackend for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.api_base);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(DocQaError::Upstream(format!(
                "LLM API error ({}): {}",
                status, error_text
            )));
        }

        let completion: CompletionResponse = response.json().await?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DocQaError::Upstream("LLM API returned no choices".to_string()))?;

        Ok(choice.message.content.unwrap_or_default())
    }
}
