use crate::config::LlmConfig;
use crate::error::{DocQaError, Result};
use crate::llm_client::{CompletionBackend, OpenAiClient};
use crate::models::{ChatMessage, CompletionRequest};
use std::sync::Arc;

pub struct AnswerService {
    config: LlmConfig,
    backend: Arc<dyn CompletionBackend>,
}

impl AnswerService {
    pub fn new(config: LlmConfig) -> Self {
        let backend = Arc::new(OpenAiClient::new(&config));
        Self::with_backend(config, backend)
    }

    pub fn with_backend(config: LlmConfig, backend: Arc<dyn CompletionBackend>) -> Self {
        Self { config, backend }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Single best-effort completion. Fails fast, without touching the
    /// network, while the API key is still the placeholder.
    pub async fn answer(&self, messages: Vec<ChatMessage>) -> Result<String> {
        if !self.config.is_configured() {
            return Err(DocQaError::Configuration);
        }

        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        log::info!(
            "Requesting completion from {} ({} messages)",
            request.model,
            request.messages.len()
        );

        self.backend.complete(&request).await.map_err(|e| {
            log::error!("Completion failed: {}", e);
            match e {
                DocQaError::Upstream(_) => e,
                other => DocQaError::Upstream(other.to_string()),
            }
        })
    }
}
