use async_trait::async_trait;
use reportgen_common::{AppConfig, ReportGenError, Result};
use reqwest::Client;
use tracing::{debug, info};

use crate::llm_trait::LlmClient;
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

/// OpenAI-compatible chat completion client
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl OpenAiClient {
    /// Create new client
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let api_key = api_key.into();

        if api_key.trim().is_empty() {
            return Err(ReportGenError::configuration("OPENAI_API_KEY is not set"));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(300)) // 5 minutes for LLM calls
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("LLM client initialized: {}", base_url);
        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    /// Create client from application configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(&config.llm_base_url, &config.llm_api_key)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Single chat completion call
    pub async fn chat(&self, request: &ChatRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        debug!(
            "Sending chat request - Model: {}, Max tokens: {}, Prompt length: {}",
            request.model,
            request.max_tokens,
            request.messages.iter().map(|m| m.content.len()).sum::<usize>()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| ReportGenError::external(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ReportGenError::external(format!(
                "LLM API error ({}): {}",
                status, body
            )));
        }

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| ReportGenError::external(format!("Failed to parse response: {}", e)))?;

        if let Some(usage) = &result.usage {
            debug!(
                "Chat usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        match result.first_content() {
            Some(content) if !content.is_empty() => Ok(content.to_string()),
            _ => Err(ReportGenError::EmptyResponse),
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn generate(&self, prompt: &str, model: &str, max_tokens: u32) -> Result<String> {
        let request = ChatRequest {
            model: model.to_string(),
            max_tokens,
            messages: vec![ChatMessage::user(prompt)],
        };

        let content = self.chat(&request).await?;
        debug!("Received completion - Length: {}", content.len());
        Ok(content)
    }

    async fn test_connection(&self) -> Result<bool> {
        let url = format!("{}/models", self.base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| ReportGenError::external(format!("Failed to connect to LLM API: {}", e)))?;
        Ok(response.status().is_success())
    }
}
