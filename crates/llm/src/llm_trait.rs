use async_trait::async_trait;
use reportgen_common::Result;

/// Text generation service
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate a completion for a single user prompt
    async fn generate(&self, prompt: &str, model: &str, max_tokens: u32) -> Result<String>;

    /// Test connection/availability
    async fn test_connection(&self) -> Result<bool>;
}
