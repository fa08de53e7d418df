use crate::error::ReportGenError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// reportgen application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API key for the OpenAI-compatible endpoint
    #[serde(skip_serializing)]
    pub llm_api_key: String,

    /// Chat-completion API base URL
    pub llm_base_url: String,

    /// Model identifier sent with every generation
    pub llm_model: String,

    /// Maximum output tokens per generation
    pub llm_max_tokens: u32,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            llm_api_key: String::new(),
            llm_base_url: "https://api.openai.com/v1".to_string(),
            llm_model: "deepseek-r1".to_string(),
            llm_max_tokens: 2048,
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, ReportGenError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            llm_api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            llm_base_url: std::env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            llm_model: std::env::var("LLM_MODEL")
                .unwrap_or_else(|_| "deepseek-r1".to_string()),
            llm_max_tokens: std::env::var("LLM_MAX_TOKENS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2048),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            log_dir: std::env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./log")),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
        };

        config.validate()?;

        Ok(config)
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Whether an API key has been provided
    pub fn has_api_key(&self) -> bool {
        !self.llm_api_key.trim().is_empty()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ReportGenError> {
        if !self.llm_base_url.starts_with("http://")
            && !self.llm_base_url.starts_with("https://") {
            return Err(ReportGenError::configuration(
                "LLM base URL must start with http:// or https://"
            ));
        }

        if self.llm_model.trim().is_empty() {
            return Err(ReportGenError::configuration("LLM model name cannot be empty"));
        }

        if self.llm_max_tokens == 0 {
            return Err(ReportGenError::configuration("LLM max tokens cannot be 0"));
        }

        if self.server_port == 0 {
            return Err(ReportGenError::configuration("Server port cannot be 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.llm_model, "deepseek-r1");
        assert_eq!(config.llm_max_tokens, 2048);
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_server_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.server_bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());

        let mut invalid_config = AppConfig::default();
        invalid_config.llm_base_url = "api.openai.com".to_string();
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = AppConfig::default();
        invalid_config.llm_max_tokens = 0;
        assert!(invalid_config.validate().is_err());
    }

    #[test]
    fn test_api_key_not_serialized() {
        let mut config = AppConfig::default();
        config.llm_api_key = "sk-secret".to_string();
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-secret"));
    }
}
