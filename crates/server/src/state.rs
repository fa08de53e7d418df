use reportgen_common::AppConfig;
use reportgen_llm::ReportGenerator;
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Report generation pipeline
    pub generator: Arc<ReportGenerator>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig, generator: ReportGenerator) -> Self {
        Self {
            config,
            generator: Arc::new(generator),
        }
    }
}
