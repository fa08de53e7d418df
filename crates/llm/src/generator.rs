use reportgen_common::{AppConfig, Result};
use reportgen_report::{
    compare_generate, run_pipeline, ComparisonResult, GenerateRequest, GeneratedReport,
    HeuristicSegmenter, Segmenter,
};
use std::sync::Arc;
use tracing::info;

use crate::llm_trait::LlmClient;

/// Report generator: prompt assembly, one LLM call, segmentation
pub struct ReportGenerator {
    client: Arc<dyn LlmClient>,
    segmenter: Box<dyn Segmenter>,
    model: String,
    max_tokens: u32,
}

impl ReportGenerator {
    /// Create new generator with the default segmenter
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            client,
            segmenter: Box::new(HeuristicSegmenter),
            model: model.into(),
            max_tokens,
        }
    }

    /// Create generator using model settings from configuration
    pub fn from_config(client: Arc<dyn LlmClient>, config: &AppConfig) -> Self {
        Self::new(client, config.llm_model.clone(), config.llm_max_tokens)
    }

    /// Replace the response segmentation strategy
    pub fn with_segmenter(mut self, segmenter: Box<dyn Segmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether the generation service is reachable
    pub async fn test_connection(&self) -> Result<bool> {
        self.client.test_connection().await
    }

    /// Generate a single report
    pub async fn generate(&self, request: &GenerateRequest) -> Result<GeneratedReport> {
        info!(
            "Generating {} report - template: {}, items: {}, model: {}",
            request.report_type,
            request.template_key,
            request.items.len(),
            self.model
        );

        let report = run_pipeline(request, self.segmenter.as_ref(), |prompt| {
            self.call(prompt)
        })
        .await?;

        info!("Report generated - sections filled: {}", report.filled_sections());
        Ok(report)
    }

    /// Generate free and pro reports concurrently
    pub async fn compare(&self, request: &GenerateRequest) -> Result<ComparisonResult> {
        let result = compare_generate(request, self.segmenter.as_ref(), |prompt| {
            self.call(prompt)
        })
        .await?;

        info!(
            "Comparison generated - free sections: {}, pro sections: {}",
            result.free.filled_sections(),
            result.pro.filled_sections()
        );
        Ok(result)
    }

    async fn call(&self, prompt: String) -> Result<String> {
        self.client
            .generate(&prompt, &self.model, self.max_tokens)
            .await
    }
}
