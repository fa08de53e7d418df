//! reportgen LLM integration
//!
//! OpenAI-compatible chat client and the report generation pipeline

mod client;
mod generator;
mod llm_trait;
mod types;

pub use client::OpenAiClient;
pub use generator::ReportGenerator;
pub use llm_trait::LlmClient;
pub use types::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChoiceMessage, Usage};
