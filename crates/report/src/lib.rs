//! reportgen report core
//!
//! Prompt catalog, prompt assembly, response segmentation and
//! free/pro comparison orchestration

mod catalog;
mod compare;
mod export;
mod input;
mod modifiers;
mod prompt;
mod segment;
mod types;

pub use catalog::{lookup, PromptSkeleton};
pub use compare::{compare_generate, pro_next_week_section, run_pipeline, tier_requests};
pub use export::{comparison_markdown, comparison_plain_text, export_file_name, to_plain_text};
pub use input::{parse_pasted_items, GenerateBody, ItemBody, MISSING_FIELDS};
pub use modifiers::{length_instruction, style_instruction};
pub use prompt::{assemble, render_body, AssembledPrompt, Placeholder, OUTPUT_TRAILER};
pub use segment::{segment, HeuristicSegmenter, Segmenter};
pub use types::{
    ComparisonResult, GenerateRequest, GeneratedReport, OutputLength, OutputStyle, ReportType,
    TemplateKey, WorkItem,
};
