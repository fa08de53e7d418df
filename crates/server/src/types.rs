use reportgen_report::{ComparisonResult, GeneratedReport, WorkItem};
use serde::{Deserialize, Serialize};

/// Error body returned to the page
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Bulk paste request
#[derive(Debug, Deserialize)]
pub struct ParseItemsRequest {
    #[serde(default)]
    pub text: String,
}

/// Items parsed from pasted text
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseItemsResponse {
    pub items: Vec<WorkItem>,
}

/// Export output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Markdown,
    Text,
}

/// Export request: either a single report or a comparison
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub report: Option<GeneratedReport>,

    #[serde(default)]
    pub comparison: Option<ComparisonResult>,

    #[serde(default)]
    pub format: ExportFormat,
}

/// Selectable option with display text
#[derive(Debug, Serialize, Deserialize)]
pub struct OptionInfo {
    pub key: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Everything the generate page needs to build its pickers
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatesResponse {
    pub report_types: Vec<OptionInfo>,
    pub templates: Vec<OptionInfo>,
    pub styles: Vec<String>,
    pub lengths: Vec<String>,
}
