use reportgen_common::{ReportGenError, Result};
use serde::{Deserialize, Serialize};

use crate::types::{
    GenerateRequest, OutputLength, OutputStyle, ReportType, TemplateKey, WorkItem,
};

/// Message returned when template or items are missing
pub const MISSING_FIELDS: &str = "缺少必填字段";

/// Work item as submitted by the page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemBody {
    /// Client-side row id, ignored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub task: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Generate request body as posted to `/api/generate`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBody {
    pub template: Option<TemplateKey>,

    #[serde(default)]
    pub report_type: Option<ReportType>,

    #[serde(default)]
    pub items: Vec<ItemBody>,

    #[serde(default)]
    pub risks: Option<String>,

    #[serde(default)]
    pub support: Option<String>,

    #[serde(default)]
    pub next_week: Vec<String>,

    #[serde(default)]
    pub style: Option<OutputStyle>,

    #[serde(default)]
    pub length: Option<OutputLength>,

    #[serde(default)]
    pub project_name: Option<String>,

    #[serde(default)]
    pub metrics: Option<String>,

    /// Generate free and pro versions side by side
    #[serde(default)]
    pub comparison: bool,
}

impl GenerateBody {
    /// Normalize into a validated request
    ///
    /// Trims every text field, drops blank items and plans, and treats blank
    /// optional text as absent.
    pub fn into_request(self) -> Result<GenerateRequest> {
        let template_key = self
            .template
            .ok_or_else(|| ReportGenError::invalid_input(MISSING_FIELDS))?;

        let items: Vec<WorkItem> = self
            .items
            .into_iter()
            .filter_map(|item| {
                let task = item.task.trim();
                if task.is_empty() {
                    return None;
                }
                Some(WorkItem {
                    task: task.to_string(),
                    output: trimmed(item.output),
                    data: trimmed(item.data),
                })
            })
            .collect();

        if items.is_empty() {
            return Err(ReportGenError::invalid_input(MISSING_FIELDS));
        }

        Ok(GenerateRequest {
            report_type: self.report_type.unwrap_or_default(),
            template_key,
            items,
            risks: trimmed(self.risks),
            support: trimmed(self.support),
            next_week_plans: self
                .next_week
                .iter()
                .map(|plan| plan.trim())
                .filter(|plan| !plan.is_empty())
                .map(str::to_string)
                .collect(),
            style: self.style.unwrap_or(OutputStyle::Stable),
            length: self.length.unwrap_or(OutputLength::Medium),
            project_name: trimmed(self.project_name),
            metrics: trimmed(self.metrics),
        })
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// One work item per non-blank line of pasted text
pub fn parse_pasted_items(text: &str) -> Vec<WorkItem> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(WorkItem::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_from_page_json() {
        let json = r#"{
            "template": "dev",
            "reportType": "daily",
            "items": [
                {"id": "1", "task": "  修复登录问题 ", "output": "", "data": "3 个 bug"},
                {"id": "2", "task": "   "}
            ],
            "risks": "  ",
            "support": "需要测试环境",
            "nextWeek": ["上线新功能", ""],
            "style": "collaboration",
            "length": "long",
            "projectName": "v2.3",
            "metrics": "",
            "comparison": true
        }"#;

        let body: GenerateBody = serde_json::from_str(json).unwrap();
        assert!(body.comparison);

        let request = body.into_request().unwrap();
        assert_eq!(request.report_type, ReportType::Daily);
        assert_eq!(request.template_key, TemplateKey::Dev);
        assert_eq!(request.items, vec![WorkItem::new("修复登录问题").with_data("3 个 bug")]);
        assert_eq!(request.risks, None);
        assert_eq!(request.support.as_deref(), Some("需要测试环境"));
        assert_eq!(request.next_week_plans, vec!["上线新功能".to_string()]);
        assert_eq!(request.style, OutputStyle::Collaboration);
        assert_eq!(request.length, OutputLength::Long);
        assert_eq!(request.project_name.as_deref(), Some("v2.3"));
        assert_eq!(request.metrics, None);
    }

    #[test]
    fn test_defaults() {
        let body: GenerateBody =
            serde_json::from_str(r#"{"template": "general", "items": [{"task": "a"}]}"#).unwrap();
        let request = body.into_request().unwrap();

        assert_eq!(request.report_type, ReportType::Weekly);
        assert_eq!(request.style, OutputStyle::Stable);
        assert_eq!(request.length, OutputLength::Medium);
        assert!(request.next_week_plans.is_empty());
    }

    #[test]
    fn test_missing_template_or_items() {
        let no_template: GenerateBody =
            serde_json::from_str(r#"{"items": [{"task": "a"}]}"#).unwrap();
        assert!(matches!(
            no_template.into_request(),
            Err(ReportGenError::InvalidInput(msg)) if msg == MISSING_FIELDS
        ));

        let blank_items: GenerateBody =
            serde_json::from_str(r#"{"template": "pm", "items": [{"task": " "}]}"#).unwrap();
        assert!(blank_items.into_request().is_err());

        let no_items: GenerateBody = serde_json::from_str(r#"{"template": "pm"}"#).unwrap();
        assert!(no_items.into_request().is_err());
    }

    #[test]
    fn test_unknown_template_is_rejected() {
        let parsed = serde_json::from_str::<GenerateBody>(r#"{"template": "hr", "items": []}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_parse_pasted_items() {
        let items = parse_pasted_items("完成A\n\n   \n  评审B  \r\n发布C");
        let tasks: Vec<_> = items.iter().map(|i| i.task.as_str()).collect();
        assert_eq!(tasks, vec!["完成A", "评审B", "发布C"]);
        assert!(items.iter().all(|i| i.output.is_none() && i.data.is_none()));

        assert!(parse_pasted_items("").is_empty());
    }
}
