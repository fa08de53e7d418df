//! Prompt assembly
//!
//! Fills a catalog skeleton with request fields and appends the tone and
//! length guidance. Placeholders are replaced in a single left-to-right pass
//! over the skeleton, so substituted user text is never scanned again.

use reportgen_common::Result;

use crate::catalog::{lookup, PromptSkeleton};
use crate::modifiers::{length_instruction, style_instruction};
use crate::types::{GenerateRequest, WorkItem};

/// Closing line asking for the report body only
pub const OUTPUT_TRAILER: &str = "请直接输出报告内容，不需要额外说明。";

const DEFAULT_NONE: &str = "无";
const DEFAULT_PLANS: &str = "待定";
const DEFAULT_PROJECT: &str = "通用项目";

/// Named placeholder tokens that may appear in a skeleton
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Items,
    Risks,
    Support,
    NextWeek,
    ProjectName,
    Metrics,
    Style,
    Length,
}

impl Placeholder {
    pub const ALL: [Placeholder; 8] = [
        Self::Items,
        Self::Risks,
        Self::Support,
        Self::NextWeek,
        Self::ProjectName,
        Self::Metrics,
        Self::Style,
        Self::Length,
    ];

    /// Literal token, braces included
    pub fn token(&self) -> &'static str {
        match self {
            Self::Items => "{items}",
            Self::Risks => "{risks}",
            Self::Support => "{support}",
            Self::NextWeek => "{nextWeek}",
            Self::ProjectName => "{projectName}",
            Self::Metrics => "{metrics}",
            Self::Style => "{style}",
            Self::Length => "{length}",
        }
    }
}

/// Fully substituted instruction text for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledPrompt {
    /// Skeleton with every placeholder filled
    pub body: String,

    /// Final instruction sent to the generation service
    pub text: String,
}

impl AssembledPrompt {
    pub fn into_string(self) -> String {
        self.text
    }
}

/// Build the instruction text for a request
pub fn assemble(request: &GenerateRequest) -> Result<AssembledPrompt> {
    let body = render_body(request)?;
    let text = format!(
        "{}\n\n{}\n{}\n\n{}",
        body,
        style_instruction(request.style),
        length_instruction(request.length),
        OUTPUT_TRAILER
    );

    Ok(AssembledPrompt { body, text })
}

/// Substituted skeleton without the appended guidance
pub fn render_body(request: &GenerateRequest) -> Result<String> {
    let skeleton = lookup(request.report_type, request.template_key)?;
    let values = PlaceholderValues::from_request(request);
    Ok(substitute(skeleton, &values))
}

/// Values for each placeholder, defaults already applied
struct PlaceholderValues {
    items: String,
    risks: String,
    support: String,
    next_week: String,
    project_name: String,
    metrics: String,
    style: &'static str,
    length: &'static str,
}

impl PlaceholderValues {
    fn from_request(request: &GenerateRequest) -> Self {
        let next_week = if request.next_week_plans.is_empty() {
            DEFAULT_PLANS.to_string()
        } else {
            request.next_week_plans.join("、")
        };

        Self {
            items: render_items(&request.items),
            risks: or_default(&request.risks, DEFAULT_NONE),
            support: or_default(&request.support, DEFAULT_NONE),
            next_week,
            project_name: or_default(&request.project_name, DEFAULT_PROJECT),
            metrics: or_default(&request.metrics, DEFAULT_NONE),
            style: request.style.as_str(),
            length: request.length.as_str(),
        }
    }

    fn get(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Items => &self.items,
            Placeholder::Risks => &self.risks,
            Placeholder::Support => &self.support,
            Placeholder::NextWeek => &self.next_week,
            Placeholder::ProjectName => &self.project_name,
            Placeholder::Metrics => &self.metrics,
            Placeholder::Style => self.style,
            Placeholder::Length => self.length,
        }
    }
}

fn or_default(value: &Option<String>, default: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

/// `- task（产出：…）（数据：…）`, one line per item
fn render_items(items: &[WorkItem]) -> String {
    items
        .iter()
        .map(|item| {
            let mut line = format!("- {}", item.task);
            if let Some(output) = item.output.as_deref().filter(|s| !s.is_empty()) {
                line.push_str(&format!("（产出：{}）", output));
            }
            if let Some(data) = item.data.as_deref().filter(|s| !s.is_empty()) {
                line.push_str(&format!("（数据：{}）", data));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn substitute(skeleton: PromptSkeleton, values: &PlaceholderValues) -> String {
    let mut out = String::with_capacity(skeleton.len() + values.items.len());
    let mut rest = skeleton;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        match Placeholder::ALL.iter().find(|p| tail.starts_with(p.token())) {
            Some(placeholder) => {
                out.push_str(values.get(*placeholder));
                rest = &tail[placeholder.token().len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OutputLength, OutputStyle, ReportType, TemplateKey};

    fn base_request(report_type: ReportType, template_key: TemplateKey) -> GenerateRequest {
        let mut request = GenerateRequest::new(
            report_type,
            template_key,
            vec![
                WorkItem::new("完成支付模块联调").with_output("联调报告"),
                WorkItem::new("优化首页加载").with_data("首屏耗时下降 30%"),
            ],
        );
        request.next_week_plans = vec!["灰度发布".to_string()];
        request
    }

    fn has_placeholder(text: &str) -> bool {
        Placeholder::ALL.iter().any(|p| text.contains(p.token()))
    }

    #[test]
    fn test_all_combinations_fully_substituted() {
        for report_type in ReportType::ALL {
            for template_key in TemplateKey::ALL {
                let prompt = assemble(&base_request(report_type, template_key)).unwrap();
                assert!(!prompt.text.is_empty());
                assert!(
                    !has_placeholder(&prompt.text),
                    "placeholder left in {report_type}/{template_key}"
                );
            }
        }
    }

    #[test]
    fn test_weekly_general_scenario() {
        let mut request = GenerateRequest::new(
            ReportType::Weekly,
            TemplateKey::General,
            vec![WorkItem::new("修复登录问题")],
        );
        request.risks = Some(String::new());
        request.support = Some(String::new());
        request.next_week_plans = vec!["上线新功能".to_string()];

        let prompt = assemble(&request).unwrap();

        assert!(prompt.text.lines().any(|line| line == "- 修复登录问题"));
        assert!(prompt.text.contains("难点与风险：无"));
        assert!(prompt.text.contains("需要支持：无"));
        assert!(prompt.text.matches("无").count() >= 2);
        assert!(prompt.text.contains("下周计划：上线新功能"));
        assert!(prompt.text.contains(style_instruction(OutputStyle::Stable)));
        assert!(prompt.text.contains("使用stable风格，medium长度"));
        assert!(prompt.text.ends_with(OUTPUT_TRAILER));
    }

    #[test]
    fn test_item_line_rendering() {
        let items = vec![
            WorkItem::new("A").with_output("文档").with_data("3 篇"),
            WorkItem::new("B").with_output(""),
            WorkItem::new("C").with_data("10%"),
        ];
        assert_eq!(
            render_items(&items),
            "- A（产出：文档）（数据：3 篇）\n- B\n- C（数据：10%）"
        );
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let mut request = base_request(ReportType::Weekly, TemplateKey::Pm);
        request.next_week_plans.clear();

        let body = render_body(&request).unwrap();
        assert!(body.contains("项目/需求名称：通用项目"));
        assert!(body.contains("关键指标：无"));
        assert!(body.contains("下周计划：待定"));
    }

    #[test]
    fn test_plans_joined() {
        let mut request = base_request(ReportType::Daily, TemplateKey::Dev);
        request.next_week_plans = vec!["补齐单测".to_string(), "提交 CR".to_string()];
        let body = render_body(&request).unwrap();
        assert!(body.contains("明日计划：补齐单测、提交 CR"));
    }

    #[test]
    fn test_style_and_length_only_change_inline_tokens_and_guidance() {
        let base = base_request(ReportType::Monthly, TemplateKey::Ops);
        let reference = render_body(&base.with_tone(OutputStyle::Stable, OutputLength::Short))
            .unwrap()
            .replacen("stable", "<S>", 1)
            .replacen("short", "<L>", 1);

        for style in OutputStyle::ALL {
            for length in OutputLength::ALL {
                let request = base.with_tone(style, length);
                let prompt = assemble(&request).unwrap();

                let normalized = prompt
                    .body
                    .replacen(style.as_str(), "<S>", 1)
                    .replacen(length.as_str(), "<L>", 1);
                assert_eq!(normalized, reference);

                let expected_tail = format!(
                    "\n\n{}\n{}\n\n{}",
                    style_instruction(style),
                    length_instruction(length),
                    OUTPUT_TRAILER
                );
                assert_eq!(prompt.text, format!("{}{}", prompt.body, expected_tail));
            }
        }
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let request = base_request(ReportType::Weekly, TemplateKey::Sales);
        assert_eq!(assemble(&request).unwrap(), assemble(&request).unwrap());
    }

    #[test]
    fn test_user_text_is_not_re_expanded() {
        let mut request = base_request(ReportType::Weekly, TemplateKey::General);
        request.risks = Some("模板里写了 {support} 字样".to_string());
        request.support = Some("需要设计资源".to_string());

        let body = render_body(&request).unwrap();
        assert!(body.contains("难点与风险：模板里写了 {support} 字样"));
        assert_eq!(body.matches("需要设计资源").count(), 1);
        assert_eq!(body.matches("{support}").count(), 1);
    }

    #[test]
    fn test_stray_brace_is_kept() {
        let values = PlaceholderValues::from_request(&base_request(
            ReportType::Weekly,
            TemplateKey::General,
        ));
        assert_eq!(substitute("a {x} {risks}{", &values), "a {x} 无{");
    }
}
