use serde::{Deserialize, Serialize};
use std::fmt;

/// Report granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

impl ReportType {
    pub const ALL: [ReportType; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Display name (日报/周报/月报)
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Daily => "日报",
            Self::Weekly => "周报",
            Self::Monthly => "月报",
        }
    }
}

/// Role-specific template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKey {
    General,
    Pm,
    Ops,
    Dev,
    Project,
    Sales,
}

impl TemplateKey {
    pub const ALL: [TemplateKey; 6] = [
        Self::General,
        Self::Pm,
        Self::Ops,
        Self::Dev,
        Self::Project,
        Self::Sales,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Pm => "pm",
            Self::Ops => "ops",
            Self::Dev => "dev",
            Self::Project => "project",
            Self::Sales => "sales",
        }
    }

    /// Name shown in the template picker
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::General => "通用周报",
            Self::Pm => "产品经理",
            Self::Ops => "运营/增长",
            Self::Dev => "研发",
            Self::Project => "项目管理",
            Self::Sales => "销售支持",
        }
    }

    /// Who the template is meant for
    pub fn description(&self) -> &'static str {
        match self {
            Self::General => "适用于所有岗位",
            Self::Pm => "PM专用模板",
            Self::Ops => "运营、市场、增长",
            Self::Dev => "前端、后端、全栈",
            Self::Project => "PMO、项目经理",
            Self::Sales => "CS、售前、交付",
        }
    }
}

/// Tone of the generated text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    Stable,
    Result,
    Collaboration,
}

impl OutputStyle {
    pub const ALL: [OutputStyle; 3] = [Self::Stable, Self::Result, Self::Collaboration];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Result => "result",
            Self::Collaboration => "collaboration",
        }
    }
}

/// Verbosity of the generated text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputLength {
    Short,
    Medium,
    Long,
}

impl OutputLength {
    pub const ALL: [OutputLength; 3] = [Self::Short, Self::Medium, Self::Long];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(ReportType, TemplateKey, OutputStyle, OutputLength);

/// One unit of completed work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    /// What was done
    pub task: String,

    /// Deliverable produced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Supporting numbers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl WorkItem {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            output: None,
            data: None,
        }
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }
}

/// Validated input to prompt assembly
///
/// Built once by the caller (see `GenerateBody::into_request`) and only ever
/// read afterwards; derived requests are fresh copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub report_type: ReportType,
    #[serde(rename = "template")]
    pub template_key: TemplateKey,
    pub items: Vec<WorkItem>,
    pub risks: Option<String>,
    pub support: Option<String>,
    #[serde(rename = "nextWeek")]
    pub next_week_plans: Vec<String>,
    pub style: OutputStyle,
    pub length: OutputLength,
    pub project_name: Option<String>,
    pub metrics: Option<String>,
}

impl GenerateRequest {
    /// Minimal request; optional fields empty, medium stable output
    pub fn new(report_type: ReportType, template_key: TemplateKey, items: Vec<WorkItem>) -> Self {
        Self {
            report_type,
            template_key,
            items,
            risks: None,
            support: None,
            next_week_plans: Vec::new(),
            style: OutputStyle::Stable,
            length: OutputLength::Medium,
            project_name: None,
            metrics: None,
        }
    }

    /// Copy of this request with style and length replaced
    pub fn with_tone(&self, style: OutputStyle, length: OutputLength) -> Self {
        Self {
            style,
            length,
            ..self.clone()
        }
    }
}

/// Five named sections of a generated report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedReport {
    pub progress: String,
    pub key_results: String,
    pub collaboration: String,
    pub risks: String,
    pub next_week: String,
}

impl GeneratedReport {
    /// Sections in display order
    pub fn sections(&self) -> [&str; 5] {
        [
            self.progress.as_str(),
            self.key_results.as_str(),
            self.collaboration.as_str(),
            self.risks.as_str(),
            self.next_week.as_str(),
        ]
    }

    /// Number of sections with content
    pub fn filled_sections(&self) -> usize {
        self.sections().iter().filter(|s| !s.is_empty()).count()
    }
}

/// Side-by-side free and pro reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub free: GeneratedReport,
    pub pro: GeneratedReport,
}
