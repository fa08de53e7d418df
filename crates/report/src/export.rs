//! Copy/export renderings of generated reports

use chrono::NaiveDate;

use crate::types::{ComparisonResult, GeneratedReport};

/// Sections joined by blank lines, empty sections included
pub fn to_plain_text(report: &GeneratedReport) -> String {
    report.sections().join("\n\n")
}

/// Clipboard text for a comparison
pub fn comparison_plain_text(result: &ComparisonResult) -> String {
    format!(
        "【免费版】\n{}\n\n【Pro版】\n{}",
        to_plain_text(&result.free),
        to_plain_text(&result.pro)
    )
}

/// Markdown document for a comparison
pub fn comparison_markdown(result: &ComparisonResult) -> String {
    format!(
        "# 周报对比\n\n## 免费版\n{}\n\n## Pro版\n{}",
        to_plain_text(&result.free),
        to_plain_text(&result.pro)
    )
}

/// Download name for an exported report, e.g. `周报-2024-05-17.md`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("周报-{}.md", date.format("%Y-%m-%d"))
}
