//! Response segmentation
//!
//! Splits generated text back into the five report sections.

use once_cell::sync::Lazy;
use regex::Regex;
use reportgen_common::{ReportGenError, Result};
use tracing::debug;

use crate::types::GeneratedReport;

/// Line starts that open a new section: `1.` style numbering or one of the
/// fixed section keywords
static SECTION_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(?:[0-9]\.|本周|关键|协作|风险|下周)").expect("valid section regex")
});

/// Strategy for turning raw generated text into report sections
pub trait Segmenter: Send + Sync {
    fn segment(&self, raw: &str) -> Result<GeneratedReport>;
}

/// Splits on section-looking line starts and assigns segments by position
///
/// The label text is not checked against the field it lands in: the first
/// segment is always `progress`, the second `key_results`, and so on.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicSegmenter;

impl Segmenter for HeuristicSegmenter {
    fn segment(&self, raw: &str) -> Result<GeneratedReport> {
        segment(raw)
    }
}

/// Segment with the default heuristic
pub fn segment(raw: &str) -> Result<GeneratedReport> {
    if raw.is_empty() {
        return Err(ReportGenError::EmptyResponse);
    }

    let parts = split_sections(raw);
    debug!("Segmented response into {} parts", parts.len());

    let mut fields = parts.into_iter().map(str::to_string);
    Ok(GeneratedReport {
        progress: fields.next().unwrap_or_default(),
        key_results: fields.next().unwrap_or_default(),
        collaboration: fields.next().unwrap_or_default(),
        risks: fields.next().unwrap_or_default(),
        next_week: fields.next().unwrap_or_default(),
    })
}

/// Split before each section start that follows a newline; the newline
/// itself is dropped
fn split_sections(raw: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;

    for m in SECTION_START.find_iter(raw) {
        let at = m.start();
        if at == 0 || at <= start {
            continue;
        }
        // (?m)^ only matches after '\n' here, which is one byte
        parts.push(&raw[start..at - 1]);
        start = at;
    }

    parts.push(&raw[start..]);
    parts
}
