use reportgen_common::Result;
use std::future::Future;
use tracing::{debug, info};

use crate::prompt::assemble;
use crate::segment::Segmenter;
use crate::types::{ComparisonResult, GenerateRequest, GeneratedReport, OutputLength, OutputStyle};

const PRO_PLAN_HEADER: &str = "5. 下周计划：";
const PRO_PLAN_CLOSING: &str = "这些计划将帮助我们继续推进项目进展，确保工作的连贯性和高效性。";

/// assemble → generate → segment for one request
pub async fn run_pipeline<S, F, Fut>(
    request: &GenerateRequest,
    segmenter: &S,
    generate: F,
) -> Result<GeneratedReport>
where
    S: Segmenter + ?Sized,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<String>>,
{
    let prompt = assemble(request)?;
    debug!(
        "Assembled prompt - {}/{} style={} length={} chars={}",
        request.report_type,
        request.template_key,
        request.style,
        request.length,
        prompt.text.chars().count()
    );

    let raw = generate(prompt.into_string()).await?;
    segmenter.segment(&raw)
}

/// Generate the free (stable/short) and pro (result/long) reports side by side
///
/// Both pipelines run concurrently and the first failure fails the whole
/// comparison. When the request carries next-period plans, the pro report's
/// last section is replaced by a literal list of them.
pub async fn compare_generate<S, F, Fut>(
    request: &GenerateRequest,
    segmenter: &S,
    generate: F,
) -> Result<ComparisonResult>
where
    S: Segmenter + ?Sized,
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<String>>,
{
    let (free_request, pro_request) = tier_requests(request);

    info!(
        "Starting comparison generation - {}/{}",
        request.report_type, request.template_key
    );

    let (free, mut pro) = tokio::try_join!(
        run_pipeline(&free_request, segmenter, &generate),
        run_pipeline(&pro_request, segmenter, &generate),
    )?;

    if let Some(section) = pro_next_week_section(&request.next_week_plans) {
        pro.next_week = section;
    }

    Ok(ComparisonResult { free, pro })
}

/// Free (stable/short) and pro (result/long) copies of a request
pub fn tier_requests(request: &GenerateRequest) -> (GenerateRequest, GenerateRequest) {
    (
        request.with_tone(OutputStyle::Stable, OutputLength::Short),
        request.with_tone(OutputStyle::Result, OutputLength::Long),
    )
}

/// Numbered rendering of the user's plans, `None` when there are none
pub fn pro_next_week_section(plans: &[String]) -> Option<String> {
    if plans.is_empty() {
        return None;
    }

    let numbered = plans
        .iter()
        .enumerate()
        .map(|(i, plan)| format!("{}. {}", i + 1, plan))
        .collect::<Vec<_>>()
        .join("\n");

    Some(format!("{}\n{}\n\n{}", PRO_PLAN_HEADER, numbered, PRO_PLAN_CLOSING))
}
