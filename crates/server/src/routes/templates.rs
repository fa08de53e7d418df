use actix_web::{get, HttpResponse};
use reportgen_report::{OutputLength, OutputStyle, ReportType, TemplateKey};

use crate::types::{OptionInfo, TemplatesResponse};

/// GET /api/templates - report types, role templates, styles and lengths
#[get("/templates")]
pub async fn list_templates() -> HttpResponse {
    let report_types = ReportType::ALL
        .iter()
        .map(|t| OptionInfo {
            key: t.as_str().to_string(),
            name: t.display_name().to_string(),
            description: None,
        })
        .collect();

    let templates = TemplateKey::ALL
        .iter()
        .map(|t| OptionInfo {
            key: t.as_str().to_string(),
            name: t.display_name().to_string(),
            description: Some(t.description().to_string()),
        })
        .collect();

    HttpResponse::Ok().json(TemplatesResponse {
        report_types,
        templates,
        styles: OutputStyle::ALL.iter().map(|s| s.as_str().to_string()).collect(),
        lengths: OutputLength::ALL.iter().map(|l| l.as_str().to_string()).collect(),
    })
}
