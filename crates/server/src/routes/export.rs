use actix_web::http::header::{
    Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue,
};
use actix_web::{post, web, HttpResponse};
use reportgen_report::{
    comparison_markdown, comparison_plain_text, export_file_name, to_plain_text, MISSING_FIELDS,
};
use tracing::debug;

use crate::types::{ErrorResponse, ExportFormat, ExportRequest};

/// POST /api/export - render a report or comparison as Markdown or plain text
#[post("/export")]
pub async fn export(req: web::Json<ExportRequest>) -> HttpResponse {
    let req = req.into_inner();

    let text = match (&req.comparison, &req.report, req.format) {
        (Some(comparison), _, ExportFormat::Markdown) => comparison_markdown(comparison),
        (Some(comparison), _, ExportFormat::Text) => comparison_plain_text(comparison),
        (None, Some(report), _) => to_plain_text(report),
        (None, None, _) => {
            return HttpResponse::BadRequest().json(ErrorResponse::new(MISSING_FIELDS));
        }
    };

    debug!("Exporting {:?} - {} chars", req.format, text.chars().count());

    match req.format {
        ExportFormat::Text => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(text),
        ExportFormat::Markdown => {
            let file_name = export_file_name(chrono::Local::now().date_naive());
            HttpResponse::Ok()
                .content_type("text/markdown; charset=utf-8")
                .insert_header(ContentDisposition {
                    disposition: DispositionType::Attachment,
                    parameters: vec![DispositionParam::FilenameExt(ExtendedValue {
                        charset: Charset::Ext("UTF-8".to_string()),
                        language_tag: None,
                        value: file_name.into_bytes(),
                    })],
                })
                .body(text)
        }
    }
}
