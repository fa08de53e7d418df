use actix_web::{post, web, HttpResponse};
use reportgen_common::ReportGenError;
use reportgen_report::GenerateBody;
use std::sync::Arc;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::state::AppState;
use crate::types::ErrorResponse;

/// Message shown for any generation failure
pub const GENERATION_FAILED: &str = "生成失败，请重试";

/// POST /api/generate - single report, or free/pro comparison when `comparison` is set
#[post("/generate")]
pub async fn generate(
    body: web::Json<GenerateBody>,
    state: web::Data<Arc<AppState>>,
) -> HttpResponse {
    let body = body.into_inner();
    let comparison = body.comparison;

    let request = match body.into_request() {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected generate request: {}", e);
            return error_response(&e);
        }
    };

    let request_id = Uuid::new_v4();
    let span = info_span!("generate", %request_id, comparison);

    async move {
        let result = if comparison {
            state
                .generator
                .compare(&request)
                .await
                .map(|result| HttpResponse::Ok().json(result))
        } else {
            state
                .generator
                .generate(&request)
                .await
                .map(|report| HttpResponse::Ok().json(report))
        };

        match result {
            Ok(response) => {
                info!("Generation succeeded");
                response
            }
            Err(e) => {
                error!("Generation failed: {}", e);
                error_response(&e)
            }
        }
    }
    .instrument(span)
    .await
}

/// Invalid input echoes its message; anything else gets the generic failure text
pub fn error_response(err: &ReportGenError) -> HttpResponse {
    match err {
        ReportGenError::InvalidInput(msg) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(msg.clone()))
        }
        _ => {
            let status = actix_web::http::StatusCode::from_u16(err.status_code())
                .unwrap_or(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
            HttpResponse::build(status).json(ErrorResponse::new(GENERATION_FAILED))
        }
    }
}
