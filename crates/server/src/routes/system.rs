use actix_web::{get, web, HttpResponse};
use std::sync::Arc;
use tracing::warn;

use crate::state::AppState;

/// GET /health - liveness
#[get("/health")]
pub async fn health(state: web::Data<Arc<AppState>>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "model": state.generator.model(),
    }))
}

/// GET /api/status - checks that the LLM endpoint answers
#[get("/status")]
pub async fn llm_status(state: web::Data<Arc<AppState>>) -> HttpResponse {
    let reachable = match state.generator.test_connection().await {
        Ok(ok) => ok,
        Err(e) => {
            warn!("LLM connection check failed: {}", e);
            false
        }
    };

    HttpResponse::Ok().json(serde_json::json!({
        "llm": reachable,
        "model": state.generator.model(),
    }))
}
