mod export;
mod generate;
mod items;
mod system;
mod templates;

use actix_web::{error, web, HttpResponse};
use reportgen_report::MISSING_FIELDS;
use tracing::warn;

use crate::types::ErrorResponse;

pub use generate::{error_response, GENERATION_FAILED};

/// Register all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(system::health)
        .service(
            web::scope("/api")
                .service(generate::generate)
                .service(items::parse_items)
                .service(export::export)
                .service(templates::list_templates)
                .service(system::llm_status),
        );
}

/// Malformed bodies (unknown template, bad enum value) become the same 400 as
/// missing fields
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected request body: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(MISSING_FIELDS));
        error::InternalError::from_response(err, response).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use reportgen_common::{AppConfig, ReportGenError, Result};
    use reportgen_llm::{LlmClient, ReportGenerator};
    use serde_json::{json, Value};
    use std::sync::Arc;

    struct StubClient {
        reply: Option<&'static str>,
    }

    #[async_trait]
    impl LlmClient for StubClient {
        async fn generate(&self, _prompt: &str, _model: &str, _max_tokens: u32) -> Result<String> {
            self.reply
                .map(str::to_string)
                .ok_or_else(|| ReportGenError::external("connection refused"))
        }

        async fn test_connection(&self) -> Result<bool> {
            Ok(self.reply.is_some())
        }
    }

    fn state(reply: Option<&'static str>) -> web::Data<Arc<AppState>> {
        let config = AppConfig::default();
        let generator = ReportGenerator::from_config(Arc::new(StubClient { reply }), &config);
        web::Data::new(Arc::new(AppState::new(config, generator)))
    }

    const FIVE_SECTIONS: &str = "1. 进展\n2. 结果\n3. 协作\n4. 风险\n5. 计划";

    #[actix_web::test]
    async fn test_generate_single_report() {
        let app = test::init_service(
            App::new().app_data(state(Some(FIVE_SECTIONS))).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(json!({
                "template": "general",
                "items": [{"id": "1", "task": "修复登录问题"}],
                "nextWeek": ["上线新功能"],
                "style": "stable",
                "length": "medium"
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["progress"], "1. 进展");
        assert_eq!(body["keyResults"], "2. 结果");
        assert_eq!(body["nextWeek"], "5. 计划");
    }

    #[actix_web::test]
    async fn test_generate_comparison() {
        let app = test::init_service(
            App::new().app_data(state(Some(FIVE_SECTIONS))).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(json!({
                "template": "dev",
                "reportType": "monthly",
                "items": [{"task": "重构鉴权"}],
                "nextWeek": ["完成A", "评审B"],
                "style": "stable",
                "length": "medium",
                "comparison": true
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["free"]["nextWeek"], "5. 计划");
        let pro_next = body["pro"]["nextWeek"].as_str().unwrap();
        assert!(pro_next.contains("1. 完成A"));
        assert!(pro_next.contains("2. 评审B"));
    }

    #[actix_web::test]
    async fn test_generate_rejects_missing_fields() {
        let app =
            test::init_service(App::new().app_data(state(Some(FIVE_SECTIONS))).configure(configure))
                .await;

        for body in [
            json!({"template": "general", "items": []}),
            json!({"items": [{"task": "a"}]}),
            json!({"template": "hr", "items": [{"task": "a"}]}),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/generate")
                .set_json(body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], MISSING_FIELDS);
        }
    }

    #[actix_web::test]
    async fn test_generation_failure_is_generic() {
        let app = test::init_service(App::new().app_data(state(None)).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(json!({"template": "general", "items": [{"task": "a"}]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], GENERATION_FAILED);
    }

    #[actix_web::test]
    async fn test_parse_items() {
        let app = test::init_service(App::new().app_data(state(None)).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/items/parse")
            .set_json(json!({"text": "完成A\n\n评审B\n"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["items"], json!([{"task": "完成A"}, {"task": "评审B"}]));
    }

    #[actix_web::test]
    async fn test_export_comparison_markdown() {
        let app = test::init_service(App::new().app_data(state(None)).configure(configure)).await;

        let report = json!({
            "progress": "进展", "keyResults": "结果", "collaboration": "",
            "risks": "风险", "nextWeek": "计划"
        });
        let req = test::TestRequest::post()
            .uri("/api/export")
            .set_json(json!({"comparison": {"free": report, "pro": report}}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let disposition = resp
            .headers()
            .get("content-disposition")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment"));

        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.starts_with("# 周报对比\n\n## 免费版\n进展"));
    }

    #[actix_web::test]
    async fn test_export_requires_content() {
        let app = test::init_service(App::new().app_data(state(None)).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/export")
            .set_json(json!({"format": "text"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_list_templates() {
        let app = test::init_service(App::new().app_data(state(None)).configure(configure)).await;

        let req = test::TestRequest::get().uri("/api/templates").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["reportTypes"].as_array().unwrap().len(), 3);
        assert_eq!(body["templates"].as_array().unwrap().len(), 6);
        assert_eq!(body["templates"][1]["key"], "pm");
        assert_eq!(body["templates"][1]["name"], "产品经理");
        assert_eq!(body["styles"], json!(["stable", "result", "collaboration"]));
        assert_eq!(body["lengths"], json!(["short", "medium", "long"]));
    }

    #[actix_web::test]
    async fn test_health_and_status() {
        let app = test::init_service(App::new().app_data(state(None)).configure(configure)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model"], "deepseek-r1");

        let req = test::TestRequest::get().uri("/api/status").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["llm"], false);
    }
}
