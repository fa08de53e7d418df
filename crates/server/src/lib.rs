//! reportgen HTTP server
//!
//! Actix-web REST API around the report generator

pub mod routes;
pub mod state;
pub mod types;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use reportgen_common::{AppConfig, Result};
use reportgen_llm::{OpenAiClient, ReportGenerator};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use state::AppState;

/// Build the generator from configuration and serve until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let client = OpenAiClient::from_config(&config)?;
    let generator = ReportGenerator::from_config(Arc::new(client), &config);
    let bind_addr = config.server_bind_address();
    let state = Arc::new(AppState::new(config, generator));

    info!(
        "Starting server on {} (model: {})",
        bind_addr,
        state.generator.model()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
