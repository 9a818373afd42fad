// order_service/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use order_service::{web::configure_app_routes, AppConfig, AppState};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // RUST_LOG overrides the default level.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting order service...");

  let app_config = AppConfig::from_env()
    .inspect_err(|e| tracing::error!(error = %e, "Failed to load application configuration."))?;

  let app_state = AppState::from_config(&app_config)
    .inspect_err(|e| tracing::error!(error = %e, "Failed to set up the order store."))?;

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("failed to bind {}", server_address))?
  .run()
  .await
  .context("HTTP server terminated with an error")
}
