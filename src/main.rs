use std::sync::Arc;

use anyhow::Context;
use tower_http::trace::TraceLayer;

use topic_report::adapters::ai::GeminiProvider;
use topic_report::adapters::document::{default_exporters, LocalArtifactStorage};
use topic_report::adapters::http::{report_router, ReportAppState};
use topic_report::config::AppConfig;
use topic_report::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    init_tracing(&config.server.log_level, config.is_production());

    let provider = GeminiProvider::new(config.ai.gemini_config()?)
        .context("Failed to build Gemini client")?;

    let state = ReportAppState {
        ai_provider: Arc::new(provider),
        exporters: default_exporters(config.export.pdf_font_path.as_deref()),
        storage: Arc::new(LocalArtifactStorage::new(&config.export.output_dir)),
        unique_names: config.export.unique_names,
    };

    let app = report_router(state).layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {}", addr))?;

    tracing::info!(
        %addr,
        model = %config.ai.model,
        output_dir = %config.export.output_dir.display(),
        "Starting HTTP server"
    );

    axum::serve(listener, app)
        .await
        .context("HTTP server error")?;

    Ok(())
}
