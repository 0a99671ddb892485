//! Axum router configuration for report endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{download, generate, index, new_chat, ReportAppState};

/// Create the report router.
///
/// # Routes
/// - `GET /` - Input page
/// - `POST /gerar` - Generate a report from the `prompt` form field
/// - `GET /novo_chat` - Redirect to `/`
/// - `GET /download/*path` - Download a written artifact
pub fn report_routes() -> Router<ReportAppState> {
    Router::new()
        .route("/", get(index))
        .route("/gerar", post(generate))
        .route("/novo_chat", get(new_chat))
        .route("/download/*path", get(download))
}

/// Create the complete report router with state applied.
pub fn report_router(state: ReportAppState) -> Router {
    report_routes().with_state(state)
}
