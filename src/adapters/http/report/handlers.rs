//! HTTP handlers for report endpoints.
//!
//! These handlers connect Axum routes to the report command and query handlers.

use std::sync::Arc;

use axum::extract::{Form, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::application::handlers::report::{
    DownloadArtifactError, DownloadArtifactHandler, DownloadArtifactQuery,
    GenerateReportCommand, GenerateReportError, GenerateReportHandler,
};
use crate::ports::{AIProvider, ArtifactStorage, ReportExporter};

use super::dto::GenerateForm;
use super::page::{encode_path_segment, render_page, PageView};

/// Body of every download that does not resolve to a file.
pub const NOT_FOUND_MESSAGE: &str = "Arquivo não encontrado.";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned for each request; dependencies are Arc-wrapped.
#[derive(Clone)]
pub struct ReportAppState {
    pub ai_provider: Arc<dyn AIProvider>,
    pub exporters: Vec<Arc<dyn ReportExporter>>,
    pub storage: Arc<dyn ArtifactStorage>,
    pub unique_names: bool,
}

impl ReportAppState {
    pub fn generate_report_handler(&self) -> GenerateReportHandler {
        GenerateReportHandler::new(
            self.ai_provider.clone(),
            self.exporters.clone(),
            self.storage.clone(),
        )
        .with_unique_names(self.unique_names)
    }

    pub fn download_artifact_handler(&self) -> DownloadArtifactHandler {
        DownloadArtifactHandler::new(self.storage.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET / - Input page
pub async fn index() -> Html<String> {
    Html(render_page(&PageView::default()))
}

/// POST /gerar - Generate text, export all formats, render links
pub async fn generate(
    State(state): State<ReportAppState>,
    Form(form): Form<GenerateForm>,
) -> Result<Html<String>, ReportApiError> {
    let handler = state.generate_report_handler();
    let result = handler
        .handle(GenerateReportCommand::new(form.prompt.clone()))
        .await?;

    tracing::info!(
        base_name = %result.base_name,
        topics = result.topics.len(),
        "Report generated"
    );

    let view = PageView::with_result(form.prompt, result.generated_text, &result.base_name);
    Ok(Html(render_page(&view)))
}

/// GET /novo_chat - Start over
pub async fn new_chat() -> Redirect {
    Redirect::to("/")
}

/// GET /download/*path - Serve an artifact as an attachment
pub async fn download(
    State(state): State<ReportAppState>,
    Path(file_name): Path<String>,
) -> Result<Response, ReportApiError> {
    let handler = state.download_artifact_handler();
    let result = handler.handle(DownloadArtifactQuery::new(file_name)).await?;

    let disposition = format!(
        "attachment; filename*=UTF-8''{}",
        encode_path_segment(&result.file_name)
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, result.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        result.content,
    )
        .into_response())
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts application errors to plain-text responses.
#[derive(Debug)]
pub enum ReportApiError {
    Generate(GenerateReportError),
    Download(DownloadArtifactError),
}

impl From<GenerateReportError> for ReportApiError {
    fn from(err: GenerateReportError) -> Self {
        Self::Generate(err)
    }
}

impl From<DownloadArtifactError> for ReportApiError {
    fn from(err: DownloadArtifactError) -> Self {
        Self::Download(err)
    }
}

impl IntoResponse for ReportApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ReportApiError::Generate(GenerateReportError::Generation(e)) => {
                tracing::error!(error = %e, "Text generation failed");
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Falha ao gerar o texto: {}", e),
                )
            }
            ReportApiError::Generate(e) => {
                tracing::error!(error = %e, "Report export failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Falha ao gerar os arquivos: {}", e),
                )
            }
            ReportApiError::Download(DownloadArtifactError::NotFound(name)) => {
                tracing::warn!(file = %name, "Download not found");
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string())
            }
            ReportApiError::Download(e) => {
                tracing::error!(error = %e, "Download failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Falha ao ler o arquivo.".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
