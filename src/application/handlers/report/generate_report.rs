//! GenerateReportHandler - Command handler for the prompt-to-artifacts pipeline.
//!
//! One request runs, in order: naming, generation, topic extraction, then
//! every exporter followed by its storage write. Nothing is retried and
//! artifacts already written stay on disk if a later step fails.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::report::{
    extract_topics, keyword_name, BaseName, OutputArtifact, TopicList, REPORT_TITLE,
};
use crate::ports::{
    AIError, AIProvider, ArtifactStorage, CompletionRequest, ExportError, ReportExporter,
    StorageError,
};

/// Command to generate a report from a prompt.
#[derive(Debug, Clone)]
pub struct GenerateReportCommand {
    /// Free-text prompt forwarded verbatim to the provider.
    pub prompt: String,
    /// Explicit base name. Derived from the prompt keywords when `None`.
    pub base_name: Option<BaseName>,
}

impl GenerateReportCommand {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            base_name: None,
        }
    }

    pub fn with_base_name(mut self, base_name: BaseName) -> Self {
        self.base_name = Some(base_name);
        self
    }
}

/// Result of a successful report generation.
#[derive(Debug, Clone)]
pub struct GenerateReportResult {
    /// Raw text returned by the provider.
    pub generated_text: String,
    pub topics: TopicList,
    /// Stem shared by every artifact below.
    pub base_name: BaseName,
    /// Written artifacts, in exporter order.
    pub artifacts: Vec<OutputArtifact>,
}

/// Error type for report generation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GenerateReportError {
    #[error("Text generation failed: {0}")]
    Generation(#[from] AIError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Writing artifact failed: {0}")]
    Storage(#[from] StorageError),
}

/// Handler for generating reports.
///
/// # Dependencies
///
/// - `AIProvider`: produce the text
/// - `ReportExporter` (one per format): render the topics
/// - `ArtifactStorage`: persist the rendered files
///
/// # Usage
///
/// ```rust,ignore
/// let handler = GenerateReportHandler::new(provider, exporters, storage);
/// let result = handler.handle(GenerateReportCommand::new("Explique IA")).await?;
/// for artifact in &result.artifacts {
///     println!("{}", artifact.file_name);
/// }
/// ```
pub struct GenerateReportHandler {
    ai_provider: Arc<dyn AIProvider>,
    exporters: Vec<Arc<dyn ReportExporter>>,
    storage: Arc<dyn ArtifactStorage>,
    unique_names: bool,
}

impl GenerateReportHandler {
    pub fn new(
        ai_provider: Arc<dyn AIProvider>,
        exporters: Vec<Arc<dyn ReportExporter>>,
        storage: Arc<dyn ArtifactStorage>,
    ) -> Self {
        Self {
            ai_provider,
            exporters,
            storage,
            unique_names: false,
        }
    }

    /// Suffix every base name with a random request-scoped id.
    pub fn with_unique_names(mut self, unique_names: bool) -> Self {
        self.unique_names = unique_names;
        self
    }

    pub async fn handle(
        &self,
        cmd: GenerateReportCommand,
    ) -> Result<GenerateReportResult, GenerateReportError> {
        // 1. Name the artifacts
        let base_name = cmd
            .base_name
            .unwrap_or_else(|| keyword_name(&cmd.prompt));
        let base_name = if self.unique_names {
            base_name.with_unique_suffix()
        } else {
            base_name
        };
        tracing::debug!(base_name = %base_name, "Derived base name");

        // 2. Generate the text
        let response = self
            .ai_provider
            .complete(CompletionRequest::new(cmd.prompt))
            .await?;
        tracing::info!(
            model = %response.model,
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            "Text generated"
        );

        // 3. Extract topics
        let topics = extract_topics(&response.content);

        // 4. Render and store every format
        let mut artifacts = Vec::with_capacity(self.exporters.len());
        for exporter in &self.exporters {
            let kind = exporter.kind();
            let bytes = exporter.render(REPORT_TITLE, &topics)?;
            let file_name = base_name.file_name(kind);
            let path = self.storage.write(&file_name, &bytes).await?;

            tracing::info!(file = %file_name, bytes = bytes.len(), "Artifact exported");
            artifacts.push(OutputArtifact {
                kind,
                file_name,
                path,
                size_bytes: bytes.len() as u64,
            });
        }

        Ok(GenerateReportResult {
            generated_text: response.content,
            topics,
            base_name,
            artifacts,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
