//! Report Exporter Port - Rendering topics into document formats.
//!
//! Each exporter owns exactly one [`ArtifactKind`]. Exporters only render
//! bytes; writing them to disk is the job of [`ArtifactStorage`].
//!
//! [`ArtifactStorage`]: super::ArtifactStorage

use thiserror::Error;

use crate::domain::report::{ArtifactKind, TopicList};

/// Port for rendering a topic list into one document format.
///
/// # Contract
///
/// Implementations must:
/// - Put the report title at the top of the document
/// - Render every topic as one visually distinct unit, in order
/// - Be deterministic for the same input (same rendered content)
pub trait ReportExporter: Send + Sync {
    /// The artifact kind this exporter produces.
    fn kind(&self) -> ArtifactKind;

    /// Render `topics` under `title` into the file's bytes.
    fn render(&self, title: &str, topics: &TopicList) -> Result<Vec<u8>, ExportError>;
}

/// Errors that can occur while rendering an artifact.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    /// The document library rejected the content or failed to serialize.
    #[error("{kind} rendering failed: {message}")]
    RenderFailed { kind: ArtifactKind, message: String },

    /// A resource the exporter depends on (e.g. a font file) is unusable.
    #[error("{kind} exporter resource unavailable: {message}")]
    ResourceUnavailable { kind: ArtifactKind, message: String },
}

impl ExportError {
    /// Create a render failure for `kind`.
    pub fn render_failed(kind: ArtifactKind, message: impl ToString) -> Self {
        Self::RenderFailed {
            kind,
            message: message.to_string(),
        }
    }

    /// Create a resource failure for `kind`.
    pub fn resource_unavailable(kind: ArtifactKind, message: impl ToString) -> Self {
        Self::ResourceUnavailable {
            kind,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_error_names_the_format() {
        let err = ExportError::render_failed(ArtifactKind::Pdf, "bad font");
        assert_eq!(err.to_string(), "pdf rendering failed: bad font");

        let err = ExportError::resource_unavailable(ArtifactKind::Document, "missing");
        assert_eq!(err.to_string(), "docx exporter resource unavailable: missing");
    }
}
