//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the report flow and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Hosted text generation
//! - `ReportExporter` - Rendering topics into DOCX/XLSX/PDF bytes
//! - `ArtifactStorage` - Writing and reading rendered files

mod ai_provider;
mod artifact_storage;
mod report_exporter;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, TokenUsage,
};
pub use artifact_storage::{ArtifactStorage, StorageError};
pub use report_exporter::{ExportError, ReportExporter};
