//! DownloadArtifactHandler - Query handler serving previously written artifacts.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::report::ArtifactKind;
use crate::ports::{ArtifactStorage, StorageError};

/// Query for one artifact by file name.
#[derive(Debug, Clone)]
pub struct DownloadArtifactQuery {
    pub file_name: String,
}

impl DownloadArtifactQuery {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

/// The artifact bytes plus what is needed to serve them.
#[derive(Debug, Clone)]
pub struct DownloadArtifactResult {
    pub file_name: String,
    pub content_type: &'static str,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DownloadArtifactError {
    #[error("Artifact not found: {0}")]
    NotFound(String),

    #[error("Reading artifact failed: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for DownloadArtifactError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { path } => DownloadArtifactError::NotFound(path),
            other => DownloadArtifactError::Storage(other),
        }
    }
}

/// Handler for artifact downloads.
///
/// Only report files are served: hidden names and extensions other than
/// `.docx`, `.xlsx` and `.pdf` are reported as not found, whatever else
/// lives in the output directory.
pub struct DownloadArtifactHandler {
    storage: Arc<dyn ArtifactStorage>,
}

impl DownloadArtifactHandler {
    pub fn new(storage: Arc<dyn ArtifactStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(
        &self,
        query: DownloadArtifactQuery,
    ) -> Result<DownloadArtifactResult, DownloadArtifactError> {
        let kind = Self::servable_kind(&query.file_name)
            .ok_or_else(|| DownloadArtifactError::NotFound(query.file_name.clone()))?;
        let content = self.storage.read(&query.file_name).await?;

        Ok(DownloadArtifactResult {
            file_name: query.file_name,
            content_type: kind.content_type(),
            content,
        })
    }

    fn servable_kind(file_name: &str) -> Option<ArtifactKind> {
        if file_name.starts_with('.') {
            return None;
        }
        ArtifactKind::from_file_name(file_name)
    }
}
