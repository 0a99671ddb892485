//! Artifact Storage Port - Persisting rendered report files.
//!
//! Artifacts are addressed by plain file names (`<BaseName>.<ext>`) inside
//! one output directory. Writes replace existing files of the same name.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Port for storing and retrieving artifact files.
#[async_trait]
pub trait ArtifactStorage: Send + Sync {
    /// Write `content` as `file_name`, replacing any existing file.
    ///
    /// Returns the full path written.
    async fn write(&self, file_name: &str, content: &[u8]) -> Result<PathBuf, StorageError>;

    /// Read the whole file `file_name`.
    ///
    /// # Errors
    ///
    /// `StorageError::NotFound` when the file is absent or the name does not
    /// address a file inside the output directory.
    async fn read(&self, file_name: &str) -> Result<Vec<u8>, StorageError>;
}

/// Errors from artifact storage operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// File was not found.
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// Permission denied accessing the file.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// IO error during file operation.
    #[error("IO error: {message}")]
    Io { message: String },
}

impl StorageError {
    /// Creates a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates a permission denied error.
    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }
}
