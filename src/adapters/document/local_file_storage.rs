//! Local Filesystem Storage Adapter - Implementation of ArtifactStorage.
//!
//! Stores rendered report files directly in one output directory.
//!
//! # Atomic Writes
//!
//! Uses a write-to-temp-then-rename pattern:
//! 1. Write content to `.<uuid>.tmp` in the same directory
//! 2. Sync to disk
//! 3. Rename to `<file_name>`
//!
//! Readers never observe a half-written artifact, and two requests writing
//! the same name leave one complete file behind. The temp name has a fixed
//! length, so any name that fits the filesystem as a final file also fits
//! as a temp file.

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::ports::{ArtifactStorage, StorageError};

/// Local filesystem storage for report artifacts.
#[derive(Debug, Clone)]
pub struct LocalArtifactStorage {
    /// Directory all artifacts are written to and served from.
    output_dir: PathBuf,
}

impl LocalArtifactStorage {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Resolves `file_name` inside the output directory.
    ///
    /// Only a single normal path component is accepted, so names carrying
    /// separators, `..`, or an absolute prefix never leave the directory.
    fn artifact_path(&self, file_name: &str) -> Result<PathBuf, StorageError> {
        let mut components = Path::new(file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if !file_name.contains('\\') => {
                Ok(self.output_dir.join(name))
            }
            _ => Err(StorageError::not_found(file_name)),
        }
    }

    fn temp_path(&self) -> PathBuf {
        self.output_dir
            .join(format!(".{}.tmp", Uuid::new_v4().simple()))
    }

    async fn ensure_output_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.output_dir).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create output directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })
    }

    async fn write_temp(&self, temp_path: &Path, content: &[u8]) -> Result<(), StorageError> {
        let mut file = fs::File::create(temp_path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => {
                StorageError::permission_denied(temp_path.display().to_string())
            }
            _ => StorageError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            )),
        })?;

        file.write_all(content).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl ArtifactStorage for LocalArtifactStorage {
    async fn write(&self, file_name: &str, content: &[u8]) -> Result<PathBuf, StorageError> {
        let final_path = self.artifact_path(file_name)?;
        self.ensure_output_dir().await?;

        let temp_path = self.temp_path();
        if let Err(e) = self.write_temp(&temp_path, content).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            )));
        }

        tracing::debug!(path = %final_path.display(), bytes = content.len(), "Artifact written");
        Ok(final_path)
    }

    async fn read(&self, file_name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.artifact_path(file_name)?;

        fs::read(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::not_found(file_name),
            std::io::ErrorKind::PermissionDenied => {
                StorageError::permission_denied(path.display().to_string())
            }
            // Reading a directory lands here on most platforms.
            _ if path.is_dir() => StorageError::not_found(file_name),
            _ => StorageError::io(format!("Failed to read {}: {}", path.display(), e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_storage() -> (LocalArtifactStorage, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let storage = LocalArtifactStorage::new(temp_dir.path());
        (storage, temp_dir)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Write Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn write_creates_file_in_output_dir() {
        let (storage, temp_dir) = create_storage();

        let path = storage.write("relatorio_ia.pdf", b"%PDF-1.3").await.unwrap();

        assert_eq!(path, temp_dir.path().join("relatorio_ia.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.3");
    }

    #[tokio::test]
    async fn write_creates_missing_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalArtifactStorage::new(temp_dir.path().join("nested/out"));

        storage.write("a.docx", b"PK").await.unwrap();

        assert!(temp_dir.path().join("nested/out/a.docx").exists());
    }

    #[tokio::test]
    async fn write_overwrites_existing() {
        let (storage, _temp_dir) = create_storage();

        storage.write("a.xlsx", b"first version, longer").await.unwrap();
        storage.write("a.xlsx", b"second").await.unwrap();

        assert_eq!(storage.read("a.xlsx").await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn write_leaves_no_temp_files() {
        let (storage, temp_dir) = create_storage();

        storage.write("a.pdf", b"x").await.unwrap();

        let names: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["a.pdf"]);
    }

    #[tokio::test]
    async fn write_accepts_names_near_the_filesystem_limit() {
        let (storage, temp_dir) = create_storage();
        let name = format!("relatorio_{}.docx", "a".repeat(215));
        assert_eq!(name.len(), 230);

        storage.write(&name, b"PK").await.unwrap();

        assert_eq!(std::fs::read(temp_dir.path().join(&name)).unwrap(), b"PK");
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn write_rejects_paths_outside_output_dir() {
        let (storage, _temp_dir) = create_storage();

        for name in ["../escape.pdf", "sub/a.pdf", "/etc/a.pdf", "..", ""] {
            let result = storage.write(name, b"x").await;
            assert!(result.unwrap_err().is_not_found(), "accepted {:?}", name);
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Read Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn read_returns_not_found_for_missing() {
        let (storage, _temp_dir) = create_storage();

        let err = storage.read("missing.pdf").await.unwrap_err();

        assert_eq!(err, StorageError::not_found("missing.pdf"));
    }

    #[tokio::test]
    async fn read_rejects_traversal() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("secret.txt"), b"secret").unwrap();
        let storage = LocalArtifactStorage::new(temp_dir.path().join("out"));

        for name in ["../secret.txt", "..\\secret.txt", "out/../secret.txt"] {
            let err = storage.read(name).await.unwrap_err();
            assert!(err.is_not_found(), "served {:?}", name);
        }
    }

    #[tokio::test]
    async fn read_of_directory_is_not_found() {
        let (storage, temp_dir) = create_storage();
        std::fs::create_dir(temp_dir.path().join("sub")).unwrap();

        let err = storage.read("sub").await.unwrap_err();

        assert!(err.is_not_found());
    }
}
