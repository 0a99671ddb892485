//! Output artifact kinds and written-artifact records.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Title rendered at the top of every artifact.
pub const REPORT_TITLE: &str = "Relatório de Inteligência Artificial";

/// Worksheet name used in spreadsheet artifacts.
pub const SHEET_NAME: &str = "Relatório IA";

/// The three file formats produced for every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Word-processor document (`.docx`).
    Document,
    /// Spreadsheet (`.xlsx`).
    Spreadsheet,
    /// Portable document (`.pdf`).
    Pdf,
}

impl ArtifactKind {
    /// All kinds, in the order they are written.
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Document,
        ArtifactKind::Spreadsheet,
        ArtifactKind::Pdf,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactKind::Document => "docx",
            ArtifactKind::Spreadsheet => "xlsx",
            ArtifactKind::Pdf => "pdf",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ArtifactKind::Document => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ArtifactKind::Spreadsheet => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ArtifactKind::Pdf => "application/pdf",
        }
    }

    /// Label shown on download links.
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::Document => "Word",
            ArtifactKind::Spreadsheet => "Excel",
            ArtifactKind::Pdf => "PDF",
        }
    }

    /// Resolves the kind from a file name's extension (case-insensitive).
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let extension = Path::new(file_name).extension()?.to_str()?.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.extension() == extension)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A file written for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub kind: ArtifactKind,
    /// File name relative to the output directory (`<BaseName>.<ext>`).
    pub file_name: String,
    /// Full path the file was written to.
    pub path: PathBuf,
    pub size_bytes: u64,
}
