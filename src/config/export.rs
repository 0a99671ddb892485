//! Artifact export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where and how artifacts are written
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory artifacts are written to and downloaded from
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Append a per-request suffix to base names instead of overwriting
    #[serde(default)]
    pub unique_names: bool,

    /// TrueType font embedded in PDFs; builtin Helvetica when unset
    pub pdf_font_path: Option<PathBuf>,
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyOutputDir);
        }
        if let Some(font) = &self.pdf_font_path {
            if !font.is_file() {
                return Err(ValidationError::FontNotFound(font.display().to_string()));
            }
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            unique_names: false,
            pdf_font_path: None,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
