//! Report handlers - generating artifacts from prompts and serving them back.

mod download_artifact;
mod generate_report;

pub use download_artifact::{
    DownloadArtifactError, DownloadArtifactHandler, DownloadArtifactQuery,
    DownloadArtifactResult,
};
pub use generate_report::{
    GenerateReportCommand, GenerateReportError, GenerateReportHandler, GenerateReportResult,
};
