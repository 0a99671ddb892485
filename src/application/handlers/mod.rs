//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod report;

pub use report::{
    DownloadArtifactError, DownloadArtifactHandler, DownloadArtifactQuery,
    DownloadArtifactResult, GenerateReportCommand, GenerateReportError, GenerateReportHandler,
    GenerateReportResult,
};
