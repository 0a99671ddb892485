//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands write artifacts; queries read them back.

pub mod handlers;

pub use handlers::{
    DownloadArtifactError, DownloadArtifactHandler, DownloadArtifactQuery,
    DownloadArtifactResult, GenerateReportCommand, GenerateReportError, GenerateReportHandler,
    GenerateReportResult,
};
