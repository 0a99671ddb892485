//! HTTP adapters - page and download endpoints.

pub mod report;

pub use report::{report_router, ReportAppState};
