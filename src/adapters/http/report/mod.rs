//! HTTP adapter for the report page, generation and downloads.

mod dto;
mod handlers;
mod page;
mod routes;

pub use dto::GenerateForm;
pub use handlers::{ReportApiError, ReportAppState, NOT_FOUND_MESSAGE};
pub use page::{encode_path_segment, escape_html, render_page, DownloadLink, PageView};
pub use routes::{report_router, report_routes};
