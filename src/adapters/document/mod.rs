//! Document adapters - Report exporters and artifact storage.
//!
//! - `DocxExporter` - Word documents via `docx-rs`
//! - `XlsxExporter` - Excel workbooks via `rust_xlsxwriter`
//! - `PdfExporter` - PDF files via `printpdf`
//! - `LocalArtifactStorage` - Stores artifacts on the local filesystem

mod docx_exporter;
mod local_file_storage;
mod pdf_exporter;
mod xlsx_exporter;

pub use docx_exporter::{docx_paragraphs, DocParagraph, DocxExporter};
pub use local_file_storage::LocalArtifactStorage;
pub use pdf_exporter::{pdf_layout, wrap_line, LineStyle, PdfExporter, PlacedLine};
pub use xlsx_exporter::{xlsx_rows, XlsxExporter};

use std::sync::Arc;

use crate::ports::ReportExporter;

/// Topic text as rendered: trailing line breaks dropped.
pub(crate) fn topic_text(topic: &str) -> &str {
    topic.trim_end_matches(['\r', '\n'])
}

/// One exporter per artifact kind, in write order.
pub fn default_exporters(pdf_font_path: Option<&std::path::Path>) -> Vec<Arc<dyn ReportExporter>> {
    let pdf = match pdf_font_path {
        Some(path) => PdfExporter::new().with_font_path(path),
        None => PdfExporter::new(),
    };
    vec![
        Arc::new(DocxExporter::new()),
        Arc::new(XlsxExporter::new()),
        Arc::new(pdf),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::ArtifactKind;

    #[test]
    fn default_exporters_cover_every_kind_in_order() {
        let kinds: Vec<_> = default_exporters(None).iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, ArtifactKind::ALL.to_vec());
    }

    #[test]
    fn topic_text_drops_trailing_breaks_only() {
        assert_eq!(topic_text("1. A\nb\r\n\n"), "1. A\nb");
        assert_eq!(topic_text("  1. A"), "  1. A");
    }
}
