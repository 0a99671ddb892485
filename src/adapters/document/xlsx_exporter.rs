//! XLSX exporter built on `rust_xlsxwriter`.
//!
//! Column A holds everything: the bold title in row 1, then one topic per row.

use rust_xlsxwriter::{Format, FormatAlign, Workbook, XlsxError};

use crate::domain::report::{ArtifactKind, TopicList, SHEET_NAME};
use crate::ports::{ExportError, ReportExporter};

use super::topic_text;

const TOPIC_COLUMN_WIDTH: f64 = 100.0;

/// Cell values of column A, row 0 first.
pub fn xlsx_rows(title: &str, topics: &TopicList) -> Vec<String> {
    std::iter::once(title.to_string())
        .chain(topics.iter().map(|topic| topic_text(topic).to_string()))
        .collect()
}

/// Renders reports as Excel workbooks.
#[derive(Debug, Clone, Default)]
pub struct XlsxExporter;

impl XlsxExporter {
    pub fn new() -> Self {
        Self
    }

    fn build(&self, title: &str, topics: &TopicList) -> Result<Vec<u8>, XlsxError> {
        let title_format = Format::new().set_bold().set_font_size(14);
        let topic_format = Format::new().set_text_wrap().set_align(FormatAlign::Top);

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;
        worksheet.set_column_width(0, TOPIC_COLUMN_WIDTH)?;

        for (row, value) in xlsx_rows(title, topics).iter().enumerate() {
            let format = if row == 0 { &title_format } else { &topic_format };
            worksheet.write_string_with_format(row as u32, 0, value, format)?;
        }

        workbook.save_to_buffer()
    }
}

impl ReportExporter for XlsxExporter {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Spreadsheet
    }

    fn render(&self, title: &str, topics: &TopicList) -> Result<Vec<u8>, ExportError> {
        self.build(title, topics)
            .map_err(|e| ExportError::render_failed(ArtifactKind::Spreadsheet, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::REPORT_TITLE;

    #[test]
    fn title_then_one_row_per_topic() {
        let topics = TopicList::new(vec!["1. A\n".to_string(), "2. B\nmais".to_string()]);

        assert_eq!(
            xlsx_rows(REPORT_TITLE, &topics),
            vec![REPORT_TITLE, "1. A", "2. B\nmais"]
        );
    }

    #[test]
    fn render_produces_zip_container() {
        let topics = TopicList::new(vec!["1. A".to_string()]);
        let bytes = XlsxExporter::new().render(REPORT_TITLE, &topics).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn oversized_cell_is_a_render_error() {
        let topics = TopicList::new(vec!["x".repeat(40_000)]);

        let err = XlsxExporter::new().render(REPORT_TITLE, &topics).unwrap_err();

        assert!(matches!(
            err,
            ExportError::RenderFailed { kind: ArtifactKind::Spreadsheet, .. }
        ));
    }
}
