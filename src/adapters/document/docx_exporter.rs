//! DOCX exporter built on `docx-rs`.
//!
//! The title paragraph uses the `Title` paragraph style; each topic becomes
//! one paragraph whose internal lines are joined by soft line breaks.

use docx_rs::{BreakType, Docx, Paragraph, Run, Style, StyleType};
use std::io::Cursor;

use crate::domain::report::{ArtifactKind, TopicList};
use crate::ports::{ExportError, ReportExporter};

use super::topic_text;

/// Style id Word uses for its built-in document title style.
const TITLE_STYLE_ID: &str = "Title";

/// Title style size in half-points (28pt).
const TITLE_SIZE_HALF_POINTS: usize = 56;

/// One paragraph of the rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocParagraph {
    pub is_title: bool,
    pub lines: Vec<String>,
}

/// Paragraph layout of a report, title first.
pub fn docx_paragraphs(title: &str, topics: &TopicList) -> Vec<DocParagraph> {
    let mut paragraphs = Vec::with_capacity(topics.len() + 1);
    paragraphs.push(DocParagraph {
        is_title: true,
        lines: vec![title.to_string()],
    });
    paragraphs.extend(topics.iter().map(|topic| DocParagraph {
        is_title: false,
        lines: topic_text(topic).lines().map(str::to_string).collect(),
    }));
    paragraphs
}

fn title_style() -> Style {
    Style::new(TITLE_STYLE_ID, StyleType::Paragraph)
        .name("Title")
        .size(TITLE_SIZE_HALF_POINTS)
        .bold()
}

fn to_run(paragraph: &DocParagraph) -> Run {
    let mut run = Run::new();
    for (i, line) in paragraph.lines.iter().enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    run
}

fn to_paragraph(paragraph: &DocParagraph) -> Paragraph {
    let rendered = Paragraph::new().add_run(to_run(paragraph));
    if paragraph.is_title {
        rendered.style(TITLE_STYLE_ID)
    } else {
        rendered
    }
}

/// Renders reports as Word documents.
#[derive(Debug, Clone, Default)]
pub struct DocxExporter;

impl DocxExporter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportExporter for DocxExporter {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Document
    }

    fn render(&self, title: &str, topics: &TopicList) -> Result<Vec<u8>, ExportError> {
        let docx = docx_paragraphs(title, topics)
            .iter()
            .fold(Docx::new().add_style(title_style()), |docx, paragraph| {
                docx.add_paragraph(to_paragraph(paragraph))
            });

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| ExportError::render_failed(ArtifactKind::Document, e))?;

        Ok(buffer.into_inner())
    }
}
