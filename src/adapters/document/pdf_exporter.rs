//! PDF exporter built on `printpdf`.
//!
//! Layout happens in points on US Letter pages with one-inch margins:
//! the bold title, a gap, then each topic as a block of wrapped lines
//! followed by a small gap. Blocks flow onto new pages as needed.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, Pt};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::domain::report::{ArtifactKind, TopicList};
use crate::ports::{ExportError, ReportExporter};

use super::topic_text;

const PAGE_WIDTH_PT: f32 = 612.0;
const PAGE_HEIGHT_PT: f32 = 792.0;
const MARGIN_PT: f32 = 72.0;

const TITLE_SIZE_PT: f32 = 18.0;
const TITLE_LEADING_PT: f32 = 22.0;
const TITLE_SPACE_AFTER_PT: f32 = 12.0;
const TITLE_WRAP_CHARS: usize = 50;

const BODY_SIZE_PT: f32 = 10.0;
const BODY_LEADING_PT: f32 = 12.0;
const TOPIC_SPACE_AFTER_PT: f32 = 6.0;
const BODY_WRAP_CHARS: usize = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Body,
}

impl LineStyle {
    fn font_size(self) -> f32 {
        match self {
            LineStyle::Title => TITLE_SIZE_PT,
            LineStyle::Body => BODY_SIZE_PT,
        }
    }
}

/// A single line of text placed on a page. `baseline_pt` is measured from
/// the bottom edge.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub page: usize,
    pub baseline_pt: f32,
    pub style: LineStyle,
    pub text: String,
}

/// Greedy word wrap. Words longer than `width` are split by characters.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let mut wrapped = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in line.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if current_len > 0 {
                wrapped.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            wrapped.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width && current_len > 0 {
            wrapped.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 {
        wrapped.push(current);
    }
    wrapped
}

struct LayoutCursor {
    page: usize,
    y: f32,
    lines: Vec<PlacedLine>,
}

impl LayoutCursor {
    fn place(&mut self, style: LineStyle, leading: f32, text: String) {
        if self.y - leading < MARGIN_PT {
            self.page += 1;
            self.y = PAGE_HEIGHT_PT - MARGIN_PT;
        }
        self.y -= leading;
        self.lines.push(PlacedLine {
            page: self.page,
            baseline_pt: self.y,
            style,
            text,
        });
    }

    fn skip(&mut self, space: f32) {
        self.y = (self.y - space).max(MARGIN_PT);
    }
}

/// Lays out the whole report. Deterministic for the same input.
pub fn pdf_layout(title: &str, topics: &TopicList) -> Vec<PlacedLine> {
    let mut cursor = LayoutCursor {
        page: 0,
        y: PAGE_HEIGHT_PT - MARGIN_PT,
        lines: Vec::new(),
    };

    for line in wrap_line(title, TITLE_WRAP_CHARS) {
        cursor.place(LineStyle::Title, TITLE_LEADING_PT, line);
    }
    cursor.skip(TITLE_SPACE_AFTER_PT);

    for topic in topics {
        for source_line in topic_text(topic).lines() {
            for line in wrap_line(source_line, BODY_WRAP_CHARS) {
                cursor.place(LineStyle::Body, BODY_LEADING_PT, line);
            }
        }
        cursor.skip(TOPIC_SPACE_AFTER_PT);
    }

    cursor.lines
}

/// Renders reports as PDF files.
///
/// The built-in Helvetica faces only cover Latin-1. Set `font_path` to a
/// TrueType font to render other scripts; it is then used for both title
/// and body.
#[derive(Debug, Clone, Default)]
pub struct PdfExporter {
    font_path: Option<PathBuf>,
}

impl PdfExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    fn fonts(
        &self,
        doc: &PdfDocumentReference,
    ) -> Result<(IndirectFontRef, IndirectFontRef), ExportError> {
        match &self.font_path {
            Some(path) => {
                let file = File::open(path).map_err(|e| {
                    ExportError::resource_unavailable(
                        ArtifactKind::Pdf,
                        format!("cannot open font {}: {}", path.display(), e),
                    )
                })?;
                let font = doc
                    .add_external_font(BufReader::new(file))
                    .map_err(|e| ExportError::resource_unavailable(ArtifactKind::Pdf, e))?;
                Ok((font.clone(), font))
            }
            None => {
                let regular = doc
                    .add_builtin_font(BuiltinFont::Helvetica)
                    .map_err(|e| ExportError::render_failed(ArtifactKind::Pdf, e))?;
                let bold = doc
                    .add_builtin_font(BuiltinFont::HelveticaBold)
                    .map_err(|e| ExportError::render_failed(ArtifactKind::Pdf, e))?;
                Ok((regular, bold))
            }
        }
    }
}

impl ReportExporter for PdfExporter {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Pdf
    }

    fn render(&self, title: &str, topics: &TopicList) -> Result<Vec<u8>, ExportError> {
        let page_width = Mm::from(Pt(PAGE_WIDTH_PT));
        let page_height = Mm::from(Pt(PAGE_HEIGHT_PT));

        let (doc, first_page, first_layer) =
            PdfDocument::new(title, page_width, page_height, "Layer 1");
        let (regular, bold) = self.fonts(&doc)?;

        let mut layers = vec![doc.get_page(first_page).get_layer(first_layer)];
        for line in pdf_layout(title, topics) {
            while line.page >= layers.len() {
                let (page, layer) =
                    doc.add_page(page_width, page_height, format!("Layer {}", layers.len() + 1));
                layers.push(doc.get_page(page).get_layer(layer));
            }
            let font = match line.style {
                LineStyle::Title => &bold,
                LineStyle::Body => &regular,
            };
            layers[line.page].use_text(
                line.text,
                line.style.font_size(),
                Mm::from(Pt(MARGIN_PT)),
                Mm::from(Pt(line.baseline_pt)),
                font,
            );
        }

        doc.save_to_bytes()
            .map_err(|e| ExportError::render_failed(ArtifactKind::Pdf, e))
    }
}
