//! Topic extraction from generated text.
//!
//! Generated answers are expected to be organized as numbered items
//! (`1. Definição`, `2. Características`, ...). Each item becomes one topic,
//! together with every unnumbered line that follows it. Text without any
//! numbered header falls back to one topic per non-blank line.
//!
//! Segmentation is a line-scanning state machine:
//!
//! ```text
//!                 header line                      header line
//! SeekingHeader ──────────────▶ InSpan(span) ──────────────────▶ InSpan(new span)
//!      │ other line: skipped        │ other line: appended           (span emitted)
//!      ▼                            ▼ end of text: span emitted
//! ```

use serde::Serialize;
use tracing::debug;

/// Ordered topics extracted from one generated text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TopicList(Vec<String>);

impl TopicList {
    pub fn new(topics: Vec<String>) -> Self {
        Self(topics)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a TopicList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Returns the header line with its leading whitespace removed, if `line`
/// opens a numbered topic (`<digits>.`).
fn header_start(line: &str) -> Option<&str> {
    let rest = line.trim_start();
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 && rest[digits..].starts_with('.') {
        Some(rest)
    } else {
        None
    }
}

#[derive(Debug)]
enum ScanState {
    SeekingHeader,
    InSpan(String),
}

/// Splits `text` into numbered-topic spans.
///
/// Line terminators are kept, so every span except possibly the last ends
/// with the newline that precedes the next header.
pub fn numbered_spans(text: &str) -> Vec<String> {
    let mut spans = Vec::new();
    let mut state = ScanState::SeekingHeader;

    for line in text.split_inclusive('\n') {
        state = match (state, header_start(line)) {
            (ScanState::SeekingHeader, None) => ScanState::SeekingHeader,
            (ScanState::SeekingHeader, Some(header)) => ScanState::InSpan(header.to_string()),
            (ScanState::InSpan(span), Some(header)) => {
                spans.push(span);
                ScanState::InSpan(header.to_string())
            }
            (ScanState::InSpan(mut span), None) => {
                span.push_str(line);
                ScanState::InSpan(span)
            }
        };
    }

    if let ScanState::InSpan(span) = state {
        spans.push(span);
    }

    spans
}

/// One topic per non-blank line, trimmed.
pub fn line_topics(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extracts the ordered topic list from generated text.
pub fn extract_topics(text: &str) -> TopicList {
    let spans = numbered_spans(text);
    if !spans.is_empty() {
        debug!(topics = spans.len(), "extracted numbered topics");
        return TopicList(spans);
    }

    let lines = line_topics(text);
    debug!(topics = lines.len(), "no numbered headers, using line fallback");
    TopicList(lines)
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
