//! Report domain - naming, topic extraction and artifact kinds.
//!
//! Everything here is pure: no I/O, no async. The application layer feeds
//! prompts and generated text in, and hands the results to exporters.

mod artifact;
mod base_name;
mod topics;

pub use artifact::{ArtifactKind, OutputArtifact, REPORT_TITLE, SHEET_NAME};
pub use base_name::{
    keyword_name, keywords, BaseName, BaseNameError, BASE_NAME_PREFIX, DEFAULT_BASE_NAME,
    MAX_KEYWORDS, STOP_WORDS,
};
pub use topics::{extract_topics, line_topics, numbered_spans, TopicList};
