//! Keyword-derived base names for report artifacts.
//!
//! The base name is the stem shared by the `.docx`, `.xlsx` and `.pdf` files
//! of one request. It is built from the first three meaningful words of the
//! prompt, so `"Explique robôs autônomos"` becomes
//! `relatorio_explique_robôs_autônomos`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use super::artifact::ArtifactKind;

/// Literal prefix of every keyword-derived name.
pub const BASE_NAME_PREFIX: &str = "relatorio_";

/// Name used when no keyword survives filtering.
pub const DEFAULT_BASE_NAME: &str = "relatorio_gerado";

/// Maximum number of keywords joined into a name.
pub const MAX_KEYWORDS: usize = 3;

/// Tokens of this many characters or fewer are discarded.
const MIN_TOKEN_CHARS_EXCLUSIVE: usize = 2;

/// Portuguese function words that never become part of a name.
pub const STOP_WORDS: [&str; 26] = [
    "o", "a", "os", "as", "um", "uma", "uns", "umas", "de", "do", "da", "dos", "das", "para",
    "em", "no", "na", "nos", "nas", "com", "por", "sobre", "que", "e", "se", "ou",
];

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("valid non-word pattern"));

/// Errors raised when an explicit base name is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BaseNameError {
    #[error("base name must not be empty")]
    Empty,

    #[error("base name must be a plain file stem: {0}")]
    NotAFileStem(String),
}

/// Filesystem-safe stem shared by all artifacts of one request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseName(String);

impl BaseName {
    /// Accepts an explicit name, rejecting anything that is not a plain stem.
    pub fn new(name: impl Into<String>) -> Result<Self, BaseNameError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(BaseNameError::Empty);
        }
        if trimmed == "."
            || trimmed == ".."
            || trimmed.contains(['/', '\\'])
            || trimmed.chars().any(char::is_control)
        {
            return Err(BaseNameError::NotAFileStem(name));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The fallback name used when the prompt yields no keywords.
    pub fn fallback() -> Self {
        Self(DEFAULT_BASE_NAME.to_string())
    }

    /// Returns this name with a request-scoped random suffix appended.
    pub fn with_unique_suffix(&self) -> Self {
        let id = Uuid::new_v4().simple().to_string();
        Self(format!("{}_{}", self.0, &id[..8]))
    }

    /// File name of the artifact of `kind` for this base name.
    pub fn file_name(&self, kind: ArtifactKind) -> String {
        format!("{}.{}", self.0, kind.extension())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_fallback(&self) -> bool {
        self.0 == DEFAULT_BASE_NAME
    }
}

impl fmt::Display for BaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BaseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Lower-cased tokens of `prompt` that qualify as keywords, in prompt order.
///
/// Length is measured on the token as written; lower-casing may change the
/// character count (`İ` becomes two characters).
pub fn keywords(prompt: &str) -> Vec<String> {
    NON_WORD
        .split(prompt)
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS_EXCLUSIVE)
        .map(str::to_lowercase)
        .filter(|token| !is_stop_word(token))
        .collect()
}

/// Derives the base name for `prompt`.
///
/// The first three keywords are joined with `_` behind [`BASE_NAME_PREFIX`].
/// Prompts without keywords map to [`DEFAULT_BASE_NAME`].
pub fn keyword_name(prompt: &str) -> BaseName {
    let keywords = keywords(prompt);
    if keywords.is_empty() {
        return BaseName::fallback();
    }

    let stem = keywords
        .iter()
        .take(MAX_KEYWORDS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("_");

    BaseName(format!("{}{}", BASE_NAME_PREFIX, stem))
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ───────────────────────────────────────────────────────────────
    // keyword_name
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn empty_prompt_uses_fallback() {
        assert_eq!(keyword_name("").as_str(), DEFAULT_BASE_NAME);
    }

    #[test]
    fn prompt_of_stop_words_uses_fallback() {
        assert_eq!(keyword_name("a de o").as_str(), DEFAULT_BASE_NAME);
        assert!(keyword_name("a de o").is_fallback());
    }

    #[test]
    fn short_words_are_discarded() {
        assert_eq!(keyword_name("IA é tl; ok").as_str(), DEFAULT_BASE_NAME);
    }

    #[test]
    fn length_is_counted_before_lower_casing() {
        // "İİ" has two characters but lower-cases to four.
        assert_eq!("İİ".to_lowercase().chars().count(), 4);
        assert_eq!(keywords("İİ robôs"), vec!["robôs"]);
        assert_eq!(keyword_name("İİ").as_str(), DEFAULT_BASE_NAME);
    }

    #[test]
    fn unicode_keywords_are_kept() {
        assert_eq!(
            keyword_name("Explique robôs autônomos").as_str(),
            "relatorio_explique_robôs_autônomos"
        );
    }

    #[test]
    fn only_first_three_keywords_are_used() {
        assert_eq!(
            keyword_name("Explique o que é inteligência artificial moderna").as_str(),
            "relatorio_explique_inteligência_artificial"
        );
    }

    #[test]
    fn stop_words_are_matched_case_insensitively() {
        assert_eq!(
            keyword_name("SOBRE Redes Neurais").as_str(),
            "relatorio_redes_neurais"
        );
    }

    #[test]
    fn punctuation_separates_tokens() {
        assert_eq!(
            keyword_name("robôs,sensores...e-atuadores!").as_str(),
            "relatorio_robôs_sensores_atuadores"
        );
    }

    #[test]
    fn underscores_are_word_characters() {
        assert_eq!(keyword_name("snake_case").as_str(), "relatorio_snake_case");
    }

    #[test]
    fn keywords_preserve_prompt_order() {
        assert_eq!(
            keywords("Zebra para abelha com cavalo"),
            vec!["zebra", "abelha", "cavalo"]
        );
    }

    // ───────────────────────────────────────────────────────────────
    // BaseName
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn file_names_share_the_stem() {
        let name = keyword_name("Explique robôs autônomos");
        assert_eq!(
            name.file_name(ArtifactKind::Document),
            "relatorio_explique_robôs_autônomos.docx"
        );
        assert_eq!(
            name.file_name(ArtifactKind::Spreadsheet),
            "relatorio_explique_robôs_autônomos.xlsx"
        );
        assert_eq!(
            name.file_name(ArtifactKind::Pdf),
            "relatorio_explique_robôs_autônomos.pdf"
        );
    }

    #[test]
    fn unique_suffix_appends_eight_hex_digits() {
        let name = keyword_name("redes neurais");
        let unique = name.with_unique_suffix();

        let suffix = unique
            .as_str()
            .strip_prefix("relatorio_redes_neurais_")
            .unwrap();
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(unique, name.with_unique_suffix());
    }

    #[test]
    fn explicit_name_is_trimmed() {
        assert_eq!(BaseName::new("  relatorio_ia ").unwrap().as_str(), "relatorio_ia");
    }

    #[test]
    fn explicit_name_rejects_paths() {
        assert_eq!(BaseName::new("   "), Err(BaseNameError::Empty));
        assert!(matches!(BaseName::new("../etc/passwd"), Err(BaseNameError::NotAFileStem(_))));
        assert!(matches!(BaseName::new("dir\\file"), Err(BaseNameError::NotAFileStem(_))));
        assert!(matches!(BaseName::new(".."), Err(BaseNameError::NotAFileStem(_))));
    }

    // ───────────────────────────────────────────────────────────────
    // Properties
    // ───────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn name_is_fallback_or_keyword_join(prompt in "\\PC{0,80}") {
            let name = keyword_name(&prompt);
            prop_assert!(!name.as_str().is_empty());

            if !name.is_fallback() {
                let stem = name.as_str().strip_prefix(BASE_NAME_PREFIX).unwrap();
                let expected: Vec<String> = keywords(&prompt).into_iter().take(MAX_KEYWORDS).collect();
                prop_assert_eq!(stem, expected.join("_"));
                for keyword in &expected {
                    prop_assert!(keyword.chars().count() > 2);
                    prop_assert!(!STOP_WORDS.contains(&keyword.as_str()));
                }
            }
        }

        #[test]
        fn stop_words_alone_never_name_a_report(
            words in proptest::collection::vec(proptest::sample::select(STOP_WORDS.to_vec()), 0..8)
        ) {
            let prompt = words.join(" ");
            let name = keyword_name(&prompt);
            prop_assert_eq!(name.as_str(), DEFAULT_BASE_NAME);
        }
    }
}
