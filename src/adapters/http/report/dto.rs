//! Form payloads for report endpoints.

use serde::Deserialize;

/// Body of `POST /gerar` (`application/x-www-form-urlencoded`).
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateForm {
    pub prompt: String,
}
