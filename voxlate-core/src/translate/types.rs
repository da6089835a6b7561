use serde::{Deserialize, Serialize};

use crate::language::{LanguageEntry, SOURCE_LANGUAGE_CODE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub source_text: String,
    pub source_language_code: String,
    pub target_language_code: String,
}

impl TranslationRequest {
    /// English source text aimed at `target`.
    pub fn new(source_text: impl Into<String>, target: &LanguageEntry) -> Self {
        Self {
            source_text: source_text.into(),
            source_language_code: SOURCE_LANGUAGE_CODE.to_string(),
            target_language_code: target.translation_code.to_string(),
        }
    }
}
