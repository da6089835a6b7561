//! Static registry of the target languages offered to the user.
//!
//! Each language maps to the code AWS Translate expects and the Polly voice
//! that reads the translation aloud. The set is closed: surfaces build their
//! selectors from [`all`] so only registry keys ever reach [`lookup`].

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

/// Every translation request is issued from English.
pub const SOURCE_LANGUAGE_CODE: &str = "en";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    French,
    German,
    Spanish,
    Chinese,
    Tamil,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    pub language: Language,
    pub display_name: &'static str,
    pub translation_code: &'static str,
    pub voice_id: &'static str,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    #[error("Unsupported language: {0}")]
    NotFound(String),
}

// Selector order.
static REGISTRY: [LanguageEntry; 5] = [
    LanguageEntry {
        language: Language::French,
        display_name: "French",
        translation_code: "fr",
        voice_id: "Celine",
    },
    LanguageEntry {
        language: Language::German,
        display_name: "German",
        translation_code: "de",
        voice_id: "Hans",
    },
    LanguageEntry {
        language: Language::Spanish,
        display_name: "Spanish",
        translation_code: "es",
        voice_id: "Lucia",
    },
    LanguageEntry {
        language: Language::Chinese,
        display_name: "Chinese",
        translation_code: "zh",
        voice_id: "Zhiyu",
    },
    LanguageEntry {
        language: Language::Tamil,
        display_name: "Tamil",
        translation_code: "ta",
        voice_id: "Aditi",
    },
];

impl Language {
    pub fn entry(self) -> &'static LanguageEntry {
        // REGISTRY is declared in variant order
        &REGISTRY[self as usize]
    }

    /// Languages in the order a selector should present them.
    pub fn ordered() -> impl Iterator<Item = Language> {
        Language::iter()
    }
}

/// Finds the entry for a display name, ignoring ASCII case and surrounding
/// whitespace.
pub fn lookup(display_name: &str) -> Result<&'static LanguageEntry, LanguageError> {
    display_name
        .trim()
        .parse::<Language>()
        .map(Language::entry)
        .map_err(|_| LanguageError::NotFound(display_name.to_string()))
}

pub fn all() -> &'static [LanguageEntry] {
    &REGISTRY
}
