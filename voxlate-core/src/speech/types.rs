use serde::{Deserialize, Serialize};

use crate::language::LanguageEntry;

/// Encoding of synthesized audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AudioFormat {
    #[default]
    Mp3,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice_id: String,
    pub output_format: AudioFormat,
}

impl SynthesisRequest {
    /// MP3 speech of `text` in the voice registered for `language`.
    pub fn new(text: impl Into<String>, language: &LanguageEntry) -> Self {
        Self {
            text: text.into(),
            voice_id: language.voice_id.to_string(),
            output_format: AudioFormat::Mp3,
        }
    }
}

/// Encoded audio returned from synthesis. The controller keeps at most one.
#[derive(Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    pub bytes: Vec<u8>,
    pub format: AudioFormat,
}

impl AudioBuffer {
    pub fn new(bytes: Vec<u8>, format: AudioFormat) -> Self {
        Self { bytes, format }
    }

    pub fn mp3(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(bytes.into(), AudioFormat::Mp3)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Audio payloads are large; log their size instead of their bytes.
impl std::fmt::Debug for AudioBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioBuffer")
            .field("format", &self.format)
            .field("len", &self.bytes.len())
            .finish()
    }
}
