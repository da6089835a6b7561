use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

use crate::error::GatewayError;
use crate::language::{self, Language, LanguageEntry};
use crate::speech::{AudioBuffer, SpeechSynthesizer, SynthesisRequest};
use crate::translate::{TranslationRequest, Translator};

/// Where the form is in its translate/play cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Status {
    /// No audio yet and nothing in flight.
    Idle,
    /// A translate + synthesize pipeline is running.
    AwaitingResult,
    /// Audio from the last successful cycle is available to play.
    Ready,
}

/// Why a translate action did not produce a result. The `Display` text is
/// what the translated-text area shows.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslateFailure {
    #[error("Unsupported language.")]
    UnsupportedLanguage(String),

    #[error("Enter text to translate.")]
    EmptyText,

    #[error("Error: {0}")]
    Remote(GatewayError),
}

/// A translate action that passed validation and is ready for the gateways.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub language: &'static LanguageEntry,
    pub translation: TranslationRequest,
}

/// Output of one successful translate + synthesize cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub language: Language,
    pub text: String,
    pub audio: AudioBuffer,
}

/// Runs the translate then synthesize calls for `request`. Synthesis only
/// happens if translation succeeded. An empty buffer from the synthesizer is
/// a parse failure, so a successful result always has something to play.
pub async fn run_pipeline(
    translator: &dyn Translator,
    synthesizer: &dyn SpeechSynthesizer,
    request: &PreparedRequest,
) -> Result<Translation, GatewayError> {
    let text = translator.translate(&request.translation).await?;
    let audio = synthesizer
        .synthesize(&SynthesisRequest::new(text.clone(), request.language))
        .await?;
    if audio.is_empty() {
        return Err(GatewayError::parse("speech synthesis returned no audio"));
    }

    Ok(Translation {
        language: request.language.language,
        text,
        audio,
    })
}

/// State behind the form: what the translated-text area shows and the single
/// audio buffer.
///
/// Whether playback is available is derived from the buffer, so the play
/// control and the audio can never disagree. A failed cycle leaves the last
/// successful audio in place and playable.
#[derive(Debug)]
pub struct Interaction {
    status: Status,
    display: String,
    audio: Option<AudioBuffer>,
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new()
    }
}

impl Interaction {
    pub fn new() -> Self {
        Self {
            status: Status::Idle,
            display: String::new(),
            audio: None,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn audio(&self) -> Option<&AudioBuffer> {
        self.audio.as_ref()
    }

    pub fn can_play(&self) -> bool {
        self.audio.is_some()
    }

    /// Validate a translate action. On success the status becomes
    /// `AwaitingResult`; on failure the display shows the reason and the
    /// status is untouched.
    pub fn begin_translation(
        &mut self,
        text: &str,
        language_name: &str,
    ) -> Result<PreparedRequest, TranslateFailure> {
        let language = match language::lookup(language_name) {
            Ok(language) => language,
            Err(_) => {
                return Err(self.reject(TranslateFailure::UnsupportedLanguage(
                    language_name.to_string(),
                )))
            }
        };

        if text.trim().is_empty() {
            return Err(self.reject(TranslateFailure::EmptyText));
        }

        self.status = Status::AwaitingResult;
        Ok(PreparedRequest {
            language,
            translation: TranslationRequest::new(text, language),
        })
    }

    /// Apply the outcome of a pipeline run.
    pub fn complete(&mut self, result: Result<Translation, GatewayError>) {
        match result {
            Ok(translation) => {
                self.display = translation.text;
                self.audio = Some(translation.audio);
            }
            Err(err) => {
                self.display = TranslateFailure::Remote(err).to_string();
            }
        }
        self.settle();
    }

    /// Abandon the in-flight cycle; display and audio are left as they were.
    pub fn cancel(&mut self) {
        self.settle();
    }

    fn reject(&mut self, failure: TranslateFailure) -> TranslateFailure {
        self.display = failure.to_string();
        failure
    }

    fn settle(&mut self) {
        self.status = if self.audio.is_some() {
            Status::Ready
        } else {
            Status::Idle
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::mock::{MockSynthesis, MockSynthesizer, FAKE_MP3};
    use crate::translate::mock::{MockTranslation, MockTranslator};

    fn success(text: &str, bytes: &[u8]) -> Result<Translation, GatewayError> {
        Ok(Translation {
            language: Language::German,
            text: text.to_string(),
            audio: AudioBuffer::mp3(bytes.to_vec()),
        })
    }

    #[test]
    fn starts_idle_without_audio() {
        let interaction = Interaction::new();
        assert_eq!(interaction.status(), Status::Idle);
        assert_eq!(interaction.display(), "");
        assert!(!interaction.can_play());
    }

    #[test]
    fn unsupported_language_stays_idle() {
        let mut interaction = Interaction::new();

        let failure = interaction.begin_translation("Hello", "Klingon").unwrap_err();

        assert_eq!(failure, TranslateFailure::UnsupportedLanguage("Klingon".into()));
        assert_eq!(interaction.display(), "Unsupported language.");
        assert_eq!(interaction.status(), Status::Idle);
    }

    #[test]
    fn empty_text_is_rejected_before_any_call() {
        let mut interaction = Interaction::new();

        let failure = interaction.begin_translation("   ", "French").unwrap_err();

        assert_eq!(failure, TranslateFailure::EmptyText);
        assert_eq!(interaction.status(), Status::Idle);
    }

    #[test]
    fn begin_builds_english_request_for_target() {
        let mut interaction = Interaction::new();

        let prepared = interaction.begin_translation("Hello", "spanish").unwrap();

        assert_eq!(interaction.status(), Status::AwaitingResult);
        assert_eq!(prepared.language.voice_id, "Lucia");
        assert_eq!(prepared.translation.source_text, "Hello");
        assert_eq!(prepared.translation.source_language_code, "en");
        assert_eq!(prepared.translation.target_language_code, "es");
    }

    #[test]
    fn success_sets_display_and_audio() {
        let mut interaction = Interaction::new();
        interaction.begin_translation("Good morning", "German").unwrap();

        interaction.complete(success("Guten Morgen", b"ID3FAKEMP3"));

        assert_eq!(interaction.status(), Status::Ready);
        assert_eq!(interaction.display(), "Guten Morgen");
        assert_eq!(interaction.audio().unwrap().bytes, b"ID3FAKEMP3");
        assert!(interaction.can_play());
    }

    #[test]
    fn failure_without_prior_audio_returns_to_idle() {
        let mut interaction = Interaction::new();
        interaction.begin_translation("Hello", "French").unwrap();

        interaction.complete(Err(GatewayError::network("connection reset")));

        assert_eq!(interaction.status(), Status::Idle);
        assert_eq!(interaction.display(), "Error: connection reset");
        assert!(interaction.audio().is_none());
        assert!(!interaction.can_play());
    }

    #[test]
    fn failure_keeps_last_audio_playable() {
        let mut interaction = Interaction::new();
        interaction.begin_translation("Good morning", "German").unwrap();
        interaction.complete(success("Guten Morgen", b"first"));

        interaction.begin_translation("Good night", "German").unwrap();
        interaction.complete(Err(GatewayError::auth("token expired")));

        assert_eq!(interaction.display(), "Error: token expired");
        assert_eq!(interaction.audio().unwrap().bytes, b"first");
        assert!(interaction.can_play());
        assert_eq!(interaction.status(), Status::Ready);
    }

    #[test]
    fn new_success_overwrites_audio() {
        let mut interaction = Interaction::new();
        interaction.begin_translation("a", "German").unwrap();
        interaction.complete(success("A", b"first"));
        interaction.begin_translation("b", "German").unwrap();
        interaction.complete(success("B", b"second"));

        assert_eq!(interaction.display(), "B");
        assert_eq!(interaction.audio().unwrap().bytes, b"second");
    }

    #[test]
    fn unsupported_language_after_success_keeps_ready() {
        let mut interaction = Interaction::new();
        interaction.begin_translation("a", "German").unwrap();
        interaction.complete(success("A", b"first"));

        interaction.begin_translation("b", "Elvish").unwrap_err();

        assert_eq!(interaction.status(), Status::Ready);
        assert_eq!(interaction.display(), "Unsupported language.");
        assert!(interaction.can_play());
    }

    #[test]
    fn cancel_restores_status_from_audio() {
        let mut interaction = Interaction::new();
        interaction.begin_translation("a", "German").unwrap();
        interaction.cancel();
        assert_eq!(interaction.status(), Status::Idle);

        interaction.begin_translation("a", "German").unwrap();
        interaction.complete(success("A", b"first"));
        interaction.begin_translation("b", "German").unwrap();
        interaction.cancel();
        assert_eq!(interaction.status(), Status::Ready);
        assert_eq!(interaction.display(), "A");
    }

    #[tokio::test]
    async fn pipeline_translates_then_synthesizes() {
        let translator = MockTranslator::new(MockTranslation::Fixed("Guten Morgen".into()));
        let synthesizer = MockSynthesizer::default();
        let mut interaction = Interaction::new();
        let prepared = interaction.begin_translation("Good morning", "German").unwrap();

        let translation = run_pipeline(&translator, &synthesizer, &prepared)
            .await
            .unwrap();

        assert_eq!(translation.text, "Guten Morgen");
        assert_eq!(translation.audio.bytes, FAKE_MP3);
        let synthesis = &synthesizer.requests()[0];
        assert_eq!(synthesis.text, "Guten Morgen");
        assert_eq!(synthesis.voice_id, "Hans");
    }

    #[tokio::test]
    async fn pipeline_skips_synthesis_when_translation_fails() {
        let translator = MockTranslator::new(MockTranslation::Fail(GatewayError::service(
            "UnsupportedLanguagePairException",
        )));
        let synthesizer = MockSynthesizer::default();
        let mut interaction = Interaction::new();
        let prepared = interaction.begin_translation("Hello", "Tamil").unwrap();

        let err = run_pipeline(&translator, &synthesizer, &prepared)
            .await
            .unwrap_err();

        assert_eq!(err.message, "UnsupportedLanguagePairException");
        assert_eq!(synthesizer.call_count(), 0);
    }

    #[tokio::test]
    async fn pipeline_reports_synthesis_failure() {
        let translator = MockTranslator::default();
        let synthesizer =
            MockSynthesizer::new(MockSynthesis::Fail(GatewayError::parse("empty stream")));
        let mut interaction = Interaction::new();
        let prepared = interaction.begin_translation("Hello", "French").unwrap();

        let err = run_pipeline(&translator, &synthesizer, &prepared)
            .await
            .unwrap_err();

        assert_eq!(err, GatewayError::parse("empty stream"));
        assert_eq!(translator.call_count(), 1);
    }

    #[tokio::test]
    async fn empty_synthesized_audio_never_enables_play() {
        let translator = MockTranslator::default();
        let synthesizer = MockSynthesizer::new(MockSynthesis::Bytes(Vec::new()));
        let mut interaction = Interaction::new();
        let prepared = interaction.begin_translation("Hello", "French").unwrap();

        let result = run_pipeline(&translator, &synthesizer, &prepared).await;
        assert_eq!(
            result.as_ref().unwrap_err().kind,
            crate::error::GatewayErrorKind::Parse
        );
        interaction.complete(result);

        assert_eq!(interaction.status(), Status::Idle);
        assert!(!interaction.can_play());
        assert!(interaction.audio().is_none());
        assert_eq!(
            interaction.display(),
            "Error: speech synthesis returned no audio"
        );
    }
}
