use voxlate_core::controller::TranslatorEvent;

use super::state::{Notice, TuiState};

pub fn handle_translator_event(state: &mut TuiState, event: TranslatorEvent) {
    match event {
        TranslatorEvent::StatusChanged(status) => {
            state.status = status;
        }

        TranslatorEvent::TranslationStarted { language, .. } => {
            state.notice = Some(Notice::Info(format!("Translating into {language}...")));
        }

        TranslatorEvent::TranslationCompleted {
            language,
            translated_text,
            can_play,
            ..
        } => {
            state.display = translated_text;
            state.display_is_error = false;
            state.display_language = Some(language);
            state.can_play = can_play;
            state.notice = None;
        }

        TranslatorEvent::TranslationFailed {
            display, can_play, ..
        } => {
            state.display = display;
            state.display_is_error = true;
            state.display_language = None;
            state.can_play = can_play;
            state.notice = None;
        }

        TranslatorEvent::PlaybackStarted { .. } => {
            state.notice = Some(Notice::Info("Playing pronunciation".to_string()));
        }

        TranslatorEvent::PlaybackSkipped => {
            state.notice = Some(Notice::Info("No audio data available.".to_string()));
        }

        TranslatorEvent::PlaybackFailed { message } => {
            state.notice = Some(Notice::Error(format!("Playback failed: {message}")));
        }

        TranslatorEvent::OperationCancelled { message } => {
            state.notice = Some(Notice::Info(message));
        }

        TranslatorEvent::Languages(languages) => {
            state.set_languages(languages);
        }

        TranslatorEvent::Error(e) => {
            state.notice = Some(Notice::Error(e));
        }

        TranslatorEvent::Settings(_) => {}
    }
}
