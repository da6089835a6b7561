use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::mpsc;

use super::interaction::{Status, TranslateFailure};
use crate::language::Language;

/// `TranslatorEvent`s are the output of the translator actor.
///
/// Surfaces (TUI, line mode, tests) send messages to the actor and render
/// these events; they hold no application logic of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum TranslatorEvent {
    /// Emitted after every handled message and every finished pipeline.
    StatusChanged(Status),
    TranslationStarted {
        request_id: u64,
        language: Language,
    },
    TranslationCompleted {
        request_id: u64,
        language: Language,
        translated_text: String,
        audio_bytes: usize,
        completed_at: DateTime<Utc>,
        can_play: bool,
    },
    /// `display` is the text that replaces the translation on screen.
    /// `request_id` is `None` when the action was rejected before any call.
    /// `can_play` stays true when earlier audio is still held.
    TranslationFailed {
        request_id: Option<u64>,
        failure: TranslateFailure,
        display: String,
        can_play: bool,
    },
    PlaybackStarted {
        path: PathBuf,
    },
    /// Play was requested before any audio was synthesized.
    PlaybackSkipped,
    PlaybackFailed {
        message: String,
    },
    OperationCancelled {
        message: String,
    },
    Languages(Vec<Language>),
    Settings(serde_json::Value),
    Error(String),
}

/// A small wrapper over the event channel for convenience.
#[derive(Clone)]
pub struct EventSender {
    event_tx: mpsc::UnboundedSender<TranslatorEvent>,
}

impl EventSender {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TranslatorEvent>) {
        let (event_tx, rx) = mpsc::unbounded_channel();
        (Self { event_tx }, rx)
    }

    pub fn send(&self, event: TranslatorEvent) {
        let _ = self.event_tx.send(event);
    }

    pub fn set_status(&self, status: Status) {
        self.send(TranslatorEvent::StatusChanged(status));
    }
}
