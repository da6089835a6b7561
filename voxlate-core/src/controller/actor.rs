use crate::{
    controller::{
        events::{EventSender, TranslatorEvent},
        interaction::{run_pipeline, Interaction, TranslateFailure, Translation},
    },
    error::GatewayError,
    language::Language,
    playback::{default_output, AudioOutput, PlaybackAck, PlaybackSink},
    settings::{BackendConfig, MockBehaviorConfig, Settings, SettingsManager},
    speech::{
        aws_polly::AwsPolly,
        mock::{MockSynthesis, MockSynthesizer},
        SpeechSynthesizer,
    },
    translate::{
        aws_translate::AwsTranslate,
        mock::{MockTranslation, MockTranslator},
        Translator,
    },
};

use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Input messages to the `TranslatorActor`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TranslatorMessage {
    /// Translate `text` into the language with display name `language` and
    /// synthesize the result. Supersedes a translation already in flight.
    Translate { text: String, language: String },

    /// Play the most recent synthesized audio
    Play,

    /// Sends the selectable languages to the event channel
    ListLanguages,

    /// Sends the current settings to the event channel
    GetSettings,
}

/// The `TranslatorActor` owns the form state: the translated text, the audio
/// buffer and the playback sink.
///
/// Its interface is two channels. `TranslatorMessage`s go in through `tx`,
/// `TranslatorEvent`s come out of the receiver returned at launch, and
/// cancellation has its own channel so it is never queued behind other input.
/// Gateway calls run in a separate local task, so the actor keeps serving
/// `Play` and `Cancel` while a translation is in flight.
pub struct TranslatorActor {
    pub tx: mpsc::UnboundedSender<TranslatorMessage>,
    pub cancel_tx: mpsc::UnboundedSender<()>,
}

impl TranslatorActor {
    pub fn builder() -> TranslatorActorBuilder {
        TranslatorActorBuilder::default()
    }

    /// Launch the actor with gateways built from `settings_manager`. Must be
    /// called from within a `tokio::task::LocalSet`.
    pub fn launch(
        settings_manager: SettingsManager,
    ) -> (Self, mpsc::UnboundedReceiver<TranslatorEvent>) {
        TranslatorActorBuilder::default()
            .settings(settings_manager)
            .build()
    }

    pub fn translate(&self, text: impl Into<String>, language: impl Into<String>) -> Result<()> {
        self.tx.send(TranslatorMessage::Translate {
            text: text.into(),
            language: language.into(),
        })?;
        Ok(())
    }

    pub fn play(&self) -> Result<()> {
        self.tx.send(TranslatorMessage::Play)?;
        Ok(())
    }

    pub fn list_languages(&self) -> Result<()> {
        self.tx.send(TranslatorMessage::ListLanguages)?;
        Ok(())
    }

    pub fn get_settings(&self) -> Result<()> {
        self.tx.send(TranslatorMessage::GetSettings)?;
        Ok(())
    }

    pub fn cancel(&self) -> Result<()> {
        self.cancel_tx.send(())?;
        Ok(())
    }
}

/// Builds a `TranslatorActor`, optionally overriding the gateways and audio
/// output that would otherwise come from settings.
#[derive(Default)]
pub struct TranslatorActorBuilder {
    settings: Option<SettingsManager>,
    translator: Option<Arc<dyn Translator>>,
    synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
    output: Option<Box<dyn AudioOutput>>,
}

impl TranslatorActorBuilder {
    pub fn settings(mut self, settings: SettingsManager) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn synthesizer(mut self, synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }

    pub fn audio_output(mut self, output: Box<dyn AudioOutput>) -> Self {
        self.output = Some(output);
        self
    }

    /// Spawn the actor on the current `LocalSet`.
    pub fn build(self) -> (TranslatorActor, mpsc::UnboundedReceiver<TranslatorEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (cancel_tx, cancel_rx) = mpsc::unbounded_channel();
        let (event_sender, event_rx) = EventSender::new();

        tokio::task::spawn_local(async move {
            let settings_manager = match self.settings {
                Some(settings) => settings,
                None => match SettingsManager::new() {
                    Ok(settings) => settings,
                    Err(e) => {
                        error!(?e, "Failed to load settings");
                        event_sender.send(TranslatorEvent::Error(format!(
                            "Failed to load settings: {e:#}"
                        )));
                        return;
                    }
                },
            };
            let settings = settings_manager.settings();

            let (translator, synthesizer) = match (self.translator, self.synthesizer) {
                (Some(translator), Some(synthesizer)) => (translator, synthesizer),
                (translator, synthesizer) => {
                    let (default_translator, default_synthesizer) =
                        create_gateways(&settings).await;
                    (
                        translator.unwrap_or(default_translator),
                        synthesizer.unwrap_or(default_synthesizer),
                    )
                }
            };

            let output = self.output.unwrap_or_else(default_output);
            let (completion_tx, completion_rx) = mpsc::unbounded_channel();

            let state = ActorState {
                events: event_sender,
                interaction: Interaction::new(),
                translator,
                synthesizer,
                playback: PlaybackSink::new(settings.playback.audio_path.clone(), output),
                settings: settings_manager,
                in_flight: None,
                next_request_id: 1,
                completion_tx,
            };

            run_actor(state, rx, cancel_rx, completion_rx).await;
        });

        (TranslatorActor { tx, cancel_tx }, event_rx)
    }
}

/// Creates the translation and speech gateways for the configured backend.
pub async fn create_gateways(
    settings: &Settings,
) -> (Arc<dyn Translator>, Arc<dyn SpeechSynthesizer>) {
    match &settings.backend {
        BackendConfig::Aws(aws) => {
            info!(region = %aws.region, polly_region = %aws.polly_region(), "Using AWS backend");
            (
                Arc::new(AwsTranslate::new(aws).await),
                Arc::new(AwsPolly::new(aws).await),
            )
        }
        BackendConfig::Mock { behavior } => {
            info!(?behavior, "Using mock backend");
            match behavior {
                MockBehaviorConfig::Echo => (
                    Arc::new(MockTranslator::default()),
                    Arc::new(MockSynthesizer::default()),
                ),
                MockBehaviorConfig::AlwaysError => {
                    let err = GatewayError::service("mock backend is configured to fail");
                    (
                        Arc::new(MockTranslator::new(MockTranslation::Fail(err.clone()))),
                        Arc::new(MockSynthesizer::new(MockSynthesis::Fail(err))),
                    )
                }
            }
        }
    }
}

struct InFlight {
    request_id: u64,
    handle: JoinHandle<()>,
}

struct Completion {
    request_id: u64,
    result: Result<Translation, GatewayError>,
}

struct ActorState {
    events: EventSender,
    interaction: Interaction,
    translator: Arc<dyn Translator>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    playback: PlaybackSink,
    settings: SettingsManager,
    in_flight: Option<InFlight>,
    next_request_id: u64,
    completion_tx: mpsc::UnboundedSender<Completion>,
}

async fn run_actor(
    mut state: ActorState,
    mut rx: mpsc::UnboundedReceiver<TranslatorMessage>,
    mut cancel_rx: mpsc::UnboundedReceiver<()>,
    mut completion_rx: mpsc::UnboundedReceiver<Completion>,
) {
    info!("TranslatorActor started");

    loop {
        tokio::select! {
            message = rx.recv() => {
                let Some(message) = message else {
                    info!("Request queue dropped, stopping actor");
                    break;
                };
                if let Err(e) = process_message(&mut state, message) {
                    error!(?e, "Error processing message");
                    state.events.send(TranslatorEvent::Error(format!("Error: {e:#}")));
                }
                state.events.set_status(state.interaction.status());
            }

            Some(_) = cancel_rx.recv() => {
                handle_cancel(&mut state);
            }

            Some(completion) = completion_rx.recv() => {
                handle_completion(&mut state, completion);
            }
        }
    }

    if let Some(in_flight) = state.in_flight.take() {
        in_flight.handle.abort();
    }
    state.playback.stop();
}

fn process_message(state: &mut ActorState, message: TranslatorMessage) -> Result<()> {
    match message {
        TranslatorMessage::Translate { text, language } => {
            handle_translate(state, text, language);
            Ok(())
        }
        TranslatorMessage::Play => {
            handle_play(state);
            Ok(())
        }
        TranslatorMessage::ListLanguages => {
            state
                .events
                .send(TranslatorEvent::Languages(Language::ordered().collect()));
            Ok(())
        }
        TranslatorMessage::GetSettings => {
            let settings = serde_json::to_value(state.settings.settings())
                .map_err(|e| anyhow::anyhow!("Failed to serialize settings: {}", e))?;
            state.events.send(TranslatorEvent::Settings(settings));
            Ok(())
        }
    }
}

fn handle_translate(state: &mut ActorState, text: String, language: String) {
    let prepared = match state.interaction.begin_translation(&text, &language) {
        Ok(prepared) => prepared,
        Err(failure) => {
            info!(%language, %failure, "Translate action rejected");
            state.events.send(TranslatorEvent::TranslationFailed {
                request_id: None,
                failure,
                display: state.interaction.display().to_string(),
                can_play: state.interaction.can_play(),
            });
            return;
        }
    };

    if let Some(previous) = state.in_flight.take() {
        info!(request_id = previous.request_id, "Superseding in-flight translation");
        previous.handle.abort();
    }

    let request_id = state.next_request_id;
    state.next_request_id += 1;

    let language = prepared.language.language;
    info!(request_id, %language, "Starting translation");

    let translator = state.translator.clone();
    let synthesizer = state.synthesizer.clone();
    let completion_tx = state.completion_tx.clone();
    let handle = tokio::task::spawn_local(async move {
        let result = run_pipeline(translator.as_ref(), synthesizer.as_ref(), &prepared).await;
        let _ = completion_tx.send(Completion { request_id, result });
    });

    state.in_flight = Some(InFlight { request_id, handle });
    state
        .events
        .send(TranslatorEvent::TranslationStarted { request_id, language });
}

fn handle_completion(state: &mut ActorState, completion: Completion) {
    let current = state.in_flight.as_ref().map(|f| f.request_id);
    if current != Some(completion.request_id) {
        debug!(
            request_id = completion.request_id,
            ?current,
            "Dropping result of superseded translation"
        );
        return;
    }
    state.in_flight = None;

    let request_id = completion.request_id;
    match completion.result {
        Ok(translation) => {
            let language = translation.language;
            let translated_text = translation.text.clone();
            let audio_bytes = translation.audio.len();
            info!(request_id, audio_bytes, "Translation completed");

            state.interaction.complete(Ok(translation));
            state.events.send(TranslatorEvent::TranslationCompleted {
                request_id,
                language,
                translated_text,
                audio_bytes,
                completed_at: Utc::now(),
                can_play: state.interaction.can_play(),
            });
        }
        Err(err) => {
            warn!(request_id, kind = %err.kind, error = %err, "Translation failed");
            state.interaction.complete(Err(err.clone()));
            state.events.send(TranslatorEvent::TranslationFailed {
                request_id: Some(request_id),
                failure: TranslateFailure::Remote(err),
                display: state.interaction.display().to_string(),
                can_play: state.interaction.can_play(),
            });
        }
    }

    state.events.set_status(state.interaction.status());
}

fn handle_cancel(state: &mut ActorState) {
    let Some(in_flight) = state.in_flight.take() else {
        debug!("Cancellation received while idle");
        return;
    };

    info!(request_id = in_flight.request_id, "Cancelling translation");
    in_flight.handle.abort();
    state.interaction.cancel();

    state.events.send(TranslatorEvent::OperationCancelled {
        message: "Translation cancelled by user".to_string(),
    });
    state.events.set_status(state.interaction.status());
}

fn handle_play(state: &mut ActorState) {
    match state.playback.play(state.interaction.audio()) {
        Ok(PlaybackAck::Started { path }) => {
            state.events.send(TranslatorEvent::PlaybackStarted { path });
        }
        Ok(PlaybackAck::NothingToPlay) => {
            state.events.send(TranslatorEvent::PlaybackSkipped);
        }
        Err(e) => {
            error!(?e, "Playback failed");
            state.events.send(TranslatorEvent::PlaybackFailed {
                message: format!("{e:#}"),
            });
        }
    }
}
