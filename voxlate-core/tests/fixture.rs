use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::mpsc;
use voxlate_core::{
    controller::{Status, TranslatorActor, TranslatorEvent},
    playback::mock::RecordingOutput,
    settings::{manager::SettingsManager, BackendConfig, MockBehaviorConfig, Settings},
    speech::mock::{MockSynthesis, MockSynthesizer},
    translate::mock::{MockTranslation, MockTranslator},
};

pub struct Fixture {
    pub actor: TranslatorActor,
    pub event_rx: mpsc::UnboundedReceiver<TranslatorEvent>,
    pub translator: MockTranslator,
    pub synthesizer: MockSynthesizer,
    pub output: RecordingOutput,
    pub workspace_dir: TempDir,
}

impl Fixture {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::with_behavior(MockTranslation::Echo, MockSynthesis::default())
    }

    pub fn with_behavior(translation: MockTranslation, synthesis: MockSynthesis) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let workspace_dir = TempDir::new().unwrap();
        let settings_manager = isolated_settings(&workspace_dir, BackendConfig::default());

        let translator = MockTranslator::new(translation);
        let synthesizer = MockSynthesizer::new(synthesis);
        let output = RecordingOutput::new();

        let (actor, event_rx) = TranslatorActor::builder()
            .settings(settings_manager)
            .translator(Arc::new(translator.clone()))
            .synthesizer(Arc::new(synthesizer.clone()))
            .audio_output(Box::new(output.clone()))
            .build();

        Fixture {
            actor,
            event_rx,
            translator,
            synthesizer,
            output,
            workspace_dir,
        }
    }

    /// An actor whose gateways come from a mock backend in settings rather
    /// than injected mocks.
    #[allow(dead_code)]
    pub fn with_settings_backend(behavior: MockBehaviorConfig) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let workspace_dir = TempDir::new().unwrap();
        let settings_manager =
            isolated_settings(&workspace_dir, BackendConfig::Mock { behavior });
        let output = RecordingOutput::new();

        let (actor, event_rx) = TranslatorActor::builder()
            .settings(settings_manager)
            .audio_output(Box::new(output.clone()))
            .build();

        Fixture {
            actor,
            event_rx,
            translator: MockTranslator::default(),
            synthesizer: MockSynthesizer::default(),
            output,
            workspace_dir,
        }
    }

    pub fn audio_path(&self) -> PathBuf {
        self.workspace_dir.path().join("temp_audio.mp3")
    }

    pub async fn next_event(&mut self) -> TranslatorEvent {
        self.event_rx
            .recv()
            .await
            .expect("Event channel closed unexpectedly")
    }

    /// Collects events up to and including the next `StatusChanged`.
    pub async fn until_status(&mut self) -> Vec<TranslatorEvent> {
        let mut events = Vec::new();
        loop {
            let event = self.next_event().await;
            let done = matches!(event, TranslatorEvent::StatusChanged(_));
            events.push(event);
            if done {
                return events;
            }
        }
    }

    /// Sends a translate action and collects events until the form has
    /// settled (status is no longer `AwaitingResult`).
    #[allow(dead_code)]
    pub async fn translate(&mut self, text: &str, language: &str) -> Vec<TranslatorEvent> {
        self.actor.translate(text, language).unwrap();

        let mut events = Vec::new();
        loop {
            let event = self.next_event().await;
            let settled = matches!(
                event,
                TranslatorEvent::StatusChanged(status) if status != Status::AwaitingResult
            );
            events.push(event);
            if settled {
                return events;
            }
        }
    }

    /// Sends a translate action and returns once the pipeline is in flight.
    #[allow(dead_code)]
    pub async fn start_translation(&mut self, text: &str, language: &str) -> Vec<TranslatorEvent> {
        self.actor.translate(text, language).unwrap();
        let events = self.until_status().await;
        assert_eq!(
            events.last(),
            Some(&TranslatorEvent::StatusChanged(Status::AwaitingResult))
        );
        events
    }

    #[allow(dead_code)]
    pub async fn play(&mut self) -> Vec<TranslatorEvent> {
        self.actor.play().unwrap();
        self.until_status().await
    }
}

fn isolated_settings(workspace_dir: &TempDir, backend: BackendConfig) -> SettingsManager {
    let settings_path = workspace_dir.path().join(".voxlate").join("settings.toml");
    let settings_manager = SettingsManager::from_path(settings_path).unwrap();

    let mut settings = Settings::default();
    settings.backend = backend;
    settings.playback.audio_path = workspace_dir.path().join("temp_audio.mp3");
    settings_manager.save_settings(settings).unwrap();

    settings_manager
}

pub fn run<F, Fut>(test_fn: F)
where
    F: FnOnce(Fixture) -> Fut,
    Fut: std::future::Future<Output = ()>,
{
    run_with(Fixture::new, test_fn)
}

pub fn run_with<S, F, Fut>(setup: S, test_fn: F)
where
    S: FnOnce() -> Fixture,
    F: FnOnce(Fixture) -> Fut,
    Fut: std::future::Future<Output = ()>,
{
    use tokio::time::{timeout, Duration};

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    let local = tokio::task::LocalSet::new();

    runtime.block_on(local.run_until(async {
        let fixture = setup();
        let test_future = test_fn(fixture);
        timeout(Duration::from_secs(30), test_future)
            .await
            .expect("Test timed out after 30 seconds");
    }));
}
