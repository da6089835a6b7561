use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tokio::sync::mpsc;
use voxlate_core::{
    controller::{Status, TranslatorActor, TranslatorEvent},
    Language, SettingsManager,
};

use crate::commands::{handle_local_command, LocalCommandResult};
use crate::formatter::Formatter;

pub struct InteractiveApp {
    actor: TranslatorActor,
    event_rx: mpsc::UnboundedReceiver<TranslatorEvent>,
    formatter: Formatter,
    language: Language,
}

impl InteractiveApp {
    pub fn new(settings_manager: SettingsManager) -> Self {
        let language = settings_manager.settings().default_language;
        let (actor, event_rx) = TranslatorActor::launch(settings_manager);
        let formatter = Formatter::new();

        formatter.print_system(
            "Type English text to translate, /lang <name> to change language, /play to hear it, /quit to exit",
        );

        Self {
            actor,
            event_rx,
            formatter,
            language,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;

        loop {
            let prompt = self.formatter.prompt(&self.language.to_string());
            let line = match rl.readline(&prompt) {
                Ok(line) => line,
                Err(err) => match err {
                    ReadlineError::Interrupted => {
                        continue;
                    }
                    _ => break,
                },
            };

            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            match handle_local_command(&mut self.language, input) {
                LocalCommandResult::Handled { msg } => {
                    self.formatter.print_system(&msg);
                    continue;
                }
                LocalCommandResult::Play => {
                    self.actor.play()?;
                }
                LocalCommandResult::Exit => break,
                LocalCommandResult::Unhandled => {
                    rl.add_history_entry(&line)?;
                    self.actor
                        .translate(input.to_string(), self.language.to_string())?;
                }
            }

            self.wait_for_settled().await?;
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Print events until the actor reports a status other than
    /// `AwaitingResult`. Ctrl+C cancels the in-flight translation.
    async fn wait_for_settled(&mut self) -> Result<()> {
        use tokio::signal;
        loop {
            tokio::select! {
                recv = self.event_rx.recv() => {
                    match recv {
                        Some(event) => {
                            let settled = matches!(
                                event,
                                TranslatorEvent::StatusChanged(status) if status != Status::AwaitingResult
                            );
                            self.format_event(event);
                            if settled {
                                break;
                            }
                        }
                        None => {
                            break;
                        }
                    }
                }
                _ = signal::ctrl_c() => {
                    self.actor.cancel()?;
                    continue;
                }
            }
        }

        Ok(())
    }

    fn format_event(&self, event: TranslatorEvent) {
        match event {
            TranslatorEvent::TranslationCompleted {
                language,
                translated_text,
                ..
            } => {
                self.formatter
                    .print_translation(&language.to_string(), &translated_text);
            }
            TranslatorEvent::TranslationFailed { display, .. } => {
                self.formatter.print_error(&display);
            }
            TranslatorEvent::PlaybackStarted { path } => {
                self.formatter
                    .print_system(&format!("Playing {}", path.display()));
            }
            TranslatorEvent::PlaybackSkipped => {
                self.formatter.print_system("No audio data available.");
            }
            TranslatorEvent::PlaybackFailed { message } => {
                self.formatter
                    .print_error(&format!("Playback failed: {message}"));
            }
            TranslatorEvent::OperationCancelled { message } => {
                self.formatter.print_system(&message);
            }
            TranslatorEvent::Error(e) => self.formatter.print_error(&e),
            TranslatorEvent::StatusChanged(_)
            | TranslatorEvent::TranslationStarted { .. }
            | TranslatorEvent::Languages(_)
            | TranslatorEvent::Settings(_) => {}
        }
    }
}
