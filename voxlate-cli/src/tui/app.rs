use anyhow::Result;
use crossterm::{
    event::{Event as CrosstermEvent, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;
use tui_textarea::TextArea;
use voxlate_core::{
    controller::{TranslatorActor, TranslatorEvent},
    SettingsManager,
};

use super::event_handler::handle_translator_event;
use super::input_handler::{configure_textarea, handle_key_event, TuiAction};
use super::state::TuiState;
use super::ui::draw_ui;

pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    actor: TranslatorActor,
    event_rx: mpsc::UnboundedReceiver<TranslatorEvent>,
    state: TuiState,
}

impl TuiApp {
    pub fn new(settings_manager: SettingsManager) -> Result<Self> {
        let default_language = settings_manager.settings().default_language;
        let (actor, event_rx) = TranslatorActor::launch(settings_manager);
        let state = TuiState::new(default_language);

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            actor,
            event_rx,
            state,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Install panic hook to restore terminal on panic
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        // The selector is populated from the actor's registry
        self.actor.list_languages()?;

        let mut textarea = TextArea::default();
        configure_textarea(&mut textarea);

        let tick_rate = Duration::from_millis(80);
        let mut crossterm_reader = EventStream::new();

        loop {
            let state = &self.state;
            let ta = &textarea;
            self.terminal.draw(|frame| {
                draw_ui(frame, state, ta);
            })?;

            if self.state.should_quit {
                break;
            }

            tokio::select! {
                Some(event) = self.event_rx.recv() => {
                    handle_translator_event(&mut self.state, event);
                }

                Some(Ok(crossterm_event)) = crossterm_reader.next() => {
                    // Resize needs nothing beyond the redraw at the top of the loop
                    if let CrosstermEvent::Key(key) = crossterm_event {
                        let action = handle_key_event(key, &mut textarea, &mut self.state);
                        self.dispatch(action)?;
                    }
                }

                // Tick for spinner animation
                _ = tokio::time::sleep(tick_rate) => {
                    if self.state.is_translating() {
                        self.state.spinner_frame += 1;
                    }
                }
            }
        }

        self.restore_terminal()?;
        Ok(())
    }

    fn dispatch(&mut self, action: TuiAction) -> Result<()> {
        match action {
            TuiAction::Translate { text, language } => {
                info!(%language, "Translate requested from TUI");
                self.actor.translate(text, language.to_string())?;
            }
            TuiAction::Play => self.actor.play()?,
            TuiAction::Cancel => self.actor.cancel()?,
            TuiAction::Quit => self.state.should_quit = true,
            TuiAction::None => {}
        }
        Ok(())
    }

    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
