use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::TextArea;
use voxlate_core::Language;

use super::state::TuiState;

#[derive(Debug, PartialEq, Eq)]
pub enum TuiAction {
    /// Translate the input text into the selected language.
    Translate { text: String, language: Language },
    /// Play the last pronunciation.
    Play,
    /// Cancel the in-flight translation.
    Cancel,
    /// Quit the application.
    Quit,
    /// No action needed.
    None,
}

pub fn handle_key_event(
    key: KeyEvent,
    textarea: &mut TextArea,
    state: &mut TuiState,
) -> TuiAction {
    match (key.code, key.modifiers) {
        // Ctrl+C: cancel if translating, quit if idle
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => {
            if state.is_translating() {
                TuiAction::Cancel
            } else {
                TuiAction::Quit
            }
        }

        // Ctrl+D: quit
        (KeyCode::Char('d'), m) if m.contains(KeyModifiers::CONTROL) => TuiAction::Quit,

        // Ctrl+P: play, only once there is audio
        (KeyCode::Char('p'), m) if m.contains(KeyModifiers::CONTROL) => {
            if state.can_play {
                TuiAction::Play
            } else {
                TuiAction::None
            }
        }

        (KeyCode::Tab, _) => {
            state.next_language();
            TuiAction::None
        }

        (KeyCode::BackTab, _) => {
            state.previous_language();
            TuiAction::None
        }

        // Enter: translate. The input is kept so it can be sent again in
        // another language.
        (KeyCode::Enter, KeyModifiers::NONE) => match state.selected_language() {
            Some(language) => TuiAction::Translate {
                text: textarea.lines().join("\n"),
                language,
            },
            None => TuiAction::None,
        },

        // Shift+Enter or Alt+Enter: insert newline
        (KeyCode::Enter, m)
            if m.contains(KeyModifiers::SHIFT) || m.contains(KeyModifiers::ALT) =>
        {
            textarea.insert_newline();
            TuiAction::None
        }

        // Escape: clear input
        (KeyCode::Esc, _) => {
            *textarea = TextArea::default();
            configure_textarea(textarea);
            TuiAction::None
        }

        // All other keys: forward to textarea
        _ => {
            textarea.input(key);
            TuiAction::None
        }
    }
}

pub fn configure_textarea(textarea: &mut TextArea) {
    textarea.set_placeholder_text("English text... (Enter to translate, Tab to change language)");
    textarea.set_cursor_line_style(ratatui::style::Style::default());
    textarea.set_style(ratatui::style::Style::default().fg(ratatui::style::Color::White));
}
