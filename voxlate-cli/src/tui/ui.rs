use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};
use tui_textarea::TextArea;

use super::state::TuiState;
use super::widgets::{input_area, language_picker, status_bar, translation_panel};

pub fn draw_ui(frame: &mut Frame, state: &TuiState, textarea: &TextArea) {
    // Input height: textarea lines + 2 for borders, max 8 lines of text
    let textarea_lines = textarea.lines().len().clamp(1, 8) as u16;
    let input_height = textarea_lines + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(input_height), // Input area
            Constraint::Length(3),            // Language selector
            Constraint::Min(3),               // Translated text
            Constraint::Length(1),            // Status bar
        ])
        .split(frame.area());

    input_area::render(frame, chunks[0], textarea);
    language_picker::render(frame, chunks[1], state);
    translation_panel::render(frame, chunks[2], state);
    status_bar::render(frame, chunks[3], state);
}
