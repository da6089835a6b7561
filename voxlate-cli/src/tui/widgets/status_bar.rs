use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use voxlate_core::controller::Status;

use crate::tui::state::{Notice, TuiState};

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub fn render(frame: &mut Frame, area: Rect, state: &TuiState) {
    let status = match state.status {
        Status::AwaitingResult => {
            let spinner = SPINNER_CHARS[state.spinner_frame % SPINNER_CHARS.len()];
            format!("{spinner} Translating...")
        }
        Status::Ready => "Ready".to_string(),
        Status::Idle => "Idle".to_string(),
    };

    let sep = Span::styled(" | ", Style::default().fg(Color::DarkGray));

    // Greyed out until there is audio to play
    let play_style = if state.can_play {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };

    let mut parts: Vec<Span<'static>> = vec![
        Span::styled(" ", Style::default()),
        Span::styled(status, Style::default().fg(Color::Green)),
        sep.clone(),
        Span::styled("Ctrl+P Play Pronunciation", play_style),
        sep.clone(),
        Span::styled(
            "Enter Translate  Esc Clear  Ctrl+C Cancel/Quit",
            Style::default().fg(Color::Gray),
        ),
    ];

    match &state.notice {
        Some(Notice::Info(msg)) => {
            parts.push(sep);
            parts.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
        }
        Some(Notice::Error(msg)) => {
            parts.push(sep);
            parts.push(Span::styled(msg.clone(), Style::default().fg(Color::Red)));
        }
        None => {}
    }

    let bar = Paragraph::new(Line::from(parts))
        .style(Style::default().bg(Color::Rgb(30, 30, 30)));

    frame.render_widget(bar, area);
}
