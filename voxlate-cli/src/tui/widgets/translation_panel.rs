use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::state::TuiState;

pub fn render(frame: &mut Frame, area: Rect, state: &TuiState) {
    let title = match state.display_language {
        Some(language) => format!(" Translated Text ({language}) "),
        None => " Translated Text ".to_string(),
    };

    let style = if state.display_is_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    };

    let paragraph = Paragraph::new(state.display.clone())
        .style(style)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(paragraph, area);
}
