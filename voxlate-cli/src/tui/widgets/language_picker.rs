use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::tui::state::TuiState;

/// Renders the target-language selector. Entries come only from the
/// registry, so the user cannot pick an unsupported language here.
pub fn render(frame: &mut Frame, area: Rect, state: &TuiState) {
    let titles: Vec<String> = state
        .languages
        .iter()
        .map(|language| language.to_string())
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" Language (Tab / Shift+Tab) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .select(state.selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );

    frame.render_widget(tabs, area);
}
