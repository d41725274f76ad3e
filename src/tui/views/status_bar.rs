//! Status bar view
//!
//! Shows the search prompt, the latest status message, or key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::{App, InputMode};

const HINTS: &str = "q:Quit  /:Search  j/k:Move  d:Delete  X:Delete all  R:Reset budgets  I:Reset income";

/// Render the status bar
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let line = if app.input_mode == InputMode::Search {
        Line::from(vec![
            Span::styled(" /", Style::default().fg(Color::Yellow)),
            Span::raw(app.search_query.as_str()),
            Span::styled("▏", Style::default().fg(Color::Yellow)),
            Span::styled(
                "  Enter:Apply  Esc:Clear",
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else if let Some(message) = &app.status_message {
        let color = if message.starts_with("Error") {
            Color::Red
        } else {
            Color::Yellow
        };
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(color),
        ))
    } else {
        Line::from(Span::styled(
            format!(" {}", HINTS),
            Style::default().fg(Color::DarkGray),
        ))
    };

    frame.render_widget(Paragraph::new(line), area);
}
