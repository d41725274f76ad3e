//! Budget chart view
//!
//! Horizontal bars comparing each category's spending with its budget

use ratatui::{
    layout::{Direction, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use crate::reports::ChartsReport;
use crate::storage::KeyValueStore;
use crate::tui::app::App;

/// Render the budget vs spending chart
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let report = ChartsReport::generate(app.ledger.state(), app.period);

    let bars: Vec<Bar> = report
        .bars
        .iter()
        .map(|row| {
            let (r, g, b) = row.category.color_rgb();
            let text = if row.budget.is_positive() {
                format!("{} /{}", row.spent.format_whole(), row.budget.format_whole())
            } else {
                row.spent.format_whole()
            };

            Bar::default()
                .label(Line::from(row.category.label()))
                .value((row.ratio * 100.0).round() as u64)
                .text_value(text)
                .style(Style::default().fg(Color::Rgb(r, g, b)))
                .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        })
        .collect();

    let block = Block::default()
        .title(" Budget vs Spending ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(0)
        .max(100);

    frame.render_widget(chart, area);
}
