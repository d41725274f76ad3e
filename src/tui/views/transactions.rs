//! Transaction list view
//!
//! Shows the most recent transactions of the period, filtered by the search
//! query when one is set

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::format_date;
use crate::models::Category;
use crate::storage::KeyValueStore;
use crate::tui::app::{App, InputMode};

/// Render the transaction list
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let title = if app.search_query.is_empty() {
        " Recent Transactions ".to_string()
    } else {
        format!(" Search: {} ", app.search_query)
    };
    let border_color = if app.input_mode == InputMode::Search {
        Color::Yellow
    } else {
        Color::Cyan
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let transactions = app.visible_transactions();
    if transactions.is_empty() {
        let message = if app.search_query.is_empty() {
            "No transactions yet!"
        } else {
            "No matching transactions"
        };
        let text = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(11), // Date
        Constraint::Min(12),    // Merchant
        Constraint::Length(14), // Category
        Constraint::Length(12), // Amount
    ];

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Merchant"),
        Cell::from("Category"),
        Cell::from("Amount"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .height(1);

    let rows: Vec<Row> = transactions
        .iter()
        .map(|txn| {
            Row::new(vec![
                Cell::from(format_date(txn.date, &app.settings.date_format)),
                Cell::from(txn.merchant.clone()),
                Cell::from(txn.category.label()).style(category_style(txn.category)),
                Cell::from(txn.amount.format_whole()).style(Style::default().fg(Color::Red)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Palette colour of a category
pub fn category_style(category: Category) -> Style {
    let (r, g, b) = category.color_rgb();
    Style::default().fg(Color::Rgb(r, g, b))
}
