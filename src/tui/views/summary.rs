//! Summary header
//!
//! Balance, total spent, income and savings rate for the active month

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::reports::SummaryReport;
use crate::storage::KeyValueStore;
use crate::tui::app::App;

/// Render the summary header
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let report = SummaryReport::generate(app.ledger.state(), app.period);

    let balance_color = match report.balance {
        Some(b) if b.is_negative() => Color::Red,
        Some(_) => Color::Green,
        None => Color::DarkGray,
    };

    let label = Style::default().fg(Color::White);
    let value = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
    let placeholder = || "—".to_string();

    let figures = Line::from(vec![
        Span::styled(" Balance: ", label),
        Span::styled(
            report
                .balance
                .map(|b| b.format_whole())
                .unwrap_or_else(placeholder),
            value(balance_color),
        ),
        Span::raw("  │  "),
        Span::styled("Spent: ", label),
        Span::styled(report.total_spent.format_whole(), value(Color::Yellow)),
        Span::raw("  │  "),
        Span::styled("Income: ", label),
        Span::styled(
            report
                .income
                .map(|i| i.format_whole())
                .unwrap_or_else(placeholder),
            value(Color::Cyan),
        ),
        Span::raw("  │  "),
        Span::styled("Savings: ", label),
        Span::styled(
            report
                .savings_rate
                .map(|r| format!("{}%", r))
                .unwrap_or_else(placeholder),
            value(Color::Magenta),
        ),
    ]);

    let notice = match report.over_allocation {
        Some(over) => Line::from(Span::styled(
            format!(" ⚠️ Budgets exceed income by {}", over.format_whole()),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(Span::styled(
            format!(
                " {} transaction(s) · {} budgeted",
                report.transaction_count,
                report.total_budgeted.format_whole()
            ),
            Style::default().fg(Color::DarkGray),
        )),
    };

    let block = Block::default()
        .title(format!(" FinanceFlow · {} ", app.period.friendly_name()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(vec![figures, notice]).block(block), area);
}
