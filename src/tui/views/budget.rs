//! Budget view
//!
//! One gauge per category showing how much of its budget has been spent

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::models::Category;
use crate::reports::{all_utilizations, BudgetStatus};
use crate::storage::KeyValueStore;
use crate::tui::app::App;

/// Render the budget gauges
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let block = Block::default()
        .title(" Budgets ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            Category::ALL
                .iter()
                .map(|_| Constraint::Length(1))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(inner);

    for (utilization, row) in all_utilizations(app.ledger.state(), app.period)
        .iter()
        .zip(rows.iter())
    {
        let color = match utilization.status {
            BudgetStatus::Over => Color::Red,
            BudgetStatus::Unset => Color::DarkGray,
            BudgetStatus::OnTrack => {
                let (r, g, b) = utilization.category.color_rgb();
                Color::Rgb(r, g, b)
            }
        };

        let amounts = if utilization.budget.is_positive() {
            format!(
                "{} / {}",
                utilization.spent.format_whole(),
                utilization.budget.format_whole()
            )
        } else {
            utilization.spent.format_whole()
        };

        let label = format!(
            "{:<13} {} {}%  {}",
            utilization.category.label(),
            amounts,
            utilization.percent(),
            utilization.status.label()
        );

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color).bg(Color::Black))
            .ratio(utilization.ratio.clamp(0.0, 1.0))
            .label(label);

        frame.render_widget(gauge, *row);
    }
}
