//! Dashboard views
//!
//! Summary header, transaction list, budget gauges, budget chart and the
//! status bar, plus the confirmation dialog on top when one is open.

pub mod budget;
pub mod chart;
pub mod status_bar;
pub mod summary;
pub mod transactions;

use ratatui::Frame;

use crate::storage::KeyValueStore;

use super::app::App;
use super::dialogs;
use super::layout::DashboardLayout;

/// Render the entire dashboard
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>) {
    let layout = DashboardLayout::new(frame.area());

    summary::render(frame, app, layout.header);
    transactions::render(frame, app, layout.transactions);
    budget::render(frame, app, layout.budgets);
    chart::render(frame, app, layout.chart);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(action) = app.confirmation.pending() {
        dialogs::confirm::render(frame, action);
    }
}
