//! Layout definitions for the dashboard
//!
//! Summary header on top, transactions beside budgets in the middle, the
//! budget chart below and a status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the dashboard
pub struct DashboardLayout {
    /// Balance, spending, income and savings rate
    pub header: Rect,
    /// Recent transactions list
    pub transactions: Rect,
    /// Budget gauges
    pub budgets: Rect,
    /// Budget vs spending bar chart
    pub chart: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl DashboardLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),  // Header
                Constraint::Min(10),    // Lists
                Constraint::Length(10), // Chart
                Constraint::Length(1),  // Status bar
            ])
            .split(area);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            transactions: middle[0],
            budgets: middle[1],
            chart: vertical[2],
            status_bar: vertical[3],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
