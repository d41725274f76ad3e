//! Application state for the dashboard
//!
//! The App struct holds all state needed for rendering and handling events.
//! Statistics are not stored here; views recompute them from the ledger on
//! every draw.

use crate::config::settings::Settings;
use crate::models::{Period, Transaction, TransactionId};
use crate::reports::{listing, search};
use crate::services::{
    Confirmation, ConfirmationFlow, Ledger, PendingAction, PeriodResolver, Removal,
};
use crate::storage::KeyValueStore;

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing a search query
    Search,
}

/// Main application state
pub struct App<'a, S: KeyValueStore> {
    /// The ledger being displayed
    pub ledger: &'a mut Ledger<S>,

    /// Application settings
    pub settings: &'a Settings,

    /// Month shown by every panel
    pub period: Period,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current input mode
    pub input_mode: InputMode,

    /// Search text applied to the transaction list
    pub search_query: String,

    /// Selected row in the transaction list
    pub selected_index: usize,

    /// Pending destructive action, if any
    pub confirmation: ConfirmationFlow,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a, S: KeyValueStore> App<'a, S> {
    /// Create a new App instance
    pub fn new(
        ledger: &'a mut Ledger<S>,
        settings: &'a Settings,
        resolver: &dyn PeriodResolver,
    ) -> Self {
        Self {
            ledger,
            settings,
            period: resolver.active_period(),
            should_quit: false,
            input_mode: InputMode::default(),
            search_query: String::new(),
            selected_index: 0,
            confirmation: ConfirmationFlow::new(),
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Transactions shown in the list: search results, most recent first
    pub fn visible_transactions(&self) -> Vec<&Transaction> {
        let matches = search(self.ledger.state(), self.period, &self.search_query);
        listing(&matches, self.settings.listing_limit)
    }

    /// Id of the highlighted transaction
    pub fn selected_transaction(&self) -> Option<TransactionId> {
        self.visible_transactions()
            .get(self.selected_index)
            .map(|t| t.id)
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        let max = self.visible_transactions().len();
        if self.selected_index < max.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the list after it shrinks
    pub fn clamp_selection(&mut self) {
        let len = self.visible_transactions().len();
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    /// Start typing a search
    pub fn begin_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    /// Finish typing; the query stays applied
    pub fn end_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Drop the search and show the default listing
    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.selected_index = 0;
        self.input_mode = InputMode::Normal;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.selected_index = 0;
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.selected_index = 0;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.confirmation.is_confirming()
    }

    /// Open the confirmation dialog for `action`
    pub fn request(&mut self, action: PendingAction) {
        self.confirmation.request(action);
    }

    /// Answer the open dialog and carry out the action if confirmed
    pub fn answer(&mut self, confirmation: Confirmation) {
        self.confirmation.answer(confirmation);
        if let Some((action, confirmation)) = self.confirmation.take_resolved() {
            self.perform(action, confirmation);
        }
    }

    fn perform(&mut self, action: PendingAction, confirmation: Confirmation) {
        let result = match action {
            PendingAction::ResetIncome => self.ledger.reset_income(confirmation).map(|outcome| {
                outcome
                    .is_applied()
                    .then_some("✅ Income, budgets, and all expenditure data have been reset")
            }),
            PendingAction::ResetAllBudgets => {
                self.ledger.reset_all_budgets(confirmation).map(|outcome| {
                    outcome
                        .is_applied()
                        .then_some("✅ Budgets and all expenditure data have been reset")
                })
            }
            PendingAction::DeleteAllTransactions => self
                .ledger
                .delete_all_transactions(confirmation)
                .map(|outcome| outcome.is_applied().then_some("All transactions deleted")),
            PendingAction::DeleteTransaction(id) => self
                .ledger
                .delete_transaction(id, confirmation)
                .map(|removal| match removal {
                    Removal::Removed(_) => Some("Transaction deleted"),
                    Removal::NotFound => Some("Transaction already gone"),
                    Removal::Cancelled => None,
                }),
        };

        match result {
            Ok(Some(message)) => match self.ledger.take_audit_failure() {
                Some(e) => self.set_status(format!("{} (audit log not updated: {})", message, e)),
                None => self.set_status(message),
            },
            Ok(None) => self.set_status("Cancelled"),
            Err(e) => self.set_status(format!("Error: {}", e)),
        }
        self.clamp_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use crate::services::FixedPeriod;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn seeded_ledger() -> Ledger<MemoryStore> {
        let mut ledger = Ledger::open(MemoryStore::new()).unwrap();
        ledger.set_income(Money::from_units(50000)).unwrap();
        for (merchant, category) in [
            ("Grocer", Category::Food),
            ("Metro", Category::Transport),
            ("Café X", Category::Food),
        ] {
            ledger
                .add_transaction(
                    merchant,
                    Money::from_units(100),
                    category,
                    NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
                )
                .unwrap();
        }
        ledger
    }

    fn jan() -> FixedPeriod {
        FixedPeriod(Period::monthly(2026, 1).unwrap())
    }

    #[test]
    fn test_visible_transactions_newest_first() {
        let mut ledger = seeded_ledger();
        let settings = Settings::default();
        let app = App::new(&mut ledger, &settings, &jan());

        let merchants: Vec<&str> = app
            .visible_transactions()
            .iter()
            .map(|t| t.merchant.as_str())
            .collect();
        assert_eq!(merchants, ["Café X", "Metro", "Grocer"]);
    }

    #[test]
    fn test_search_filters_list() {
        let mut ledger = seeded_ledger();
        let settings = Settings::default();
        let mut app = App::new(&mut ledger, &settings, &jan());

        app.begin_search();
        for c in "food".chars() {
            app.push_search_char(c);
        }
        app.end_search();
        assert_eq!(app.visible_transactions().len(), 2);

        app.clear_search();
        assert_eq!(app.visible_transactions().len(), 3);
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut ledger = seeded_ledger();
        let settings = Settings::default();
        let mut app = App::new(&mut ledger, &settings, &jan());

        for _ in 0..10 {
            app.move_down();
        }
        assert_eq!(app.selected_index, 2);
        app.move_up();
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_confirmed_delete() {
        let mut ledger = seeded_ledger();
        let settings = Settings::default();
        let mut app = App::new(&mut ledger, &settings, &jan());

        app.move_down();
        app.move_down();
        let id = app.selected_transaction().unwrap();
        app.request(PendingAction::DeleteTransaction(id));
        assert!(app.has_dialog());

        app.answer(Confirmation::Confirmed);
        assert!(!app.has_dialog());
        assert_eq!(app.visible_transactions().len(), 2);
        assert_eq!(app.selected_index, 1);
        assert_eq!(app.status_message.as_deref(), Some("Transaction deleted"));
    }

    #[test]
    fn test_audit_failure_is_reported_in_status() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut ledger = seeded_ledger()
            .with_audit(crate::audit::AuditLogger::new(temp_dir.path().to_path_buf()));
        let settings = Settings::default();
        let mut app = App::new(&mut ledger, &settings, &jan());

        app.request(PendingAction::DeleteAllTransactions);
        app.answer(Confirmation::Confirmed);

        assert!(app.visible_transactions().is_empty());
        let status = app.status_message.clone().unwrap();
        assert!(status.starts_with("All transactions deleted"));
        assert!(status.contains("audit log not updated"));
    }

    #[test]
    fn test_cancelled_reset() {
        let mut ledger = seeded_ledger();
        let settings = Settings::default();
        let mut app = App::new(&mut ledger, &settings, &jan());

        app.request(PendingAction::ResetIncome);
        app.answer(Confirmation::Cancelled);

        assert_eq!(app.status_message.as_deref(), Some("Cancelled"));
        assert_eq!(app.ledger.income(), Some(Money::from_units(50000)));
        assert_eq!(app.visible_transactions().len(), 3);
    }
}
