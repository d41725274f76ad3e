//! Event handler for the dashboard
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::services::{Confirmation, PendingAction};
use crate::storage::KeyValueStore;

use super::app::{App, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event<S: KeyValueStore>(app: &mut App<'_, S>, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => {}
    }
}

/// Handle a key event
fn handle_key_event<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // The confirmation dialog captures every key while open
    if app.has_dialog() {
        handle_dialog_key(app, key);
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Search => handle_search_key(app, key),
    }
}

/// Handle keys while the confirmation dialog is open
fn handle_dialog_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.answer(Confirmation::Confirmed)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.answer(Confirmation::Cancelled)
        }
        _ => {}
    }
}

/// Handle keys in normal mode
fn handle_normal_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('/') => app.begin_search(),
        KeyCode::Esc => app.clear_search(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Char('d') | KeyCode::Delete => match app.selected_transaction() {
            Some(id) => app.request(PendingAction::DeleteTransaction(id)),
            None => app.set_status("No transaction selected"),
        },
        KeyCode::Char('X') => {
            if app.ledger.transactions().is_empty() {
                app.set_status("No transactions to delete");
            } else {
                app.request(PendingAction::DeleteAllTransactions);
            }
        }
        KeyCode::Char('R') => app.request(PendingAction::ResetAllBudgets),
        KeyCode::Char('I') => app.request(PendingAction::ResetIncome),

        _ => {}
    }
}

/// Handle keys while typing a search
fn handle_search_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.end_search(),
        KeyCode::Esc => app.clear_search(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(c) => app.push_search_char(c),
        _ => {}
    }
}
