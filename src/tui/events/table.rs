//! Invalidation table event handlers.

use crate::tui::App;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_table_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('n') => app.start_new_invalidation(),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('o') => app.open_selected_in_browser(),
        KeyCode::Backspace => app.back_to_list(),
        _ => {
            super::handle_navigation(app, key);
        }
    }
}
