use crate::app::{self, App, TextInput};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod categories;
mod entry;
mod login;
mod progress;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(k) if k.eq_ignore_ascii_case(&c))
}

/// Shared cursor editing for every text field. Returns `true` if the key was consumed.
fn handle_text_input_key(key: &KeyEvent, input: &mut TextInput) -> bool {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        _ => return false,
    }
    true
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if is_ctrl(&key, 'q') {
        app.quit();
        return;
    }

    match app.current_view {
        app::View::Login => login::handle_login_key(key, app, action_tx),
        app::View::Categories => categories::handle_categories_key(key, app),
        app::View::TimesheetEntry => entry::handle_entry_key(key, app),
        app::View::Progress => progress::handle_progress_key(key, app),
    }
}
