use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::{enqueue_action, handle_text_input_key};

pub(super) fn handle_login_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.login_next_field();
        }
        KeyCode::Enter => {
            enqueue_action(action_tx, Action::SubmitLogin);
        }
        KeyCode::Esc => app.quit(),
        _ => {
            if handle_text_input_key(&key, app.login_form.focused_input()) {
                app.login_form.error = None;
            }
        }
    }
}
