use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_progress_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => {
            app.back();
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => app.goal_next_field(),
        KeyCode::Backspace => app.goal_input_backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.goal_input_char(c);
        }
        _ => {}
    }
}
