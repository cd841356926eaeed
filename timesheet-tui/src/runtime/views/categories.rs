use crate::app::{App, CategoriesFocus};
use crossterm::event::{KeyCode, KeyEvent};

use super::{handle_text_input_key, is_ctrl};

pub(super) fn handle_categories_key(key: KeyEvent, app: &mut App) {
    if is_ctrl(&key, 'p') {
        app.view_progress();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            app.categories_toggle_focus();
            return;
        }
        KeyCode::Enter => {
            match app.categories_focus {
                CategoriesFocus::Input => {
                    app.add_category_from_input();
                }
                CategoriesFocus::List => {
                    app.select_focused_category();
                }
            }
            return;
        }
        _ => {}
    }

    match app.categories_focus {
        CategoriesFocus::Input => match key.code {
            KeyCode::Down if !app.store.categories().is_empty() => {
                app.categories_focus = CategoriesFocus::List;
            }
            KeyCode::Esc => app.category_input.clear(),
            _ => {
                handle_text_input_key(&key, &mut app.category_input);
            }
        },
        CategoriesFocus::List => match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.category_next(),
            KeyCode::Up | KeyCode::Char('k') => {
                if app.category_index == 0 {
                    app.categories_focus = CategoriesFocus::Input;
                } else {
                    app.category_previous();
                }
            }
            KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Esc => {
                app.categories_focus = CategoriesFocus::Input;
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                app.view_progress();
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
            _ => {}
        },
    }
}
