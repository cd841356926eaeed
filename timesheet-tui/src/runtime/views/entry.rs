use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::{handle_text_input_key, is_ctrl};

pub(super) fn handle_entry_key(key: KeyEvent, app: &mut App) {
    if is_ctrl(&key, 's') {
        app.save_entry();
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.back();
        }
        KeyCode::Enter => {
            app.save_entry();
        }
        KeyCode::Tab | KeyCode::Down => app.entry_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.entry_previous_field(),
        _ => {
            handle_text_input_key(&key, app.entry_form.focused_input());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{EntryField, TextInput, View};
    use crate::config::TimesheetConfig;

    use super::super::test_keys::{chars, ctrl, key};

    fn entry_app() -> App {
        let mut app = App::new(&TimesheetConfig::default());
        app.navigate_to(View::Categories);
        app.add_category("Work");
        app.select_category("Work");
        app.entry_form.date = TextInput::from_str("2024-01-01");
        app
    }

    fn type_into(app: &mut App, field: EntryField, text: &str) {
        app.entry_form.focused_field = field;
        for k in chars(text) {
            handle_entry_key(k, app);
        }
    }

    #[test]
    fn enter_saves_valid_entry() {
        let mut app = entry_app();
        type_into(&mut app, EntryField::StartTime, "09:00");
        type_into(&mut app, EntryField::EndTime, "13:00");
        type_into(&mut app, EntryField::Description, "planning");
        handle_entry_key(key(KeyCode::Enter), &mut app);

        assert_eq!(app.current_view, View::Categories);
        let entries = app.store.entries_for("Work");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].hours_worked(), 4.0);
        assert_eq!(entries[0].description(), "planning");
    }

    #[test]
    fn ctrl_s_with_bad_times_stays() {
        let mut app = entry_app();
        type_into(&mut app, EntryField::StartTime, "9am");
        type_into(&mut app, EntryField::EndTime, "5pm");
        handle_entry_key(ctrl('s'), &mut app);

        assert_eq!(app.current_view, View::TimesheetEntry);
        assert_eq!(app.store.entry_count(), 0);
    }

    #[test]
    fn esc_goes_back_without_saving() {
        let mut app = entry_app();
        type_into(&mut app, EntryField::StartTime, "09:00");
        type_into(&mut app, EntryField::EndTime, "10:00");
        handle_entry_key(key(KeyCode::Esc), &mut app);

        assert_eq!(app.current_view, View::Categories);
        assert_eq!(app.store.entry_count(), 0);
    }

    #[test]
    fn tab_walks_fields() {
        let mut app = entry_app();
        assert_eq!(app.entry_form.focused_field, EntryField::Date);
        handle_entry_key(key(KeyCode::Tab), &mut app);
        assert_eq!(app.entry_form.focused_field, EntryField::StartTime);
        handle_entry_key(key(KeyCode::BackTab), &mut app);
        handle_entry_key(key(KeyCode::BackTab), &mut app);
        assert_eq!(app.entry_form.focused_field, EntryField::Description);
    }
}
