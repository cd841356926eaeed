use crate::auth::Authenticator;
use crate::config::TimesheetConfig;
use crate::goal::GoalRange;
use crate::store::EntryStore;
use crate::time_utils::{self, format_hours};
use crate::types::TimesheetEntry;

mod navigation;
mod progress;
mod state;
pub use progress::DayProgress;
pub use state::{
    CategoriesFocus, EntryField, EntryForm, GoalField, GoalForm, LoginField, LoginForm, TextInput,
    View,
};

/// Root controller. Owns every piece of state the views render and is only
/// mutated through the transitions below.
pub struct App {
    pub running: bool,
    pub current_view: View,
    pub status_message: Option<String>,

    // Data
    pub store: EntryStore,
    pub goal: GoalRange,
    pub logged_in_user: Option<String>,
    pub selected_category: Option<String>,

    // Login view
    pub login_form: LoginForm,

    // Categories view
    pub category_input: TextInput,
    pub categories_focus: CategoriesFocus,
    pub category_index: usize,

    // Timesheet entry view
    pub entry_form: EntryForm,

    // Progress view
    pub goal_form: GoalForm,
}

impl App {
    pub fn new(cfg: &TimesheetConfig) -> Self {
        Self {
            running: true,
            current_view: View::Login,
            status_message: None,
            store: EntryStore::new(),
            goal: cfg.goal,
            logged_in_user: None,
            selected_category: None,
            login_form: LoginForm::default(),
            category_input: TextInput::new(),
            categories_focus: CategoriesFocus::Input,
            category_index: 0,
            entry_form: EntryForm::with_date(""),
            goal_form: GoalForm::from_goal(&cfg.goal),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch view and reset the per-view input state of the target.
    pub fn navigate_to(&mut self, view: View) {
        tracing::debug!(from = ?self.current_view, to = ?view, "navigate");
        self.current_view = view;

        match view {
            View::Login => {
                self.login_form = LoginForm::default();
            }
            View::Categories => {
                self.category_input.clear();
                let count = self.store.categories().len();
                if count == 0 {
                    self.categories_focus = CategoriesFocus::Input;
                    self.category_index = 0;
                } else if self.category_index >= count {
                    self.category_index = count - 1;
                }
            }
            View::TimesheetEntry => {
                self.entry_form = EntryForm::with_date(&time_utils::today_string());
            }
            View::Progress => {
                self.goal_form = GoalForm::from_goal(&self.goal);
            }
        }
    }

    /// Check the login form against the injected authenticator.
    ///
    /// Returns `true` and moves to the categories view when accepted.
    pub async fn submit_login(&mut self, auth: &dyn Authenticator) -> bool {
        if self.current_view != View::Login {
            return false;
        }
        let username = self.login_form.username.value.clone();
        let password = self.login_form.password.value.clone();

        match auth.verify(&username, &password).await {
            Ok(()) => {
                tracing::info!(%username, "login accepted");
                self.logged_in_user = Some(username);
                self.navigate_to(View::Categories);
                self.set_status("Logged in".to_string());
                true
            }
            Err(e) => {
                tracing::warn!(%username, error = %e, "login rejected");
                self.login_form.password.clear();
                self.login_form.focused_field = LoginField::Password;
                self.login_form.error = Some(e.to_string());
                false
            }
        }
    }

    /// Add a category by name. Blank and duplicate names are a silent no-op.
    pub fn add_category(&mut self, name: &str) -> bool {
        if self.current_view != View::Categories {
            return false;
        }
        let added = self.store.add_category(name);
        if added {
            tracing::info!(category = name, "category added");
            self.set_status(format!("Added category {}", name));
        } else {
            tracing::debug!(category = name, "category ignored");
        }
        added
    }

    /// Add whatever is in the category input, then clear it.
    pub fn add_category_from_input(&mut self) -> bool {
        let name = std::mem::take(&mut self.category_input).value;
        self.add_category(&name)
    }

    /// Open the entry view for a known category.
    pub fn select_category(&mut self, name: &str) -> bool {
        if self.current_view != View::Categories || !self.store.contains_category(name) {
            return false;
        }
        if let Some(idx) = self.store.categories().iter().position(|c| c == name) {
            self.category_index = idx;
        }
        self.selected_category = Some(name.to_string());
        self.clear_status();
        self.navigate_to(View::TimesheetEntry);
        true
    }

    /// Open the entry view for the highlighted list item.
    pub fn select_focused_category(&mut self) -> bool {
        let Some(name) = self.store.categories().get(self.category_index).cloned() else {
            return false;
        };
        self.select_category(&name)
    }

    pub fn view_progress(&mut self) -> bool {
        if self.current_view != View::Categories {
            return false;
        }
        self.clear_status();
        self.navigate_to(View::Progress);
        true
    }

    /// Duration the entry form would save right now, if both times parse.
    pub fn entry_preview_hours(&self) -> Option<f64> {
        time_utils::try_hours_between(
            &self.entry_form.start_time.value,
            &self.entry_form.end_time.value,
        )
    }

    /// Save the entry form into the selected category.
    ///
    /// A non-positive duration (including unparsable times) is ignored
    /// without an error and without leaving the view.
    pub fn save_entry(&mut self) -> bool {
        if self.current_view != View::TimesheetEntry {
            return false;
        }
        let Some(category) = self.selected_category.clone() else {
            return false;
        };

        let form = &self.entry_form;
        let Some(entry) = TimesheetEntry::new(
            &form.date.value,
            &form.start_time.value,
            &form.end_time.value,
            &form.description.value,
        ) else {
            tracing::debug!(
                start = %form.start_time.value,
                end = %form.end_time.value,
                hours = time_utils::hours_between(&form.start_time.value, &form.end_time.value),
                "entry save ignored"
            );
            return false;
        };

        let hours = entry.hours_worked();
        let date = entry.date().to_string();
        if self.store.append(&category, entry).is_err() {
            tracing::warn!(%category, "entry for unknown category dropped");
            return false;
        }

        tracing::info!(%category, %date, hours, "entry saved");
        self.navigate_to(View::Categories);
        self.set_status(format!(
            "Saved {} to {} on {}",
            format_hours(hours),
            category,
            date
        ));
        true
    }

    /// Return to the categories view from the entry or progress view.
    pub fn back(&mut self) -> bool {
        match self.current_view {
            View::TimesheetEntry | View::Progress => {
                self.clear_status();
                self.navigate_to(View::Categories);
                true
            }
            View::Login | View::Categories => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{CredentialsAuthenticator, DevAuthenticator};
    use crate::goal::GoalStatus;

    fn logged_in_app() -> App {
        let mut app = App::new(&TimesheetConfig::default());
        app.navigate_to(View::Categories);
        app
    }

    fn fill_entry(app: &mut App, date: &str, start: &str, end: &str) {
        app.entry_form.date = TextInput::from_str(date);
        app.entry_form.start_time = TextInput::from_str(start);
        app.entry_form.end_time = TextInput::from_str(end);
    }

    #[test]
    fn starts_at_login() {
        let app = App::new(&TimesheetConfig::default());
        assert_eq!(app.current_view, View::Login);
        assert_eq!(app.goal, GoalRange::new(4, 8));
        assert!(app.running);
    }

    #[tokio::test]
    async fn login_accepted_moves_to_categories() {
        let mut app = App::new(&TimesheetConfig::default());
        app.login_form.username = TextInput::from_str("user");
        app.login_form.password = TextInput::from_str("password");

        let auth = CredentialsAuthenticator::new("user", "password");
        assert!(app.submit_login(&auth).await);
        assert_eq!(app.current_view, View::Categories);
        assert_eq!(app.logged_in_user.as_deref(), Some("user"));
    }

    #[tokio::test]
    async fn login_rejected_stays_with_message() {
        let mut app = App::new(&TimesheetConfig::default());
        app.login_form.username = TextInput::from_str("user");
        app.login_form.password = TextInput::from_str("wrong");

        let auth = CredentialsAuthenticator::new("user", "password");
        assert!(!app.submit_login(&auth).await);
        assert_eq!(app.current_view, View::Login);
        assert_eq!(
            app.login_form.error.as_deref(),
            Some("Invalid username or password.")
        );
        assert!(app.login_form.password.value.is_empty());
        assert_eq!(app.login_form.username.value, "user");
    }

    #[tokio::test]
    async fn login_outside_login_view_is_ignored() {
        let mut app = logged_in_app();
        assert!(!app.submit_login(&DevAuthenticator).await);
        assert_eq!(app.current_view, View::Categories);
    }

    #[test]
    fn add_category_blank_and_duplicate_are_noops() {
        let mut app = logged_in_app();
        assert!(app.add_category("Work"));
        assert!(!app.add_category("Work"));
        assert!(!app.add_category(""));
        assert!(!app.add_category("  "));
        assert_eq!(app.store.categories(), ["Work"]);
        assert_eq!(app.current_view, View::Categories);
    }

    #[test]
    fn add_category_from_input_clears_input() {
        let mut app = logged_in_app();
        app.category_input = TextInput::from_str("Study");
        assert!(app.add_category_from_input());
        assert!(app.category_input.value.is_empty());

        app.category_input = TextInput::from_str("Study");
        assert!(!app.add_category_from_input());
        assert!(app.category_input.value.is_empty());
        assert_eq!(app.store.categories(), ["Study"]);
    }

    #[test]
    fn select_unknown_category_is_refused() {
        let mut app = logged_in_app();
        assert!(!app.select_category("Ghost"));
        assert_eq!(app.current_view, View::Categories);
        assert!(app.selected_category.is_none());
    }

    #[test]
    fn select_category_opens_entry_view() {
        let mut app = logged_in_app();
        app.add_category("Work");
        app.add_category("Study");
        assert!(app.select_category("Study"));
        assert_eq!(app.current_view, View::TimesheetEntry);
        assert_eq!(app.selected_category.as_deref(), Some("Study"));
        assert_eq!(app.category_index, 1);
        assert_eq!(app.entry_form.date.value.len(), 10);
    }

    #[test]
    fn save_with_positive_duration_appends_and_returns() {
        let mut app = logged_in_app();
        app.add_category("Work");
        app.select_category("Work");
        fill_entry(&mut app, "2024-01-01", "09:00", "17:30");
        app.entry_form.description = TextInput::from_str("release prep");

        assert!(app.save_entry());
        assert_eq!(app.current_view, View::Categories);
        let entries = app.store.entries_for("Work");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].hours_worked(), 8.5);
        assert_eq!(entries[0].description(), "release prep");
    }

    #[test]
    fn save_accepts_single_digit_hour() {
        let mut app = logged_in_app();
        app.add_category("Work");
        app.select_category("Work");
        fill_entry(&mut app, "2024-01-01", "9:00", "17:00");

        assert!(app.save_entry());
        assert_eq!(app.store.entries_for("Work")[0].hours_worked(), 8.0);
    }

    #[test]
    fn save_with_non_positive_duration_is_silent() {
        let mut app = logged_in_app();
        app.add_category("Work");
        app.select_category("Work");

        for (start, end) in [("09:00", "09:00"), ("17:00", "09:00"), ("nine", "five")] {
            fill_entry(&mut app, "2024-01-01", start, end);
            app.status_message = None;
            assert!(!app.save_entry());
            assert_eq!(app.current_view, View::TimesheetEntry);
            assert!(app.status_message.is_none());
        }
        assert_eq!(app.store.entry_count(), 0);
    }

    #[test]
    fn back_from_entry_does_not_save() {
        let mut app = logged_in_app();
        app.add_category("Work");
        app.select_category("Work");
        fill_entry(&mut app, "2024-01-01", "09:00", "10:00");

        assert!(app.back());
        assert_eq!(app.current_view, View::Categories);
        assert_eq!(app.store.entry_count(), 0);
    }

    #[test]
    fn back_is_only_valid_from_entry_and_progress() {
        let mut app = App::new(&TimesheetConfig::default());
        assert!(!app.back());
        assert_eq!(app.current_view, View::Login);

        app.navigate_to(View::Categories);
        assert!(!app.back());

        assert!(app.view_progress());
        assert_eq!(app.current_view, View::Progress);
        assert!(app.back());
        assert_eq!(app.current_view, View::Categories);
    }

    #[test]
    fn transitions_are_guarded_by_view() {
        let mut app = App::new(&TimesheetConfig::default());
        assert!(!app.add_category("Work"));
        assert!(!app.view_progress());
        assert!(!app.save_entry());
        assert_eq!(app.current_view, View::Login);
        assert!(app.store.categories().is_empty());
    }

    #[test]
    fn entry_preview_reflects_form() {
        let mut app = logged_in_app();
        app.add_category("Work");
        app.select_category("Work");
        assert_eq!(app.entry_preview_hours(), None);
        fill_entry(&mut app, "2024-01-01", "08:00", "08:45");
        assert_eq!(app.entry_preview_hours(), Some(0.75));
    }

    #[tokio::test]
    async fn end_to_end_login_to_progress() {
        let mut app = App::new(&TimesheetConfig::default());
        let auth = CredentialsAuthenticator::new("user", "password");

        app.login_form.username = TextInput::from_str("user");
        app.login_form.password = TextInput::from_str("password");
        assert!(app.submit_login(&auth).await);
        assert_eq!(app.current_view, View::Categories);

        assert!(app.add_category("Work"));
        assert!(app.select_category("Work"));
        fill_entry(&mut app, "2024-01-01", "09:00", "13:00");
        assert!(app.save_entry());

        assert!(app.view_progress());
        assert_eq!(app.current_view, View::Progress);
        let progress = app.daily_progress();
        assert_eq!(
            progress,
            vec![DayProgress {
                date: "2024-01-01".to_string(),
                hours: 4.0,
                status: GoalStatus::Within,
            }]
        );
    }
}
