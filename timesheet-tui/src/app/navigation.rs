use super::*;

impl App {
    pub fn login_next_field(&mut self) {
        self.login_form.focused_field = match self.login_form.focused_field {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    /// Toggle focus between the new-category input and the list.
    /// The list can only take focus when it has items.
    pub fn categories_toggle_focus(&mut self) {
        self.categories_focus = match self.categories_focus {
            CategoriesFocus::Input if !self.store.categories().is_empty() => CategoriesFocus::List,
            _ => CategoriesFocus::Input,
        };
    }

    /// Move the highlight up in the category list (vim-style k or up)
    pub fn category_previous(&mut self) {
        if self.category_index > 0 {
            self.category_index -= 1;
        }
    }

    /// Move the highlight down in the category list (vim-style j or down)
    pub fn category_next(&mut self) {
        let count = self.store.categories().len();
        if self.category_index + 1 < count {
            self.category_index += 1;
        }
    }

    pub fn entry_next_field(&mut self) {
        self.entry_form.focused_field = self.entry_form.focused_field.next();
    }

    pub fn entry_previous_field(&mut self) {
        self.entry_form.focused_field = self.entry_form.focused_field.previous();
    }

    pub fn goal_next_field(&mut self) {
        self.goal_form.focused_field = match self.goal_form.focused_field {
            GoalField::Min => GoalField::Max,
            GoalField::Max => GoalField::Min,
        };
    }
}
