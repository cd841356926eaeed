use crate::goal::GoalRange;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Login,
    Categories,
    TimesheetEntry,
    Progress,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoginField {
    Username,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CategoriesFocus {
    Input,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryField {
    Date,
    StartTime,
    EndTime,
    Description,
}

impl EntryField {
    pub fn next(self) -> Self {
        match self {
            EntryField::Date => EntryField::StartTime,
            EntryField::StartTime => EntryField::EndTime,
            EntryField::EndTime => EntryField::Description,
            EntryField::Description => EntryField::Date,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            EntryField::Date => EntryField::Description,
            EntryField::StartTime => EntryField::Date,
            EntryField::EndTime => EntryField::StartTime,
            EntryField::Description => EntryField::EndTime,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GoalField {
    Min,
    Max,
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        debug_assert!(pos > 0, "prev_boundary called with pos == 0");
        let mut p = pos;
        loop {
            p -= 1;
            if self.value.is_char_boundary(p) {
                return p;
            }
        }
    }

    fn next_boundary(&self, pos: usize) -> usize {
        debug_assert!(
            pos < self.value.len(),
            "next_boundary called at end of string"
        );
        let mut p = pos + 1;
        while p <= self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginForm {
    pub username: TextInput,
    pub password: TextInput,
    pub focused_field: LoginField,
    pub error: Option<String>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            username: TextInput::new(),
            password: TextInput::new(),
            focused_field: LoginField::Username,
            error: None,
        }
    }
}

impl LoginForm {
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}

/// Inputs of the timesheet entry view. Reset every time a category is opened.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    pub date: TextInput,
    pub start_time: TextInput,
    pub end_time: TextInput,
    pub description: TextInput,
    pub focused_field: EntryField,
}

impl EntryForm {
    pub fn with_date(date: &str) -> Self {
        Self {
            date: TextInput::from_str(date),
            start_time: TextInput::new(),
            end_time: TextInput::new(),
            description: TextInput::new(),
            focused_field: EntryField::Date,
        }
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            EntryField::Date => &mut self.date,
            EntryField::StartTime => &mut self.start_time,
            EntryField::EndTime => &mut self.end_time,
            EntryField::Description => &mut self.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalForm {
    pub min: TextInput,
    pub max: TextInput,
    pub focused_field: GoalField,
}

impl GoalForm {
    pub fn from_goal(goal: &GoalRange) -> Self {
        Self {
            min: TextInput::from_str(&goal.min.to_string()),
            max: TextInput::from_str(&goal.max.to_string()),
            focused_field: GoalField::Min,
        }
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            GoalField::Min => &mut self.min,
            GoalField::Max => &mut self.max,
        }
    }
}
