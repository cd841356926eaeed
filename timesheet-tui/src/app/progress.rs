use super::*;
use crate::goal::{parse_goal_or_zero, GoalStatus};

/// One row of the progress view.
#[derive(Debug, Clone, PartialEq)]
pub struct DayProgress {
    pub date: String,
    pub hours: f64,
    pub status: GoalStatus,
}

impl App {
    /// Daily totals across all categories, classified against the current goal.
    pub fn daily_progress(&self) -> Vec<DayProgress> {
        self.store
            .daily_totals()
            .into_iter()
            .map(|(date, hours)| DayProgress {
                status: self.goal.classify(hours),
                date,
                hours,
            })
            .collect()
    }

    pub fn total_hours(&self) -> f64 {
        self.store.daily_totals().values().sum()
    }

    pub fn days_within_goal(&self) -> usize {
        self.daily_progress()
            .iter()
            .filter(|d| d.status == GoalStatus::Within)
            .count()
    }

    /// Re-read both goal fields. Non-numeric text counts as zero.
    pub fn apply_goal_form(&mut self) {
        if self.current_view != View::Progress {
            return;
        }
        let goal = GoalRange::new(
            parse_goal_or_zero(&self.goal_form.min.value),
            parse_goal_or_zero(&self.goal_form.max.value),
        );
        if goal != self.goal {
            tracing::info!(min = goal.min, max = goal.max, "goal updated");
            self.goal = goal;
        }
    }

    /// Type into the focused goal field and apply it immediately.
    pub fn goal_input_char(&mut self, c: char) {
        self.goal_form.focused_input().insert(c);
        self.apply_goal_form();
    }

    pub fn goal_input_backspace(&mut self) {
        self.goal_form.focused_input().backspace();
        self.apply_goal_form();
    }
}
