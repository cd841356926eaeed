use crate::time_utils::hours_between;

/// A single recorded work session. Built once at save time and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct TimesheetEntry {
    date: String,
    start_time: String,
    end_time: String,
    description: String,
    hours_worked: f64,
}

impl TimesheetEntry {
    /// Build an entry, deriving `hours_worked` from the start/end times.
    ///
    /// Returns `None` when the derived duration is not strictly positive,
    /// which also covers unparsable times.
    pub fn new(date: &str, start_time: &str, end_time: &str, description: &str) -> Option<Self> {
        let hours_worked = hours_between(start_time, end_time);
        if hours_worked <= 0.0 {
            return None;
        }
        Some(Self {
            date: date.trim().to_string(),
            start_time: start_time.trim().to_string(),
            end_time: end_time.trim().to_string(),
            description: description.to_string(),
            hours_worked,
        })
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    pub fn end_time(&self) -> &str {
        &self.end_time
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn hours_worked(&self) -> f64 {
        self.hours_worked
    }
}
