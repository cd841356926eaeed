use serde::{Deserialize, Serialize};

pub const DEFAULT_GOAL_MIN: u32 = 4;
pub const DEFAULT_GOAL_MAX: u32 = 8;

/// Where a daily total falls relative to the goal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalStatus {
    Below,
    Within,
    Above,
}

/// Inclusive daily-hours target. `min` may exceed `max` while the user is
/// typing; classification always uses the normalized bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalRange {
    #[serde(default = "default_min")]
    pub min: u32,
    #[serde(default = "default_max")]
    pub max: u32,
}

fn default_min() -> u32 {
    DEFAULT_GOAL_MIN
}

fn default_max() -> u32 {
    DEFAULT_GOAL_MAX
}

impl Default for GoalRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_GOAL_MIN,
            max: DEFAULT_GOAL_MAX,
        }
    }
}

impl GoalRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn is_swapped(&self) -> bool {
        self.min > self.max
    }

    /// `(low, high)` with the bounds put in order.
    pub fn bounds(&self) -> (f64, f64) {
        let lo = self.min.min(self.max);
        let hi = self.min.max(self.max);
        (lo as f64, hi as f64)
    }

    pub fn classify(&self, hours: f64) -> GoalStatus {
        let (lo, hi) = self.bounds();
        if hours < lo {
            GoalStatus::Below
        } else if hours <= hi {
            GoalStatus::Within
        } else {
            GoalStatus::Above
        }
    }
}

/// Parse a goal field. Anything that isn't a non-negative integer counts as zero.
pub fn parse_goal_or_zero(input: &str) -> u32 {
    input.trim().parse().unwrap_or(0)
}
