//! Progress math for savings goals.

use hearth_domain::Goal;

/// Point-in-time progress view of one goal.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub name: String,
    pub percent: f64,
    pub remaining: f64,
}

pub struct GoalService;

impl GoalService {
    /// Completion percentage, clamped to [0, 100]. A zero target reads
    /// as complete.
    pub fn progress_percent(goal: &Goal) -> f64 {
        if goal.target_amount <= 0.0 {
            return 100.0;
        }
        (goal.current_amount / goal.target_amount * 100.0).clamp(0.0, 100.0)
    }

    /// Amount still to save, floored at zero.
    pub fn remaining(goal: &Goal) -> f64 {
        (goal.target_amount - goal.current_amount).max(0.0)
    }

    pub fn progress(goal: &Goal) -> GoalProgress {
        GoalProgress {
            name: goal.name.clone(),
            percent: Self::progress_percent(goal),
            remaining: Self::remaining(goal),
        }
    }

    /// Combined (saved, target) across a collection.
    pub fn totals(goals: &[Goal]) -> (f64, f64) {
        goals.iter().fold((0.0, 0.0), |(saved, target), goal| {
            (saved + goal.current_amount, target + goal.target_amount)
        })
    }
}
