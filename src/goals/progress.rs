use serde::Serialize;

use crate::error::{LumenError, Result};

/// Default daily sugar goal in grams.
pub const DEFAULT_DAILY_GOAL_GRAMS: f64 = 25.0;

/// Daily sugar limit the user is aiming to stay under.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyGoal {
    grams: f64,
}

impl DailyGoal {
    pub fn new(grams: f64) -> Result<Self> {
        if !grams.is_finite() || grams <= 0.0 {
            return Err(LumenError::InvalidInput(format!(
                "daily goal must be a positive number of grams, got {}",
                grams
            )));
        }
        Ok(Self { grams })
    }

    pub fn grams(&self) -> f64 {
        self.grams
    }
}

impl Default for DailyGoal {
    fn default() -> Self {
        Self {
            grams: DEFAULT_DAILY_GOAL_GRAMS,
        }
    }
}

/// How today's intake compares with the daily goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    pub consumed_grams: f64,
    pub goal_grams: f64,
    /// Grams left before reaching the goal; 0 once exceeded.
    pub remaining_grams: f64,
    /// Consumed as a percentage of the goal, unclamped.
    pub percent: f64,
    pub exceeded: bool,
}

impl GoalProgress {
    pub fn compute(consumed_grams: f64, goal: DailyGoal) -> Self {
        let goal_grams = goal.grams();
        Self {
            consumed_grams,
            goal_grams,
            remaining_grams: (goal_grams - consumed_grams).max(0.0),
            percent: consumed_grams / goal_grams * 100.0,
            exceeded: consumed_grams > goal_grams,
        }
    }

    /// Grams over the goal; 0 when within it.
    pub fn over_grams(&self) -> f64 {
        (self.consumed_grams - self.goal_grams).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_must_be_positive() {
        assert!(DailyGoal::new(0.0).is_err());
        assert!(DailyGoal::new(-5.0).is_err());
        assert!(DailyGoal::new(f64::INFINITY).is_err());
        assert_eq!(DailyGoal::new(30.0).unwrap().grams(), 30.0);
    }

    #[test]
    fn test_progress_within_goal() {
        let progress = GoalProgress::compute(10.0, DailyGoal::new(40.0).unwrap());
        assert_eq!(progress.remaining_grams, 30.0);
        assert_eq!(progress.percent, 25.0);
        assert!(!progress.exceeded);
        assert_eq!(progress.over_grams(), 0.0);
    }

    #[test]
    fn test_progress_exceeded() {
        let progress = GoalProgress::compute(37.5, DailyGoal::default());
        assert_eq!(progress.remaining_grams, 0.0);
        assert_eq!(progress.percent, 150.0);
        assert!(progress.exceeded);
        assert_eq!(progress.over_grams(), 12.5);
    }
}
