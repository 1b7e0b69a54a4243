mod progress;
mod reminder;

pub use progress::{DailyGoal, GoalProgress, DEFAULT_DAILY_GOAL_GRAMS};
pub use reminder::{Reminder, ReminderState, DEFAULT_REMINDER_HOURS};
