use chrono::{DateTime, Duration, Utc};

/// Default gap after which a logging reminder is shown.
pub const DEFAULT_REMINDER_HOURS: u32 = 3;

/// Outcome of a reminder check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reminder {
    /// Nothing has ever been logged.
    NeverLogged,
    /// The interval has passed since the last drink.
    Due { hours_since: i64 },
    NotDue,
}

/// Reminder state passed explicitly to the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReminderState {
    pub last_logged_at: Option<DateTime<Utc>>,
}

impl ReminderState {
    pub fn new(last_logged_at: Option<DateTime<Utc>>) -> Self {
        Self { last_logged_at }
    }

    pub fn check(&self, now: DateTime<Utc>, interval: Duration) -> Reminder {
        match self.last_logged_at {
            None => Reminder::NeverLogged,
            Some(last) => {
                let elapsed = now - last;
                if elapsed >= interval {
                    Reminder::Due {
                        hours_since: elapsed.num_hours(),
                    }
                } else {
                    Reminder::NotDue
                }
            }
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>, interval: Duration) -> bool {
        !matches!(self.check(now, interval), Reminder::NotDue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 10, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_never_logged_is_due() {
        let state = ReminderState::default();
        assert_eq!(state.check(at(12), Duration::hours(3)), Reminder::NeverLogged);
        assert!(state.is_due(at(12), Duration::hours(3)));
    }

    #[test]
    fn test_due_after_interval() {
        let state = ReminderState::new(Some(at(8)));
        assert_eq!(state.check(at(10), Duration::hours(3)), Reminder::NotDue);
        assert_eq!(
            state.check(at(12), Duration::hours(3)),
            Reminder::Due { hours_since: 4 }
        );
    }
}
