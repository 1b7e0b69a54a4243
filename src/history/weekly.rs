use std::collections::BTreeMap;

use chrono::{Datelike, TimeZone};
use serde::Serialize;

use crate::models::DrinkRecord;

/// Number of most recent weeks shown in the trend chart.
pub const CHART_WEEKS: usize = 8;

/// Sugar consumed in one week bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyTotal {
    pub year: i32,
    /// Zero-based week of the year: `(day_of_year - 1) / 7`.
    pub week: u32,
    pub sugar_grams: f64,
}

impl WeeklyTotal {
    /// Chart label, e.g. `2025-W14`.
    pub fn label(&self) -> String {
        format!("{}-W{}", self.year, self.week)
    }
}

/// Group drinks into week buckets in `tz` and return the most recent
/// [`CHART_WEEKS`] buckets in chronological order.
pub fn weekly_totals<Tz: TimeZone>(drinks: &[DrinkRecord], tz: &Tz) -> Vec<WeeklyTotal> {
    let mut buckets: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for drink in drinks {
        let local = drink.occurred_at.with_timezone(tz);
        let key = (local.year(), local.ordinal0() / 7);
        *buckets.entry(key).or_insert(0.0) += drink.sugar_grams;
    }

    let skip = buckets.len().saturating_sub(CHART_WEEKS);
    buckets
        .into_iter()
        .skip(skip)
        .map(|((year, week), sugar_grams)| WeeklyTotal {
            year,
            week,
            sugar_grams,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DrinkCategory;
    use chrono::{Duration, Utc};

    fn drink_at(days_after_jan1: i64, sugar_grams: f64) -> DrinkRecord {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        DrinkRecord {
            id: format!("d{}", days_after_jan1),
            drink_category: DrinkCategory::Juice,
            volume_ml: 250.0,
            sugar_grams,
            occurred_at: start + Duration::days(days_after_jan1),
        }
    }

    #[test]
    fn test_groups_by_week() {
        let drinks = vec![drink_at(0, 10.0), drink_at(6, 5.0), drink_at(7, 20.0)];
        let weeks = weekly_totals(&drinks, &Utc);

        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].label(), "2025-W0");
        assert_eq!(weeks[0].sugar_grams, 15.0);
        assert_eq!(weeks[1].label(), "2025-W1");
        assert_eq!(weeks[1].sugar_grams, 20.0);
    }

    #[test]
    fn test_keeps_last_eight_weeks() {
        let drinks: Vec<DrinkRecord> = (0..12).map(|w| drink_at(w * 7, 1.0)).collect();
        let weeks = weekly_totals(&drinks, &Utc);

        assert_eq!(weeks.len(), CHART_WEEKS);
        assert_eq!(weeks.first().unwrap().week, 4);
        assert_eq!(weeks.last().unwrap().week, 11);
    }

    #[test]
    fn test_empty_log() {
        assert!(weekly_totals(&[], &Utc).is_empty());
    }
}
