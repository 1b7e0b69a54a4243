use chrono::{Datelike, TimeZone, Weekday};
use serde::Serialize;

use crate::models::DrinkRecord;

/// Minimum history size before long-term statistics are meaningful.
pub const MIN_LONG_TERM_DRINKS: usize = 5;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Aggregate view of the whole drink history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongTermSummary {
    pub total_drinks: usize,
    pub total_sugar_grams: f64,
    pub average_sugar_grams: f64,
    pub most_common_weekday: Weekday,
}

/// Summarize the history, or `None` with fewer than
/// [`MIN_LONG_TERM_DRINKS`] drinks.
///
/// Weekday ties resolve to the earliest day of the week, Monday first.
pub fn long_term_summary<Tz: TimeZone>(
    drinks: &[DrinkRecord],
    tz: &Tz,
) -> Option<LongTermSummary> {
    if drinks.len() < MIN_LONG_TERM_DRINKS {
        return None;
    }

    let mut day_counts = [0usize; 7];
    for drink in drinks {
        let weekday = drink.occurred_at.with_timezone(tz).weekday();
        day_counts[weekday.num_days_from_monday() as usize] += 1;
    }

    let mut best = 0;
    for (idx, count) in day_counts.iter().enumerate() {
        if *count > day_counts[best] {
            best = idx;
        }
    }

    let total_sugar_grams: f64 = drinks.iter().map(|d| d.sugar_grams).sum();

    Some(LongTermSummary {
        total_drinks: drinks.len(),
        total_sugar_grams,
        average_sugar_grams: total_sugar_grams / drinks.len() as f64,
        most_common_weekday: WEEKDAYS[best],
    })
}

/// English weekday name, e.g. `Saturday`.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DrinkCategory;
    use chrono::Utc;

    // 2025-03-03 is a Monday.
    fn drink_on(day: u32, sugar_grams: f64) -> DrinkRecord {
        DrinkRecord {
            id: format!("d{}", day),
            drink_category: DrinkCategory::EnergyDrink,
            volume_ml: 250.0,
            sugar_grams,
            occurred_at: Utc.with_ymd_and_hms(2025, 3, day, 15, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_requires_minimum_history() {
        let drinks: Vec<DrinkRecord> = (3..7).map(|d| drink_on(d, 10.0)).collect();
        assert!(long_term_summary(&drinks, &Utc).is_none());
    }

    #[test]
    fn test_summary_values() {
        let drinks = vec![
            drink_on(3, 10.0),
            drink_on(8, 20.0),
            drink_on(15, 30.0),
            drink_on(22, 40.0),
            drink_on(4, 50.0),
        ];
        let summary = long_term_summary(&drinks, &Utc).unwrap();

        assert_eq!(summary.total_drinks, 5);
        assert_eq!(summary.total_sugar_grams, 150.0);
        assert_eq!(summary.average_sugar_grams, 30.0);
        assert_eq!(summary.most_common_weekday, Weekday::Sat);
    }

    #[test]
    fn test_weekday_tie_prefers_earliest() {
        // Two Mondays, two Tuesdays, one Friday.
        let drinks = vec![
            drink_on(4, 1.0),
            drink_on(3, 1.0),
            drink_on(11, 1.0),
            drink_on(10, 1.0),
            drink_on(7, 1.0),
        ];
        let summary = long_term_summary(&drinks, &Utc).unwrap();
        assert_eq!(summary.most_common_weekday, Weekday::Mon);
        assert_eq!(weekday_name(summary.most_common_weekday), "Monday");
    }
}
