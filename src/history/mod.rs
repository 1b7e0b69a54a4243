pub mod stats;
pub mod weekly;

pub use stats::{long_term_summary, weekday_name, LongTermSummary, MIN_LONG_TERM_DRINKS};
pub use weekly::{weekly_totals, WeeklyTotal, CHART_WEEKS};
