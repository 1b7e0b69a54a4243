use chrono::Local;

use crate::analyzer::MAX_IMPACT;
use crate::coach::CoachOutcome;
use crate::goals::{GoalProgress, Reminder};
use crate::history::{weekday_name, LongTermSummary, WeeklyTotal};
use crate::i18n::{Localizer, Message, MessageLookup};
use crate::models::{Analysis, DrinkRecord, ImpactBand};

/// Width of the longest bar in terminal charts.
const CHART_WIDTH: usize = 40;

/// Fixed-width bar proportional to `value / max`.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    "#".repeat(filled.min(width))
}

fn band_marker(band: ImpactBand) -> &'static str {
    match band {
        ImpactBand::Low => "[ ]",
        ImpactBand::Moderate => "[!]",
        ImpactBand::High => "[!!]",
    }
}

/// Display the per-region body impact.
pub fn display_analysis(analysis: &Analysis, localizer: &Localizer) {
    println!();
    println!("=== {} ===", localizer.text(&Message::SectionImpact));
    println!("{}", localizer.text(&Message::SectionImpactSubtitle));
    println!();
    println!(
        "{}: {:.1} g",
        localizer.text(&Message::LabelTotalSugar),
        analysis.total_sugar_grams
    );
    println!();

    let name_width = analysis
        .iter()
        .map(|a| a.region_name.chars().count())
        .max()
        .unwrap_or(10);

    for a in analysis.iter() {
        println!(
            "{:<4} {:<width$}  {:>3.1}/5  {:<10} {}",
            band_marker(a.band),
            a.region_name,
            a.impact_score,
            bar(a.impact_score, MAX_IMPACT, 10),
            a.band_label,
            width = name_width
        );
        println!("     {}", a.descriptive_text);
    }

    println!();
    println!(
        "{}: {}",
        localizer.text(&Message::DisclaimerTitle),
        localizer.text(&Message::DisclaimerText)
    );
    println!();
}

/// Display the drink log with ids, newest last.
pub fn display_drink_log(drinks: &[DrinkRecord], localizer: &Localizer) {
    println!();
    println!("=== {} ===", localizer.text(&Message::SectionLog));

    if drinks.is_empty() {
        println!("{}", localizer.text(&Message::LogEmpty));
        println!();
        return;
    }

    println!();
    for drink in drinks {
        let name = if drink.drink_category.is_known() {
            localizer.text(&Message::DrinkName(drink.drink_category.clone()))
        } else {
            drink.drink_category.to_string()
        };
        println!(
            "  {}  {}  {:<24} {:>5.0} ml  {:>5.1} g",
            drink.id,
            drink.occurred_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
            name,
            drink.volume_ml,
            drink.sugar_grams
        );
    }

    let total: f64 = drinks.iter().map(|d| d.sugar_grams).sum();
    println!();
    println!("Total items: {}", drinks.len());
    println!("{}: {:.1} g", localizer.text(&Message::LabelTotalSugar), total);
    println!();
}

/// Display weekly sugar totals as a horizontal bar chart.
pub fn display_weekly_chart(weeks: &[WeeklyTotal], localizer: &Localizer) {
    println!();
    println!("=== {} ===", localizer.text(&Message::HistoryTitle));
    println!();

    if weeks.is_empty() {
        println!("{}", localizer.text(&Message::ChartNoData));
        println!();
        return;
    }

    let max = weeks.iter().map(|w| w.sugar_grams).fold(0.0, f64::max);
    let label_width = weeks.iter().map(|w| w.label().len()).max().unwrap_or(8);

    for week in weeks {
        println!(
            "  {:<width$} | {:<chart$} {:.1} g",
            week.label(),
            bar(week.sugar_grams, max, CHART_WIDTH),
            week.sugar_grams,
            width = label_width,
            chart = CHART_WIDTH
        );
    }
    println!();
}

/// Display today's intake against the daily goal.
pub fn display_goal_progress(progress: &GoalProgress, localizer: &Localizer) {
    println!(
        "{}",
        localizer.text(&Message::GoalProgress {
            consumed: progress.consumed_grams,
            goal: progress.goal_grams,
        })
    );
    println!(
        "  [{:<width$}] {:.0}%",
        bar(progress.percent.min(100.0), 100.0, CHART_WIDTH),
        progress.percent,
        width = CHART_WIDTH
    );
    if progress.exceeded {
        println!(
            "{}",
            localizer.text(&Message::GoalExceeded {
                over: progress.over_grams(),
            })
        );
    }
}

/// Display a logging reminder when one is due.
pub fn display_reminder(reminder: Reminder, localizer: &Localizer) {
    match reminder {
        Reminder::NeverLogged => println!("{}", localizer.text(&Message::ReminderNeverLogged)),
        Reminder::Due { hours_since } => println!(
            "{}",
            localizer.text(&Message::ReminderDue { hours: hours_since })
        ),
        Reminder::NotDue => {}
    }
}

/// Display long-term statistics.
pub fn display_long_term_summary(summary: &LongTermSummary) {
    println!("  Drinks logged       : {}", summary.total_drinks);
    println!("  Total sugar         : {:.1} g", summary.total_sugar_grams);
    println!("  Average per drink   : {:.1} g", summary.average_sugar_grams);
    println!(
        "  Most frequent day   : {}",
        weekday_name(summary.most_common_weekday)
    );
}

/// Display a coach outcome under the given title.
pub fn display_insight(title: Message, outcome: &CoachOutcome, localizer: &Localizer) {
    println!();
    println!("=== {} ===", localizer.text(&title));
    match (outcome, outcome.message()) {
        (CoachOutcome::Insight(text), _) => println!("{}", text),
        (_, Some(message)) => println!("{}", localizer.text(&message)),
        (_, None) => {}
    }
    println!();
}
