use crate::analyzer::total_sugar_grams;
use crate::goals::DailyGoal;
use crate::history::{weekday_name, LongTermSummary};
use crate::models::{Analysis, DrinkRecord};

/// Prompt asking for a short coaching tip about the current session.
pub fn session_prompt(
    drinks: &[DrinkRecord],
    analysis: &Analysis,
    goal: Option<DailyGoal>,
) -> String {
    let session_summary = drinks
        .iter()
        .map(DrinkRecord::summary)
        .collect::<Vec<_>>()
        .join(", ");

    let impacts = analysis
        .iter()
        .map(|a| format!("{} {} ({:.1}/5)", a.region_key, a.band, a.impact_score))
        .collect::<Vec<_>>()
        .join(", ");

    let goal_line = goal
        .map(|g| format!("Their daily sugar goal is {:.0}g.\n", g.grams()))
        .unwrap_or_default();

    format!(
        "As an expert on nutrition and metabolic health, you are an AI Coach for the app LumenFuel.\n\
         A user has logged the following sugary drinks in a session: {}.\n\
         This amounts to {:.1}g of sugar.\n\
         {}\
         The current body impact analysis is: {}.\n\
         Provide a single, concise, actionable, and non-judgmental insight (around 20-30 words) for this user.\n\
         Focus on a specific, helpful suggestion related to their current consumption pattern \
         (e.g., suggesting water, a lower-sugar alternative, or eating protein to balance the spike).\n\
         Do not use generic phrases. Be specific and encouraging.",
        session_summary,
        total_sugar_grams(drinks),
        goal_line,
        impacts
    )
}

/// Prompt asking for advice based on long-term habits.
pub fn long_term_prompt(summary: &LongTermSummary) -> String {
    format!(
        "As an expert on nutrition, you are an AI Coach for the app LumenFuel.\n\
         A user has a long-term history of {} sugary drinks. \
         Their most frequent consumption day appears to be {}. \
         Their average drink contains {:.1}g of sugar.\n\
         Provide a single, concise, actionable, and non-judgmental long-term insight (around 20-30 words).\n\
         Focus on habits and patterns rather than a single session.",
        summary.total_drinks,
        weekday_name(summary.most_common_weekday),
        summary.average_sugar_grams
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{analyze, default_regions};
    use crate::i18n::Localizer;
    use crate::models::DrinkCategory;
    use chrono::{TimeZone, Utc, Weekday};

    fn drinks() -> Vec<DrinkRecord> {
        let at = Utc.with_ymd_and_hms(2025, 2, 14, 16, 0, 0).unwrap();
        vec![
            DrinkRecord {
                id: "1".into(),
                drink_category: DrinkCategory::Soda,
                volume_ml: 355.0,
                sugar_grams: 37.63,
                occurred_at: at,
            },
            DrinkRecord {
                id: "2".into(),
                drink_category: DrinkCategory::EnergyDrink,
                volume_ml: 250.0,
                sugar_grams: 27.5,
                occurred_at: at,
            },
        ]
    }

    #[test]
    fn test_session_prompt_lists_drinks_and_bands() {
        let drinks = drinks();
        let analysis = analyze(&drinks, &default_regions(), &Localizer::default());
        let prompt = session_prompt(&drinks, &analysis, Some(DailyGoal::default()));

        assert!(prompt.contains("355ml of soda containing 37.63g of sugar"));
        assert!(prompt.contains("250ml of energy_drink containing 27.5g of sugar"));
        assert!(prompt.contains("This amounts to 65.1g of sugar."));
        assert!(prompt.contains("daily sugar goal is 25g"));
        assert!(prompt.contains("pancreas high (5.0/5)"));
    }

    #[test]
    fn test_session_prompt_without_goal() {
        let drinks = drinks();
        let analysis = analyze(&drinks, &default_regions(), &Localizer::default());
        let prompt = session_prompt(&drinks, &analysis, None);
        assert!(!prompt.contains("daily sugar goal"));
    }

    #[test]
    fn test_long_term_prompt() {
        let summary = LongTermSummary {
            total_drinks: 12,
            total_sugar_grams: 300.0,
            average_sugar_grams: 25.0,
            most_common_weekday: Weekday::Fri,
        };
        let prompt = long_term_prompt(&summary);
        assert!(prompt.contains("history of 12 sugary drinks"));
        assert!(prompt.contains("appears to be Friday"));
        assert!(prompt.contains("contains 25.0g of sugar"));
    }
}
