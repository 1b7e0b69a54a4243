use std::borrow::Cow;

use crate::models::{DrinkCategory, ImpactBand, RegionKey};

/// Every user-facing string, keyed by what it says.
///
/// Parameterised variants carry their arguments; the catalog template for the
/// key references them as `{0}`, `{1}`, ... in the order returned by
/// [`Message::args`].
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    AppTitle,
    SectionImpact,
    SectionImpactSubtitle,
    LabelTotalSugar,
    SectionLog,
    LogEmpty,
    DisclaimerTitle,
    DisclaimerText,
    DrinkName(DrinkCategory),
    RegionName(RegionKey),
    BandLabel(ImpactBand),
    RegionEffect(RegionKey, ImpactBand),
    CoachTitle,
    CoachGenerating,
    CoachNoKey,
    CoachNeedMoreDrinks,
    CoachLongTermNeedMore,
    CoachNoText,
    CoachConnectionIssue,
    HistoryTitle,
    ChartNoData,
    LongTermTitle,
    /// `{0}` category, `{1}` grams of sugar.
    DrinkLogged { category: DrinkCategory, grams: f64 },
    /// `{0}` record id.
    DrinkRemoved { id: String },
    /// `{0}` grams consumed today, `{1}` daily goal in grams.
    GoalProgress { consumed: f64, goal: f64 },
    /// `{0}` grams over the goal.
    GoalExceeded { over: f64 },
    /// `{0}` whole hours since the last drink.
    ReminderDue { hours: i64 },
    ReminderNeverLogged,
}

impl Message {
    /// Catalog key for this message.
    pub fn key(&self) -> Cow<'static, str> {
        match self {
            Message::AppTitle => "app_title".into(),
            Message::SectionImpact => "section_title_impact".into(),
            Message::SectionImpactSubtitle => "section_subtitle_impact".into(),
            Message::LabelTotalSugar => "label_total_sugar".into(),
            Message::SectionLog => "section_title_log".into(),
            Message::LogEmpty => "log_empty".into(),
            Message::DisclaimerTitle => "disclaimer_title".into(),
            Message::DisclaimerText => "disclaimer_text".into(),
            Message::DrinkName(category) => format!("drink_{}", category.as_str()).into(),
            Message::RegionName(region) => format!("region_{}", region).into(),
            Message::BandLabel(band) => format!("impact_{}", band).into(),
            Message::RegionEffect(region, band) => format!("impact_{}_{}", region, band).into(),
            Message::CoachTitle => "ai_coach_title".into(),
            Message::CoachGenerating => "ai_coach_generating".into(),
            Message::CoachNoKey => "ai_coach_no_key".into(),
            Message::CoachNeedMoreDrinks => "ai_coach_need_more".into(),
            Message::CoachLongTermNeedMore => "ai_coach_long_term_need_more".into(),
            Message::CoachNoText => "ai_coach_no_text".into(),
            Message::CoachConnectionIssue => "ai_coach_connection_issue".into(),
            Message::HistoryTitle => "historical_trends_title".into(),
            Message::ChartNoData => "chart_no_data".into(),
            Message::LongTermTitle => "long_term_insights_title".into(),
            Message::DrinkLogged { .. } => "drink_logged".into(),
            Message::DrinkRemoved { .. } => "drink_removed".into(),
            Message::GoalProgress { .. } => "goal_progress".into(),
            Message::GoalExceeded { .. } => "goal_exceeded".into(),
            Message::ReminderDue { .. } => "reminder_due".into(),
            Message::ReminderNeverLogged => "reminder_never_logged".into(),
        }
    }

    /// Positional formatting arguments.
    pub fn args(&self) -> Vec<String> {
        match self {
            Message::DrinkLogged { category, grams } => {
                vec![category.to_string(), format!("{:.1}", grams)]
            }
            Message::DrinkRemoved { id } => vec![id.clone()],
            Message::GoalProgress { consumed, goal } => {
                vec![format!("{:.1}", consumed), format!("{:.0}", goal)]
            }
            Message::GoalExceeded { over } => vec![format!("{:.1}", over)],
            Message::ReminderDue { hours } => vec![hours.to_string()],
            _ => Vec::new(),
        }
    }
}

/// Substitute `{n}` placeholders with positional arguments.
pub fn format_template(template: &str, args: &[String]) -> String {
    args.iter()
        .enumerate()
        .fold(template.to_string(), |text, (i, arg)| {
            text.replace(&format!("{{{}}}", i), arg)
        })
}
