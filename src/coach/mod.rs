//! AI coaching insights.
//!
//! Builds prompts from the drink log and the current analysis, sends them to
//! an [`InsightGenerator`], and maps every failure to a user-facing outcome.
//! Requests are never retried.

mod gemini;
mod prompt;

use chrono::TimeZone;

pub use gemini::{GeminiClient, GenerateResponse, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
pub use prompt::{long_term_prompt, session_prompt};

use crate::error::Result;
use crate::goals::DailyGoal;
use crate::history::long_term_summary;
use crate::i18n::Message;
use crate::models::{Analysis, DrinkRecord};

/// Minimum drinks in scope before a session insight is requested.
pub const MIN_SESSION_DRINKS: usize = 2;

/// Produces free-text coaching from a prompt.
pub trait InsightGenerator {
    /// `Ok(None)` when the service answered without usable text.
    fn generate(&self, prompt: &str) -> Result<Option<String>>;
}

/// Wraps a generator and calls `announce` right before each request.
pub struct Announced<'a, F> {
    inner: &'a dyn InsightGenerator,
    announce: F,
}

impl<'a, F: Fn()> Announced<'a, F> {
    pub fn new(inner: &'a dyn InsightGenerator, announce: F) -> Self {
        Self { inner, announce }
    }
}

impl<F: Fn()> InsightGenerator for Announced<'_, F> {
    fn generate(&self, prompt: &str) -> Result<Option<String>> {
        (self.announce)();
        self.inner.generate(prompt)
    }
}

/// What the coach has to say.
#[derive(Debug, Clone, PartialEq)]
pub enum CoachOutcome {
    Insight(String),
    KeyMissing,
    NotEnoughDrinks,
    NotEnoughHistory,
    NoText,
    ConnectionIssue,
}

impl CoachOutcome {
    /// Localizable message for every outcome except a successful insight.
    pub fn message(&self) -> Option<Message> {
        match self {
            CoachOutcome::Insight(_) => None,
            CoachOutcome::KeyMissing => Some(Message::CoachNoKey),
            CoachOutcome::NotEnoughDrinks => Some(Message::CoachNeedMoreDrinks),
            CoachOutcome::NotEnoughHistory => Some(Message::CoachLongTermNeedMore),
            CoachOutcome::NoText => Some(Message::CoachNoText),
            CoachOutcome::ConnectionIssue => Some(Message::CoachConnectionIssue),
        }
    }
}

fn request(generator: &dyn InsightGenerator, prompt: &str) -> CoachOutcome {
    match generator.generate(prompt) {
        Ok(Some(text)) => CoachOutcome::Insight(text),
        Ok(None) => {
            tracing::warn!("coach returned no text");
            CoachOutcome::NoText
        }
        Err(e) => {
            tracing::error!(error = %e, "coach request failed");
            CoachOutcome::ConnectionIssue
        }
    }
}

/// Coaching tip for the drinks currently in scope.
///
/// `generator` is `None` when no API key is configured.
pub fn session_insight(
    generator: Option<&dyn InsightGenerator>,
    drinks: &[DrinkRecord],
    analysis: &Analysis,
    goal: Option<DailyGoal>,
) -> CoachOutcome {
    let Some(generator) = generator else {
        return CoachOutcome::KeyMissing;
    };
    if drinks.len() < MIN_SESSION_DRINKS {
        return CoachOutcome::NotEnoughDrinks;
    }
    request(generator, &session_prompt(drinks, analysis, goal))
}

/// Coaching tip derived from the whole drink history.
pub fn long_term_insight<Tz: TimeZone>(
    generator: Option<&dyn InsightGenerator>,
    history: &[DrinkRecord],
    tz: &Tz,
) -> CoachOutcome {
    let Some(generator) = generator else {
        return CoachOutcome::KeyMissing;
    };
    match long_term_summary(history, tz) {
        Some(summary) => request(generator, &long_term_prompt(&summary)),
        None => CoachOutcome::NotEnoughHistory,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{analyze, default_regions};
    use crate::error::LumenError;
    use crate::i18n::Localizer;
    use crate::models::DrinkCategory;
    use chrono::{Duration, Utc};
    use std::cell::{Cell, RefCell};

    struct Canned {
        reply: Result<Option<String>>,
        prompts: RefCell<Vec<String>>,
    }

    impl Canned {
        fn new(reply: Result<Option<String>>) -> Self {
            Self {
                reply,
                prompts: RefCell::new(Vec::new()),
            }
        }
    }

    impl InsightGenerator for Canned {
        fn generate(&self, prompt: &str) -> Result<Option<String>> {
            self.prompts.borrow_mut().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(e) => Err(LumenError::Coach(e.to_string())),
            }
        }
    }

    fn drinks(n: i64) -> Vec<DrinkRecord> {
        let start = Utc.with_ymd_and_hms(2025, 8, 4, 9, 0, 0).unwrap();
        (0..n)
            .map(|i| DrinkRecord {
                id: i.to_string(),
                drink_category: DrinkCategory::Juice,
                volume_ml: 250.0,
                sugar_grams: 25.0,
                occurred_at: start + Duration::days(i),
            })
            .collect()
    }

    #[test]
    fn test_key_missing() {
        let d = drinks(3);
        let analysis = analyze(&d, &default_regions(), &Localizer::default());
        assert_eq!(
            session_insight(None, &d, &analysis, None),
            CoachOutcome::KeyMissing
        );
        assert_eq!(long_term_insight(None, &d, &Utc), CoachOutcome::KeyMissing);
    }

    #[test]
    fn test_single_drink_skips_request() {
        let canned = Canned::new(Ok(Some("tip".into())));
        let d = drinks(1);
        let analysis = analyze(&d, &default_regions(), &Localizer::default());

        let outcome = session_insight(Some(&canned), &d, &analysis, None);
        assert_eq!(outcome, CoachOutcome::NotEnoughDrinks);
        assert!(canned.prompts.borrow().is_empty());
    }

    #[test]
    fn test_session_insight_success() {
        let canned = Canned::new(Ok(Some("Swap the next juice for water.".into())));
        let d = drinks(2);
        let analysis = analyze(&d, &default_regions(), &Localizer::default());

        let outcome = session_insight(Some(&canned), &d, &analysis, None);
        assert_eq!(
            outcome,
            CoachOutcome::Insight("Swap the next juice for water.".into())
        );
        assert_eq!(canned.prompts.borrow().len(), 1);
    }

    #[test]
    fn test_failures_become_messages() {
        let d = drinks(2);
        let analysis = analyze(&d, &default_regions(), &Localizer::default());

        let empty = Canned::new(Ok(None));
        let outcome = session_insight(Some(&empty), &d, &analysis, None);
        assert_eq!(outcome, CoachOutcome::NoText);
        assert_eq!(outcome.message(), Some(Message::CoachNoText));

        let broken = Canned::new(Err(LumenError::Coach("offline".into())));
        let outcome = session_insight(Some(&broken), &d, &analysis, None);
        assert_eq!(outcome, CoachOutcome::ConnectionIssue);
    }

    #[test]
    fn test_long_term_needs_history() {
        let canned = Canned::new(Ok(Some("tip".into())));
        assert_eq!(
            long_term_insight(Some(&canned), &drinks(4), &Utc),
            CoachOutcome::NotEnoughHistory
        );
        assert_eq!(
            long_term_insight(Some(&canned), &drinks(5), &Utc),
            CoachOutcome::Insight("tip".into())
        );
    }

    #[test]
    fn test_announce_only_when_request_is_sent() {
        let canned = Canned::new(Ok(Some("tip".into())));
        let announced_count = Cell::new(0);
        let announced = Announced::new(&canned, || {
            announced_count.set(announced_count.get() + 1);
        });

        let one = drinks(1);
        let analysis = analyze(&one, &default_regions(), &Localizer::default());
        session_insight(Some(&announced), &one, &analysis, None);
        long_term_insight(Some(&announced), &one, &Utc);
        assert_eq!(announced_count.get(), 0);

        let two = drinks(2);
        let analysis = analyze(&two, &default_regions(), &Localizer::default());
        let outcome = session_insight(Some(&announced), &two, &analysis, None);
        assert_eq!(outcome, CoachOutcome::Insight("tip".into()));
        assert_eq!(announced_count.get(), 1);
    }
}
