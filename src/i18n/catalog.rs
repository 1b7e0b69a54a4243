use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::LumenError;
use crate::i18n::messages::{format_template, Message};

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    German,
    FrenchCanadian,
    Spanish,
    Japanese,
    Korean,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::German,
        Language::FrenchCanadian,
        Language::Spanish,
        Language::Japanese,
        Language::Korean,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
            Language::FrenchCanadian => "fr-CA",
            Language::Spanish => "es",
            Language::Japanese => "ja",
            Language::Korean => "ko",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "Deutsch",
            Language::FrenchCanadian => "Français (CA)",
            Language::Spanish => "Español",
            Language::Japanese => "日本語",
            Language::Korean => "한국어",
        }
    }
}

impl FromStr for Language {
    type Err = LumenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LumenError::InvalidInput(format!("Unsupported language: {}", s)))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

static EN: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("app_title", "LumenFuel"),
        ("section_title_impact", "Real-Time Body Impact"),
        (
            "section_subtitle_impact",
            "Educational model of sugar's short-term effects.",
        ),
        ("label_total_sugar", "Total Sugar"),
        ("section_title_log", "Current Drink Log"),
        ("log_empty", "No drinks logged yet."),
        ("disclaimer_title", "Disclaimer"),
        (
            "disclaimer_text",
            "LumenFuel is an educational tool, not medical advice. Consult a professional for health guidance.",
        ),
        ("drink_soda", "Soda"),
        ("drink_juice", "Fruit Juice"),
        ("drink_energy_drink", "Energy Drink"),
        ("drink_sweet_tea", "Sweet Tea / Iced Coffee"),
        ("drink_sports_drink", "Sports Drink"),
        ("region_pancreas", "Pancreas"),
        ("region_liver", "Liver"),
        ("region_energy", "Energy Levels"),
        ("impact_low", "Low"),
        ("impact_moderate", "Moderate"),
        ("impact_high", "High"),
        ("impact_pancreas_low", "Normal insulin response expected."),
        (
            "impact_pancreas_moderate",
            "Increased demand on pancreas for insulin production.",
        ),
        (
            "impact_pancreas_high",
            "High insulin spike, straining metabolic function.",
        ),
        ("impact_energy_low", "Stable energy levels."),
        (
            "impact_energy_moderate",
            "Quick energy spike, potential for a later crash.",
        ),
        (
            "impact_energy_high",
            "Intense energy rush, likely followed by a significant crash.",
        ),
        ("impact_liver_low", "Standard liver processing."),
        (
            "impact_liver_moderate",
            "Liver working harder to process fructose.",
        ),
        (
            "impact_liver_high",
            "Significant fructose load, contributing to fat storage.",
        ),
        ("ai_coach_title", "AI Coach Insight"),
        ("ai_coach_generating", "Generating insight..."),
        (
            "ai_coach_no_key",
            "AI Coach is disabled. A Gemini API key is required for this feature.",
        ),
        (
            "ai_coach_need_more",
            "Log at least two drinks to get a coaching insight.",
        ),
        (
            "ai_coach_long_term_need_more",
            "Keep logging your drinks to unlock long-term insights!",
        ),
        ("ai_coach_no_text", "Could not generate an insight at this time."),
        (
            "ai_coach_connection_issue",
            "There was an issue connecting to the AI coach.",
        ),
        ("historical_trends_title", "Your Weekly Sugar Trends"),
        (
            "chart_no_data",
            "Not enough data to display trends. Keep logging your drinks!",
        ),
        ("long_term_insights_title", "Long-Term AI Insights"),
        ("drink_logged", "Logged {0} with {1} g of sugar."),
        ("drink_removed", "Removed drink {0}."),
        ("goal_progress", "{0} g of your {1} g daily sugar goal."),
        ("goal_exceeded", "You are {0} g over today's goal."),
        (
            "reminder_due",
            "It has been {0} hours since your last logged drink. Anything to add?",
        ),
        (
            "reminder_never_logged",
            "You have not logged any drinks yet. Start with 'lumenfuel log'.",
        ),
    ])
});

static DE: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("section_title_impact", "Körperliche Auswirkungen in Echtzeit"),
        ("label_total_sugar", "Zucker gesamt"),
        ("log_empty", "Noch keine Getränke erfasst."),
        ("drink_soda", "Limonade"),
        ("drink_juice", "Fruchtsaft"),
        ("drink_energy_drink", "Energydrink"),
        ("drink_sweet_tea", "Eistee / Eiskaffee"),
        ("drink_sports_drink", "Sportgetränk"),
        ("region_pancreas", "Bauchspeicheldrüse"),
        ("region_liver", "Leber"),
        ("region_energy", "Energieniveau"),
        ("impact_low", "Niedrig"),
        ("impact_moderate", "Mäßig"),
        ("impact_high", "Hoch"),
        ("impact_pancreas_low", "Normale Insulinreaktion zu erwarten."),
        (
            "impact_pancreas_moderate",
            "Erhöhter Insulinbedarf der Bauchspeicheldrüse.",
        ),
        (
            "impact_pancreas_high",
            "Starker Insulinanstieg, belastet den Stoffwechsel.",
        ),
        ("impact_liver_low", "Normale Verarbeitung in der Leber."),
        (
            "impact_liver_moderate",
            "Die Leber arbeitet stärker, um Fruktose abzubauen.",
        ),
        (
            "impact_liver_high",
            "Hohe Fruktoselast, begünstigt Fetteinlagerung.",
        ),
        ("impact_energy_low", "Stabiles Energieniveau."),
        (
            "impact_energy_moderate",
            "Schneller Energieschub, später möglicher Einbruch.",
        ),
        (
            "impact_energy_high",
            "Intensiver Energieschub, wahrscheinlich gefolgt von einem deutlichen Einbruch.",
        ),
        ("goal_progress", "{0} g von deinem Tagesziel ({1} g)."),
    ])
});

static ES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("section_title_impact", "Impacto corporal en tiempo real"),
        ("label_total_sugar", "Azúcar total"),
        ("log_empty", "Aún no hay bebidas registradas."),
        ("drink_soda", "Refresco"),
        ("drink_juice", "Jugo de fruta"),
        ("drink_energy_drink", "Bebida energética"),
        ("drink_sweet_tea", "Té dulce / Café helado"),
        ("drink_sports_drink", "Bebida deportiva"),
        ("region_pancreas", "Páncreas"),
        ("region_liver", "Hígado"),
        ("region_energy", "Niveles de energía"),
        ("impact_low", "Bajo"),
        ("impact_moderate", "Moderado"),
        ("impact_high", "Alto"),
        ("goal_progress", "{0} g de tu meta diaria de {1} g."),
    ])
});

fn table(language: Language) -> Option<&'static HashMap<&'static str, &'static str>> {
    match language {
        Language::English => Some(&*EN),
        Language::German => Some(&*DE),
        Language::Spanish => Some(&*ES),
        Language::FrenchCanadian | Language::Japanese | Language::Korean => None,
    }
}

/// Resolves messages to display text.
pub trait MessageLookup {
    fn text(&self, message: &Message) -> String;
}

impl<F> MessageLookup for F
where
    F: Fn(&Message) -> String,
{
    fn text(&self, message: &Message) -> String {
        self(message)
    }
}

/// Translates messages into the selected language, falling back to English
/// and finally to the raw key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Localizer {
    language: Language,
}

impl Localizer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Raw template for a key, without argument substitution.
    pub fn template(&self, key: &str) -> Option<&'static str> {
        table(self.language)
            .and_then(|t| t.get(key))
            .or_else(|| EN.get(key))
            .copied()
    }
}

impl MessageLookup for Localizer {
    fn text(&self, message: &Message) -> String {
        let key = message.key();
        match self.template(&key) {
            Some(template) => format_template(template, &message.args()),
            None => {
                tracing::debug!(key = %key, language = %self.language, "missing translation");
                key.into_owned()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DrinkCategory, ImpactBand, RegionKey};

    #[test]
    fn test_selected_language_wins() {
        let de = Localizer::new(Language::German);
        assert_eq!(de.text(&Message::BandLabel(ImpactBand::High)), "Hoch");
    }

    #[test]
    fn test_falls_back_to_english() {
        let de = Localizer::new(Language::German);
        assert_eq!(de.text(&Message::CoachTitle), "AI Coach Insight");

        let ko = Localizer::new(Language::Korean);
        assert_eq!(ko.text(&Message::LogEmpty), "No drinks logged yet.");
    }

    #[test]
    fn test_missing_key_returns_key() {
        let en = Localizer::default();
        let text = en.text(&Message::RegionName(RegionKey::new("kidneys")));
        assert_eq!(text, "region_kidneys");
    }

    #[test]
    fn test_parameterised_message() {
        let en = Localizer::default();
        let text = en.text(&Message::DrinkLogged {
            category: DrinkCategory::Juice,
            grams: 25.0,
        });
        assert_eq!(text, "Logged juice with 25.0 g of sugar.");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!("fr-ca".parse::<Language>().unwrap(), Language::FrenchCanadian);
        assert_eq!("es".parse::<Language>().unwrap(), Language::Spanish);
        assert!("xx".parse::<Language>().is_err());
    }

    #[test]
    fn test_closure_lookup() {
        let lookup = |m: &Message| m.key().to_uppercase();
        assert_eq!(lookup.text(&Message::AppTitle), "APP_TITLE");
    }
}
