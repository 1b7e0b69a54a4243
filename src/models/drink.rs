use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{LumenError, Result};

/// Minimum Jaro-Winkler similarity for a fuzzy category match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.85;

/// Kind of sugary drink.
///
/// Unrecognized categories are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DrinkCategory {
    Soda,
    Juice,
    EnergyDrink,
    SweetTea,
    SportsDrink,
    Other(String),
}

impl DrinkCategory {
    /// All built-in categories, in menu order.
    pub const KNOWN: [DrinkCategory; 5] = [
        DrinkCategory::Soda,
        DrinkCategory::Juice,
        DrinkCategory::EnergyDrink,
        DrinkCategory::SweetTea,
        DrinkCategory::SportsDrink,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            DrinkCategory::Soda => "soda",
            DrinkCategory::Juice => "juice",
            DrinkCategory::EnergyDrink => "energy_drink",
            DrinkCategory::SweetTea => "sweet_tea",
            DrinkCategory::SportsDrink => "sports_drink",
            DrinkCategory::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, DrinkCategory::Other(_))
    }

    /// Default serving for quick-add. Unknown categories use the soda serving.
    pub fn preset(&self) -> DrinkPreset {
        match self {
            DrinkCategory::Soda | DrinkCategory::Other(_) => DrinkPreset::new(355.0, 10.6),
            DrinkCategory::Juice => DrinkPreset::new(250.0, 10.0),
            DrinkCategory::EnergyDrink => DrinkPreset::new(250.0, 11.0),
            DrinkCategory::SweetTea => DrinkPreset::new(500.0, 8.0),
            DrinkCategory::SportsDrink => DrinkPreset::new(500.0, 6.0),
        }
    }
}

impl From<String> for DrinkCategory {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "soda" => DrinkCategory::Soda,
            "juice" => DrinkCategory::Juice,
            "energy_drink" => DrinkCategory::EnergyDrink,
            "sweet_tea" => DrinkCategory::SweetTea,
            "sports_drink" => DrinkCategory::SportsDrink,
            _ => DrinkCategory::Other(value),
        }
    }
}

impl From<DrinkCategory> for String {
    fn from(value: DrinkCategory) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for DrinkCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DrinkCategory::from(s.to_string()))
    }
}

impl fmt::Display for DrinkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of resolving free text against the built-in categories.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryMatch {
    Exact(DrinkCategory),
    Fuzzy(DrinkCategory, f64),
    Unknown(String),
}

/// Resolve user input to a category: exact match first, then the closest
/// known category above [`FUZZY_MATCH_THRESHOLD`].
pub fn match_category(input: &str) -> CategoryMatch {
    let normalized = input.trim().to_lowercase().replace([' ', '-'], "_");

    let exact = DrinkCategory::from(normalized.clone());
    if exact.is_known() {
        return CategoryMatch::Exact(exact);
    }

    let best = DrinkCategory::KNOWN
        .iter()
        .map(|c| (c, jaro_winkler(c.as_str(), &normalized)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    match best {
        Some((category, score)) => CategoryMatch::Fuzzy(category.clone(), score),
        None => CategoryMatch::Unknown(input.trim().to_string()),
    }
}

/// Default serving size and sugar concentration for a category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrinkPreset {
    pub volume_ml: f64,
    pub sugar_per_100ml: f64,
}

impl DrinkPreset {
    pub const fn new(volume_ml: f64, sugar_per_100ml: f64) -> Self {
        Self {
            volume_ml,
            sugar_per_100ml,
        }
    }
}

/// Total grams of sugar in a serving.
#[inline]
pub fn sugar_grams_for(volume_ml: f64, sugar_per_100ml: f64) -> f64 {
    volume_ml * sugar_per_100ml / 100.0
}

/// A validated drink that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDrink {
    pub drink_category: DrinkCategory,
    pub volume_ml: f64,
    pub sugar_grams: f64,
    pub occurred_at: DateTime<Utc>,
}

impl NewDrink {
    /// Build from a serving size and concentration, deriving total sugar once.
    pub fn from_serving(
        drink_category: DrinkCategory,
        volume_ml: f64,
        sugar_per_100ml: f64,
        occurred_at: DateTime<Utc>,
    ) -> Result<Self> {
        if !sugar_per_100ml.is_finite() || sugar_per_100ml < 0.0 {
            return Err(LumenError::InvalidDrink(format!(
                "sugar concentration must be a non-negative number, got {}",
                sugar_per_100ml
            )));
        }
        validate_volume(volume_ml)?;

        let drink = Self {
            drink_category,
            volume_ml,
            sugar_grams: sugar_grams_for(volume_ml, sugar_per_100ml),
            occurred_at,
        };
        validate_sugar(drink.sugar_grams)?;
        Ok(drink)
    }

    /// Build a preset serving for the category.
    pub fn from_preset(drink_category: DrinkCategory, occurred_at: DateTime<Utc>) -> Result<Self> {
        let preset = drink_category.preset();
        Self::from_serving(
            drink_category,
            preset.volume_ml,
            preset.sugar_per_100ml,
            occurred_at,
        )
    }
}

/// A logged drink as stored in the drink log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkRecord {
    pub id: String,
    pub drink_category: DrinkCategory,
    pub volume_ml: f64,
    pub sugar_grams: f64,
    pub occurred_at: DateTime<Utc>,
}

impl DrinkRecord {
    pub fn new(id: impl Into<String>, drink: NewDrink) -> Result<Self> {
        let record = Self {
            id: id.into(),
            drink_category: drink.drink_category,
            volume_ml: drink.volume_ml,
            sugar_grams: drink.sugar_grams,
            occurred_at: drink.occurred_at,
        };
        record.validate()?;
        Ok(record)
    }

    /// Reject records the analyzer must never see.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(LumenError::InvalidDrink("missing id".to_string()));
        }
        validate_volume(self.volume_ml)?;
        validate_sugar(self.sugar_grams)
    }

    /// Short human-readable summary used in prompts and logs.
    pub fn summary(&self) -> String {
        format!(
            "{}ml of {} containing {}g of sugar",
            self.volume_ml, self.drink_category, self.sugar_grams
        )
    }
}

fn validate_volume(volume_ml: f64) -> Result<()> {
    if !volume_ml.is_finite() || volume_ml <= 0.0 {
        return Err(LumenError::InvalidDrink(format!(
            "volume must be a positive number of ml, got {}",
            volume_ml
        )));
    }
    Ok(())
}

fn validate_sugar(sugar_grams: f64) -> Result<()> {
    if !sugar_grams.is_finite() || sugar_grams < 0.0 {
        return Err(LumenError::InvalidDrink(format!(
            "sugar grams must be a non-negative number, got {}",
            sugar_grams
        )));
    }
    Ok(())
}
