//! Runtime configuration.
//!
//! Values come from environment variables (optionally seeded from a `.env`
//! file by the binary). Command-line flags override the drink log path and
//! language after loading.

use std::path::PathBuf;

use chrono::Duration;
use secrecy::{ExposeSecret, SecretString};

use crate::coach::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use crate::error::{LumenError, Result};
use crate::goals::{DailyGoal, DEFAULT_DAILY_GOAL_GRAMS, DEFAULT_REMINDER_HOURS};
use crate::i18n::Language;

pub const DEFAULT_STATE_FILE: &str = "drinks.json";

/// Strongly typed application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON drink log.
    pub state_file: PathBuf,

    pub language: Language,

    pub daily_goal: DailyGoal,

    /// Hours without a logged drink before a reminder is shown.
    pub reminder_hours: u32,

    /// Insight generation is disabled when absent.
    pub gemini_api_key: Option<SecretString>,

    pub gemini_model: String,

    pub gemini_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
            language: Language::default(),
            daily_goal: DailyGoal::default(),
            reminder_hours: DEFAULT_REMINDER_HOURS,
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Optional:
    /// - `LUMENFUEL_STATE_FILE`: drink log path (default: `drinks.json`)
    /// - `LUMENFUEL_LANG`: display language code (default: `en`)
    /// - `LUMENFUEL_DAILY_GOAL_G`: daily sugar goal in grams (default: 25)
    /// - `LUMENFUEL_REMINDER_HOURS`: reminder interval (default: 3)
    /// - `GEMINI_API_KEY`: enables the AI coach
    /// - `GEMINI_MODEL`, `GEMINI_BASE_URL`: insight endpoint overrides
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Read values through `get`, so tests never touch the real environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let state_file = get("LUMENFUEL_STATE_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.state_file);

        let language = match get("LUMENFUEL_LANG") {
            Some(code) => code
                .parse()
                .map_err(|_| LumenError::Config(format!("Invalid LUMENFUEL_LANG: {}", code)))?,
            None => defaults.language,
        };

        let goal_grams =
            parse_var(&mut get, "LUMENFUEL_DAILY_GOAL_G", DEFAULT_DAILY_GOAL_GRAMS)?;
        let daily_goal = DailyGoal::new(goal_grams)
            .map_err(|e| LumenError::Config(format!("Invalid LUMENFUEL_DAILY_GOAL_G: {}", e)))?;

        let reminder_hours =
            parse_var(&mut get, "LUMENFUEL_REMINDER_HOURS", DEFAULT_REMINDER_HOURS)?;

        let gemini_api_key = get("GEMINI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .map(|k| SecretString::new(k.into()));

        Ok(Self {
            state_file,
            language,
            daily_goal,
            reminder_hours,
            gemini_api_key,
            gemini_model: get("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_base_url: get("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
        })
    }

    pub fn reminder_interval(&self) -> Duration {
        Duration::hours(i64::from(self.reminder_hours))
    }

    /// Log the loaded configuration with the API key masked.
    pub fn log_config(&self) {
        let masked_key = match &self.gemini_api_key {
            Some(key) => {
                let key = key.expose_secret();
                let skip = key.chars().count().saturating_sub(4);
                format!("****{}", key.chars().skip(skip).collect::<String>())
            }
            None => "(not set)".to_string(),
        };

        tracing::debug!("Configuration loaded:");
        tracing::debug!("  state file     : {}", self.state_file.display());
        tracing::debug!("  language       : {}", self.language);
        tracing::debug!("  daily goal (g) : {}", self.daily_goal.grams());
        tracing::debug!("  reminder (h)   : {}", self.reminder_hours);
        tracing::debug!("  gemini model   : {}", self.gemini_model);
        tracing::debug!("  gemini url     : {}", self.gemini_base_url);
        tracing::debug!("  gemini key     : {}", masked_key);
    }
}

fn parse_var<F, T>(get: &mut F, name: &str, default: T) -> Result<T>
where
    F: FnMut(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| LumenError::Config(format!("Invalid {}: {}", name, e))),
        None => Ok(default),
    }
}
