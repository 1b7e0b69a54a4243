use dialoguer::{Confirm, Input, Select};

use crate::error::{LumenError, Result};
use crate::i18n::{Localizer, Message, MessageLookup};
use crate::models::{match_category, CategoryMatch, DrinkCategory};

/// Pick a drink type from the built-in menu.
pub fn prompt_category(localizer: &Localizer) -> Result<DrinkCategory> {
    let options: Vec<String> = DrinkCategory::KNOWN
        .iter()
        .map(|c| localizer.text(&Message::DrinkName(c.clone())))
        .collect();

    let selection = Select::new()
        .with_prompt("Drink type")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(DrinkCategory::KNOWN[selection].clone())
}

/// Resolve typed category text, confirming fuzzy matches.
///
/// Declined or unmatched input is kept as a free-text category.
pub fn resolve_category(input: &str) -> Result<DrinkCategory> {
    match match_category(input) {
        CategoryMatch::Exact(category) => Ok(category),
        CategoryMatch::Fuzzy(category, _) => {
            let confirm = prompt_yes_no(&format!("Did you mean '{}'?", category), true)?;
            if confirm {
                Ok(category)
            } else {
                Ok(DrinkCategory::Other(input.trim().to_string()))
            }
        }
        CategoryMatch::Unknown(text) => {
            if text.is_empty() {
                return Err(LumenError::InvalidInput("Empty drink type".to_string()));
            }
            Ok(DrinkCategory::Other(text))
        }
    }
}

/// Prompt for a volume in ml.
pub fn prompt_volume(default_ml: f64) -> Result<f64> {
    prompt_number("Volume (ml)", default_ml)
}

/// Prompt for sugar concentration in g per 100 ml.
pub fn prompt_sugar(default_per_100ml: f64) -> Result<f64> {
    prompt_number("Sugar (g / 100ml)", default_per_100ml)
}

fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| LumenError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
