use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{LumenError, Result};
use crate::models::DrinkRecord;

/// Load the drink log from a JSON file.
///
/// A missing file is an empty log. Duplicate ids keep the last occurrence.
/// Any record with invalid volume or sugar fails the whole load.
pub fn load_drinks<P: AsRef<Path>>(path: P) -> Result<Vec<DrinkRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::info!(path = %path.display(), "drink log not found, starting empty");
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let drinks: Vec<DrinkRecord> = serde_json::from_str(&content)?;

    let mut order: Vec<String> = Vec::with_capacity(drinks.len());
    let mut seen: HashMap<String, DrinkRecord> = HashMap::new();
    for drink in drinks {
        drink.validate().map_err(|e| match e {
            LumenError::InvalidDrink(msg) => {
                LumenError::InvalidDrink(format!("{} (record {})", msg, drink.id))
            }
            other => other,
        })?;
        if !seen.contains_key(&drink.id) {
            order.push(drink.id.clone());
        }
        seen.insert(drink.id.clone(), drink);
    }

    let deduped: Vec<DrinkRecord> = order
        .into_iter()
        .filter_map(|id| seen.remove(&id))
        .collect();
    tracing::debug!(path = %path.display(), count = deduped.len(), "drink log loaded");
    Ok(deduped)
}

/// Save the drink log as pretty-printed JSON.
pub fn save_drinks<P: AsRef<Path>>(path: P, drinks: &[DrinkRecord]) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(drinks)?;
    fs::write(path, json)?;
    tracing::debug!(path = %path.display(), count = drinks.len(), "drink log saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"[
            {"id": "a1", "drinkCategory": "soda", "volumeMl": 355, "sugarGrams": 37.63, "occurredAt": "2025-04-02T10:15:00Z"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let drinks = load_drinks(file.path()).unwrap();
        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].id, "a1");

        let out_file = NamedTempFile::new().unwrap();
        save_drinks(out_file.path(), &drinks).unwrap();

        let reloaded = load_drinks(out_file.path()).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].id, "a1");
        assert_eq!(reloaded[0].occurred_at, drinks[0].occurred_at);
        assert!((reloaded[0].sugar_grams - 37.63).abs() < 1e-9);
    }

    #[test]
    fn test_missing_file_is_empty_log() {
        let dir = tempfile::tempdir().unwrap();
        let drinks = load_drinks(dir.path().join("nope.json")).unwrap();
        assert!(drinks.is_empty());
    }

    #[test]
    fn test_duplicate_ids_last_wins() {
        let json = r#"[
            {"id": "a1", "drinkCategory": "soda", "volumeMl": 355, "sugarGrams": 37.63, "occurredAt": "2025-04-02T10:15:00Z"},
            {"id": "b2", "drinkCategory": "juice", "volumeMl": 250, "sugarGrams": 25, "occurredAt": "2025-04-02T11:00:00Z"},
            {"id": "a1", "drinkCategory": "soda", "volumeMl": 500, "sugarGrams": 53, "occurredAt": "2025-04-02T10:15:00Z"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let drinks = load_drinks(file.path()).unwrap();
        assert_eq!(drinks.len(), 2);
        assert_eq!(drinks[0].id, "a1");
        assert_eq!(drinks[0].volume_ml, 500.0);
    }

    #[test]
    fn test_negative_sugar_rejected() {
        let json = r#"[
            {"id": "bad", "drinkCategory": "soda", "volumeMl": 355, "sugarGrams": -4, "occurredAt": "2025-04-02T10:15:00Z"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        match load_drinks(file.path()) {
            Err(LumenError::InvalidDrink(msg)) => assert!(msg.contains("bad")),
            other => panic!("expected InvalidDrink, got {:?}", other),
        }
    }
}
