use std::path::Path;

use crate::error::Result;
use crate::models::DrinkRecord;

/// Write the drink log to a CSV file.
pub fn export_csv(path: &Path, drinks: &[DrinkRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "drink_category",
        "volume_ml",
        "sugar_grams",
        "occurred_at",
    ])?;

    for drink in drinks {
        wtr.write_record([
            drink.id.clone(),
            drink.drink_category.to_string(),
            format!("{:.0}", drink.volume_ml),
            format!("{:.2}", drink.sugar_grams),
            drink.occurred_at.to_rfc3339(),
        ])?;
    }

    wtr.flush()?;
    tracing::info!(path = %path.display(), rows = drinks.len(), "drink log exported");
    Ok(())
}
