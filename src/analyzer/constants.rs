use crate::models::{BodyRegion, RegionKey, RegionTable};

/// Grams of sugar that make up one unit on the logarithmic curve.
pub const SUGAR_SCALE_GRAMS: f64 = 5.0;

/// Multiplier applied after the `ln(1 + x)` transform.
pub const IMPACT_CURVE_GAIN: f64 = 1.8;

/// Upper bound for every impact score.
pub const MAX_IMPACT: f64 = 5.0;

pub const PANCREAS_SENSITIVITY: f64 = 1.5;
pub const LIVER_SENSITIVITY: f64 = 1.2;
pub const ENERGY_SENSITIVITY: f64 = 1.8;

/// Built-in body regions: pancreas, liver, energy.
pub fn default_regions() -> RegionTable {
    RegionTable::new()
        .with(BodyRegion::builtin(RegionKey::PANCREAS, PANCREAS_SENSITIVITY))
        .with(BodyRegion::builtin(RegionKey::LIVER, LIVER_SENSITIVITY))
        .with(BodyRegion::builtin(RegionKey::ENERGY, ENERGY_SENSITIVITY))
}
