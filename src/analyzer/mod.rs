pub mod calculations;
pub mod constants;

pub use calculations::{analyze, overall_impact_level, region_impact, total_sugar_grams};
pub use constants::*;
