pub mod drink;
pub mod impact;
pub mod region;

pub use drink::{
    match_category, sugar_grams_for, CategoryMatch, DrinkCategory, DrinkPreset, DrinkRecord,
    NewDrink,
};
pub use impact::{Analysis, ImpactAssessment, ImpactBand};
pub use region::{BodyRegion, RegionKey, RegionTable};
