pub mod analyzer;
pub mod cli;
pub mod coach;
pub mod config;
pub mod error;
pub mod goals;
pub mod history;
pub mod i18n;
pub mod interface;
pub mod models;
pub mod store;

pub use error::{LumenError, Result};
pub use models::{Analysis, DrinkCategory, DrinkRecord, ImpactBand, NewDrink};
