mod export;
mod manager;
mod persistence;

pub use export::export_csv;
pub use manager::{AnalysisScope, DrinkStore, StoreEvent};
pub use persistence::{load_drinks, save_drinks};
