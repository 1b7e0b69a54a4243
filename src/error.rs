use thiserror::Error;

#[derive(Debug, Error)]
pub enum LumenError {
    #[error("Drink not found: {0}")]
    DrinkNotFound(String),

    #[error("Invalid drink: {0}")]
    InvalidDrink(String),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Coach error: {0}")]
    Coach(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, LumenError>;
