use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// LumenFuel: log sugary drinks and see their short-term body impact.
#[derive(Parser, Debug)]
#[command(name = "lumenfuel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the drink log JSON file (overrides LUMENFUEL_STATE_FILE).
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Display language: en, de, fr-CA, es, ja, ko (overrides LUMENFUEL_LANG).
    #[arg(short, long)]
    pub lang: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log a drink. Missing values are asked for interactively.
    Log {
        /// Drink type, e.g. soda, juice, energy_drink, or free text.
        #[arg(short, long)]
        category: Option<String>,

        /// Volume in ml.
        #[arg(short, long)]
        volume: Option<f64>,

        /// Sugar in g per 100 ml.
        #[arg(short, long)]
        sugar: Option<f64>,

        /// When the drink was consumed (RFC 3339). Defaults to now.
        #[arg(long)]
        at: Option<String>,
    },

    /// Log a preset serving of a drink type right now.
    Quick {
        /// Drink type, e.g. soda.
        category: String,
    },

    /// Remove a drink by id.
    Remove { id: String },

    /// List logged drinks.
    List {
        /// Show the whole history instead of today only.
        #[arg(long)]
        all: bool,
    },

    /// Show the body impact of today's drinks.
    Impact {
        /// Analyze the whole history instead of today only.
        #[arg(long)]
        all: bool,
    },

    /// Show daily goal progress and logging reminders.
    Status,

    /// Show weekly sugar trends.
    History,

    /// Ask the AI coach for an insight.
    Coach {
        /// Base the insight on long-term habits.
        #[arg(long)]
        long_term: bool,

        /// Use the whole history for a session insight.
        #[arg(long)]
        all: bool,
    },

    /// Export the drink log to CSV.
    Export {
        /// Output CSV path.
        path: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Impact { all: false }
    }
}
