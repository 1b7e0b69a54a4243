use std::env;
use std::path::Path;

use chrono::{DateTime, Local, Utc};
use clap::Parser;
use dotenvy::dotenv;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use lumen_fuel_rs::analyzer::{analyze, default_regions, total_sugar_grams};
use lumen_fuel_rs::cli::{Cli, Command};
use lumen_fuel_rs::coach::{
    long_term_insight, session_insight, Announced, GeminiClient, InsightGenerator,
};
use lumen_fuel_rs::config::Config;
use lumen_fuel_rs::error::{LumenError, Result};
use lumen_fuel_rs::goals::{GoalProgress, ReminderState};
use lumen_fuel_rs::history::{long_term_summary, weekly_totals};
use lumen_fuel_rs::i18n::{Localizer, Message, MessageLookup};
use lumen_fuel_rs::interface::{
    display_analysis, display_drink_log, display_goal_progress, display_insight,
    display_long_term_summary, display_reminder, display_weekly_chart, prompt_category,
    prompt_sugar, prompt_volume, resolve_category,
};
use lumen_fuel_rs::models::NewDrink;
use lumen_fuel_rs::store::{export_csv, load_drinks, save_drinks, AnalysisScope, DrinkStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let mut cfg = Config::from_env()?;
    if let Some(file) = cli.file {
        cfg.state_file = file;
    }
    if let Some(lang) = cli.lang.as_deref() {
        cfg.language = lang.parse()?;
    }
    cfg.log_config();

    let localizer = Localizer::new(cfg.language);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Log {
            category,
            volume,
            sugar,
            at,
        } => cmd_log(&cfg, &localizer, category, volume, sugar, at),
        Command::Quick { category } => cmd_quick(&cfg, &localizer, &category),
        Command::Remove { id } => cmd_remove(&cfg, &localizer, &id),
        Command::List { all } => cmd_list(&cfg, &localizer, scope_for(all)),
        Command::Impact { all } => cmd_impact(&cfg, &localizer, scope_for(all)),
        Command::Status => cmd_status(&cfg, &localizer),
        Command::History => cmd_history(&cfg, &localizer),
        Command::Coach { long_term, all } => {
            cmd_coach(&cfg, &localizer, long_term, scope_for(all))
        }
        Command::Export { path } => cmd_export(&cfg, &path),
    }
}

fn scope_for(all: bool) -> AnalysisScope {
    if all {
        AnalysisScope::AllTime
    } else {
        AnalysisScope::Today
    }
}

/// Load the drink log and persist it again after every change.
fn open_store(path: &Path) -> Result<DrinkStore> {
    let mut store = DrinkStore::new(load_drinks(path)?);
    let target = path.to_path_buf();
    store.subscribe(move |event, drinks| {
        save_drinks(&target, drinks).inspect_err(|e| {
            tracing::error!(error = %e, ?event, "failed to save drink log");
        })
    });
    Ok(store)
}

/// Log a drink, asking for whatever was not passed on the command line.
fn cmd_log(
    cfg: &Config,
    localizer: &Localizer,
    category: Option<String>,
    volume: Option<f64>,
    sugar: Option<f64>,
    at: Option<String>,
) -> Result<()> {
    let occurred_at = match at.as_deref() {
        Some(raw) => parse_timestamp(raw)?,
        None => Utc::now(),
    };

    let category = match category.as_deref() {
        Some(text) => resolve_category(text)?,
        None => prompt_category(localizer)?,
    };

    let preset = category.preset();
    let volume_ml = match volume {
        Some(v) => v,
        None => prompt_volume(preset.volume_ml)?,
    };
    let sugar_per_100ml = match sugar {
        Some(s) => s,
        None => prompt_sugar(preset.sugar_per_100ml)?,
    };

    let drink = NewDrink::from_serving(category, volume_ml, sugar_per_100ml, occurred_at)?;
    add_and_report(cfg, localizer, drink)
}

/// Log the preset serving for a drink type at the current time.
fn cmd_quick(cfg: &Config, localizer: &Localizer, category: &str) -> Result<()> {
    let category = resolve_category(category)?;
    let drink = NewDrink::from_preset(category, Utc::now())?;
    add_and_report(cfg, localizer, drink)
}

fn add_and_report(cfg: &Config, localizer: &Localizer, drink: NewDrink) -> Result<()> {
    let mut store = open_store(&cfg.state_file)?;
    let record = store.add(drink)?;

    println!(
        "{}",
        localizer.text(&Message::DrinkLogged {
            category: record.drink_category.clone(),
            grams: record.sugar_grams,
        })
    );
    println!("  id: {}", record.id);

    let today = store.snapshot(AnalysisScope::Today, &Local::now());
    let progress = GoalProgress::compute(total_sugar_grams(&today), cfg.daily_goal);
    display_goal_progress(&progress, localizer);

    Ok(())
}

fn cmd_remove(cfg: &Config, localizer: &Localizer, id: &str) -> Result<()> {
    let mut store = open_store(&cfg.state_file)?;
    let removed = store.remove(id)?;
    println!("{}", localizer.text(&Message::DrinkRemoved { id: removed.id }));
    Ok(())
}

fn cmd_list(cfg: &Config, localizer: &Localizer, scope: AnalysisScope) -> Result<()> {
    let store = open_store(&cfg.state_file)?;
    let drinks = store.snapshot(scope, &Local::now());
    display_drink_log(&drinks, localizer);
    Ok(())
}

/// Show the body impact of the drinks in scope.
fn cmd_impact(cfg: &Config, localizer: &Localizer, scope: AnalysisScope) -> Result<()> {
    let store = open_store(&cfg.state_file)?;
    let drinks = store.snapshot(scope, &Local::now());

    println!("{}", localizer.text(&Message::AppTitle));
    let analysis = analyze(&drinks, &default_regions(), localizer);
    display_analysis(&analysis, localizer);
    Ok(())
}

fn cmd_status(cfg: &Config, localizer: &Localizer) -> Result<()> {
    let store = open_store(&cfg.state_file)?;
    let today = store.snapshot(AnalysisScope::Today, &Local::now());

    let progress = GoalProgress::compute(total_sugar_grams(&today), cfg.daily_goal);
    display_goal_progress(&progress, localizer);

    let reminder =
        ReminderState::new(store.last_logged_at()).check(Utc::now(), cfg.reminder_interval());
    display_reminder(reminder, localizer);
    Ok(())
}

/// Weekly chart plus long-term statistics when there is enough history.
fn cmd_history(cfg: &Config, localizer: &Localizer) -> Result<()> {
    let store = open_store(&cfg.state_file)?;

    let weeks = weekly_totals(store.all(), &Local);
    display_weekly_chart(&weeks, localizer);

    if let Some(summary) = long_term_summary(store.all(), &Local) {
        println!("=== {} ===", localizer.text(&Message::LongTermTitle));
        display_long_term_summary(&summary);
        println!();
    }
    Ok(())
}

fn cmd_coach(
    cfg: &Config,
    localizer: &Localizer,
    long_term: bool,
    scope: AnalysisScope,
) -> Result<()> {
    let store = open_store(&cfg.state_file)?;

    let client = match &cfg.gemini_api_key {
        Some(key) => Some(GeminiClient::new(
            key.clone(),
            cfg.gemini_model.as_str(),
            cfg.gemini_base_url.as_str(),
        )?),
        None => None,
    };
    let announced = client.as_ref().map(|c| {
        Announced::new(c as &dyn InsightGenerator, || {
            println!("{}", localizer.text(&Message::CoachGenerating));
        })
    });
    let generator = announced.as_ref().map(|a| a as &dyn InsightGenerator);

    if long_term {
        let outcome = long_term_insight(generator, store.all(), &Local);
        display_insight(Message::LongTermTitle, &outcome, localizer);
        return Ok(());
    }

    let drinks = store.snapshot(scope, &Local::now());
    let analysis = analyze(&drinks, &default_regions(), localizer);
    let goal = match scope {
        AnalysisScope::Today => Some(cfg.daily_goal),
        AnalysisScope::AllTime => None,
    };
    let outcome = session_insight(generator, &drinks, &analysis, goal);
    display_insight(Message::CoachTitle, &outcome, localizer);
    Ok(())
}

fn cmd_export(cfg: &Config, path: &Path) -> Result<()> {
    let store = open_store(&cfg.state_file)?;
    export_csv(path, store.all())?;
    println!("Exported {} drinks to {}", store.len(), path.display());
    Ok(())
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| LumenError::InvalidInput(format!("Invalid timestamp '{}': {}", raw, e)))
}

/// Logs go to stderr so they never mix with rendered output.
fn init_tracing() {
    let use_color = match env::var("FORCE_COLOR").as_deref() {
        Ok("1") | Ok("true") | Ok("yes") => true,
        Ok("0") | Ok("false") | Ok("no") => false,
        _ => std::io::stderr().is_terminal(),
    };

    let env_filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match env::var("LUMENFUEL_LOG_LEVEL").ok().as_deref() {
            Some("trace") => "trace",
            Some("debug") => "debug",
            Some("info") => "info",
            Some("error") => "error",
            _ => "warn",
        };
        EnvFilter::new(level)
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(env_filter)
        .with_ansi(use_color)
        .compact()
        .init();
}
