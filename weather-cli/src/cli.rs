use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use weather_core::{
    Config, FavoritesStore, WeatherError, WeatherProvider, assemble_trend, fetch_current,
    provider_from_config,
};

use crate::{chart, output};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    /// Log provider requests and failures to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather for a city.
    Current {
        city: String,

        /// Print the record as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Chart the temperature over the last seven days.
    Trend {
        city: String,

        /// Print the series as JSON instead of a chart.
        #[arg(long)]
        json: bool,
    },

    /// Manage favorite cities.
    Favorites {
        #[command(subcommand)]
        action: FavoritesCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    /// List favorite cities.
    List,
    /// Add a city to favorites.
    Add { city: String },
    /// Remove a city from favorites.
    Remove { city: String },
    /// Show current weather for every favorite.
    Show,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            // A broken config file must not lock the user out of fixing it.
            Command::Configure => configure(config_or_default(Config::load())),
            command => run_command(Config::load()?, command).await,
        }
    }
}

async fn run_command(config: Config, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Configure => configure(config),
        Command::Current { city, json } => {
            let city = require_city(&city)?;
            let provider = provider_from_config(&config)?;
            show_current(provider.as_ref(), city, json).await
        }
        Command::Trend { city, json } => {
            let city = require_city(&city)?;
            let provider = provider_from_config(&config)?;
            let series = assemble_trend(provider.as_ref(), city).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else {
                println!("{}", chart::render_trend(&series));
            }
            Ok(())
        }
        Command::Favorites { action } => {
            let store = FavoritesStore::new(config.favorites_path()?);
            run_favorites(&config, &store, action).await
        }
    }
}

/// Reject blank input before it reaches the provider. The name itself is
/// passed on untouched.
fn require_city(city: &str) -> anyhow::Result<&str> {
    if city.trim().is_empty() {
        bail!("Please enter a city name.");
    }
    Ok(city)
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;

    let api_key = require_nonblank_key(api_key)?;
    config.set_api_key(api_key);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn require_nonblank_key(api_key: String) -> anyhow::Result<String> {
    let trimmed = api_key.trim();
    if trimmed.is_empty() {
        bail!("API key must not be empty.");
    }
    Ok(trimmed.to_string())
}

fn config_or_default(loaded: anyhow::Result<Config>) -> Config {
    loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %format!("{err:#}"), "ignoring unreadable config");
        Config::default()
    })
}

async fn show_current(
    provider: &dyn WeatherProvider,
    city: &str,
    json: bool,
) -> anyhow::Result<()> {
    let record = fetch_current(provider, city).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", output::format_record(&record));
    }
    Ok(())
}

async fn run_favorites(
    config: &Config,
    store: &FavoritesStore,
    action: FavoritesCommand,
) -> anyhow::Result<()> {
    let favorites = store.load()?;

    match action {
        FavoritesCommand::List => println!("{}", output::format_favorites(&favorites)),
        FavoritesCommand::Add { city } => {
            let city = require_city(&city)?;
            match store.add(favorites, city) {
                Ok(_) => println!("{city} added to favorites."),
                Err(err @ WeatherError::AlreadyExists { .. }) => println!("Warning: {err}."),
                Err(err) => return Err(err.into()),
            }
        }
        FavoritesCommand::Remove { city } => {
            if !favorites.contains(&city) {
                println!("{city} is not in favorites.");
                return Ok(());
            }
            store.remove(favorites, &city)?;
            println!("{city} removed from favorites.");
        }
        FavoritesCommand::Show => {
            if favorites.is_empty() {
                println!("{}", output::format_favorites(&favorites));
                return Ok(());
            }

            let provider = provider_from_config(config)?;
            for city in &favorites {
                match fetch_current(provider.as_ref(), city).await {
                    Ok(record) => println!("{}\n", output::format_record(&record)),
                    Err(err) => println!("{err}\n"),
                }
            }
        }
    }

    Ok(())
}
