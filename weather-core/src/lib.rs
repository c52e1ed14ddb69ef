//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the weather provider, with an OpenWeather implementation
//! - Current weather lookup, coordinate resolution and historical sampling
//! - Seven-day temperature trend assembly
//! - The favorites list and its on-disk store
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod current;
pub mod error;
pub mod favorites;
pub mod geocode;
pub mod history;
pub mod model;
pub mod provider;
pub mod trend;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use current::fetch_current;
pub use error::WeatherError;
pub use favorites::{FavoritesList, FavoritesStore};
pub use geocode::resolve_coordinates;
pub use history::sample_at;
pub use model::{
    Coordinates, CurrentConditions, HistoricalSample, TrendPoint, TrendSeries, WeatherRecord,
};
pub use provider::{WeatherProvider, provider_from_config};
pub use trend::{TREND_WINDOW_DAYS, assemble_trend, assemble_trend_at};
