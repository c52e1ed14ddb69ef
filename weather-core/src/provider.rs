use crate::{
    Config,
    model::{Coordinates, CurrentConditions, HistoricalSample},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt::Debug;

pub mod openweather;

/// Source of current and historical weather.
///
/// Errors carry the provider's detail; the core components collapse them into
/// the coarse outcomes shown to the user.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Look up current weather by city name, forwarded verbatim.
    async fn current(&self, city: &str) -> anyhow::Result<CurrentConditions>;

    /// Fetch the observation for one coordinate at one instant.
    async fn historical(
        &self,
        coords: Coordinates,
        at: DateTime<Utc>,
    ) -> anyhow::Result<HistoricalSample>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.require_api_key()?;

    let provider = match &config.openweather.base_url {
        Some(base_url) => OpenWeatherProvider::with_base_url(api_key, base_url),
        None => OpenWeatherProvider::new(api_key),
    };

    Ok(Box::new(provider))
}
