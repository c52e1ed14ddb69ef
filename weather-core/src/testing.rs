//! In-memory provider for exercising the core components without HTTP.

use std::{
    collections::VecDeque,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    model::{Coordinates, CurrentConditions, HistoricalSample, WeatherRecord},
    provider::WeatherProvider,
};

/// Answers `current` from a fixed record and `historical` from a queue of
/// temperatures consumed in call order; `None` entries fail the call.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    conditions: Option<CurrentConditions>,
    temperatures: Mutex<VecDeque<Option<f64>>>,
    requested: Mutex<Vec<DateTime<Utc>>>,
    current_calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn unknown_city() -> Self {
        Self::default()
    }

    pub fn city(name: &str, temperatures: impl IntoIterator<Item = Option<f64>>) -> Self {
        Self {
            conditions: Some(CurrentConditions {
                record: WeatherRecord {
                    city: name.to_string(),
                    country: "FR".to_string(),
                    temperature_c: 15.0,
                    humidity_pct: 60,
                    description: "clear sky".to_string(),
                },
                coordinates: Coordinates { latitude: 48.85, longitude: 2.35 },
            }),
            temperatures: Mutex::new(temperatures.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn historical_calls(&self) -> usize {
        self.requested.lock().unwrap().len()
    }

    pub fn requested_instants(&self) -> Vec<DateTime<Utc>> {
        self.requested.lock().unwrap().clone()
    }

    pub fn current_calls(&self) -> usize {
        self.current_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherProvider for ScriptedProvider {
    async fn current(&self, city: &str) -> anyhow::Result<CurrentConditions> {
        self.current_calls.fetch_add(1, Ordering::SeqCst);
        self.conditions
            .clone()
            .ok_or_else(|| anyhow!("OpenWeather current request failed with status 404: {city}"))
    }

    async fn historical(
        &self,
        _coords: Coordinates,
        at: DateTime<Utc>,
    ) -> anyhow::Result<HistoricalSample> {
        self.requested.lock().unwrap().push(at);
        match self.temperatures.lock().unwrap().pop_front().flatten() {
            Some(temperature_c) => Ok(HistoricalSample { timestamp: at, temperature_c }),
            None => Err(anyhow!("OpenWeather timemachine request failed with status 500")),
        }
    }
}
