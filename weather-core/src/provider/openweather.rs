use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::model::{Coordinates, CurrentConditions, HistoricalSample, WeatherRecord};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const CURRENT_PATH: &str = "/data/2.5/weather";
const TIMEMACHINE_PATH: &str = "/data/2.5/onecall/timemachine";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &[(&str, String)],
        what: &str,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let res = self
            .http
            .get(&url)
            .query(query)
            .query(&[("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .with_context(|| format!("Failed to send request to OpenWeather ({what})"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read OpenWeather {what} response body"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather {} request failed with status {}: {}",
                what,
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse OpenWeather {what} JSON"))
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    coord: OwCoord,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    #[serde(default)]
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwTimeMachinePoint {
    dt: Option<i64>,
    temp: f64,
}

/// 2.5 puts the observation under `current`; One Call 3.0 under `data[0]`.
#[derive(Debug, Deserialize)]
struct OwTimeMachineResponse {
    current: Option<OwTimeMachinePoint>,
    #[serde(default)]
    data: Vec<OwTimeMachinePoint>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str) -> Result<CurrentConditions> {
        let parsed: OwCurrentResponse = self
            .get_json(CURRENT_PATH, &[("q", city.to_string())], "current")
            .await?;

        let description = parsed
            .weather
            .first()
            .map(|w| w.description.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        Ok(CurrentConditions {
            record: WeatherRecord {
                city: parsed.name,
                country: parsed.sys.country,
                temperature_c: parsed.main.temp,
                humidity_pct: parsed.main.humidity,
                description,
            },
            coordinates: Coordinates {
                latitude: parsed.coord.lat,
                longitude: parsed.coord.lon,
            },
        })
    }

    async fn historical(&self, coords: Coordinates, at: DateTime<Utc>) -> Result<HistoricalSample> {
        let query = [
            ("lat", coords.latitude.to_string()),
            ("lon", coords.longitude.to_string()),
            ("dt", at.timestamp().to_string()),
        ];

        let parsed: OwTimeMachineResponse =
            self.get_json(TIMEMACHINE_PATH, &query, "timemachine").await?;

        let point = parsed
            .current
            .or_else(|| parsed.data.into_iter().next())
            .ok_or_else(|| anyhow!("OpenWeather timemachine response contained no data"))?;

        let timestamp = point.dt.and_then(unix_to_utc).unwrap_or(at);

        Ok(HistoricalSample { timestamp, temperature_c: point.temp })
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
