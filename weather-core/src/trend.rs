//! Seven-day temperature trend for a city.
//!
//! The city is resolved to coordinates once, then one historical sample is
//! requested per day, today first, each at the current time of day. Days the
//! provider can't serve are left out, and the series is returned oldest first.

use chrono::{DateTime, Days, Duration, Local, TimeZone, Utc};

use crate::{
    error::{Result, WeatherError},
    geocode::resolve_coordinates,
    history::sample_at,
    model::{TrendPoint, TrendSeries},
    provider::WeatherProvider,
};

/// Number of days covered by a trend, today included.
pub const TREND_WINDOW_DAYS: u64 = 7;

/// Assemble the trend for `city` ending now, dated in local time.
pub async fn assemble_trend(provider: &dyn WeatherProvider, city: &str) -> Result<TrendSeries> {
    assemble_trend_at(provider, city, Local::now()).await
}

/// Assemble the trend for `city` ending at `now`. Dates are taken in `now`'s
/// time zone.
pub async fn assemble_trend_at<Tz: TimeZone>(
    provider: &dyn WeatherProvider,
    city: &str,
    now: DateTime<Tz>,
) -> Result<TrendSeries> {
    let coords = resolve_coordinates(provider, city)
        .await
        .map_err(|_| WeatherError::LocationNotFound { city: city.to_string() })?;

    let mut points = Vec::with_capacity(TREND_WINDOW_DAYS as usize);

    for days_back in 0..TREND_WINDOW_DAYS {
        let instant = days_before(&now, days_back);

        if let Some(sample) = sample_at(provider, coords, instant.with_timezone(&Utc)).await {
            points.push(TrendPoint {
                date: instant.date_naive(),
                temperature_c: sample.temperature_c,
            });
        }
    }

    // Sampled newest first.
    points.reverse();

    tracing::info!(city, points = points.len(), "assembled temperature trend");

    Ok(TrendSeries { city: city.to_string(), points })
}

/// Same wall-clock time `days_back` calendar days before `now`.
///
/// An ambiguous local time resolves to the earlier instant. A local time
/// skipped by a DST jump falls back to exactly `days_back * 24h` earlier.
fn days_before<Tz: TimeZone>(now: &DateTime<Tz>, days_back: u64) -> DateTime<Tz> {
    now.naive_local()
        .checked_sub_days(Days::new(days_back))
        .and_then(|naive| naive.and_local_timezone(now.timezone()).earliest())
        .unwrap_or_else(|| now.clone() - Duration::days(days_back as i64))
}
