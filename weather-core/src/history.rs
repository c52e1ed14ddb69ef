use chrono::{DateTime, Utc};

use crate::{
    model::{Coordinates, HistoricalSample},
    provider::WeatherProvider,
};

/// One historical observation, or `None` if the provider couldn't supply it.
pub async fn sample_at(
    provider: &dyn WeatherProvider,
    coords: Coordinates,
    at: DateTime<Utc>,
) -> Option<HistoricalSample> {
    match provider.historical(coords, at).await {
        Ok(sample) => Some(sample),
        Err(err) => {
            tracing::debug!(
                ts = at.timestamp(),
                error = %format!("{err:#}"),
                "historical sample unavailable"
            );
            None
        }
    }
}
