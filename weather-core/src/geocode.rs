//! Coordinates for a city name, read from the current-weather payload.

use crate::{
    error::{Result, WeatherError},
    model::Coordinates,
    provider::WeatherProvider,
};

/// Resolve `city` to coordinates. Fails with [`WeatherError::NotFound`] under
/// the same conditions as [`crate::fetch_current`].
pub async fn resolve_coordinates(
    provider: &dyn WeatherProvider,
    city: &str,
) -> Result<Coordinates> {
    match provider.current(city).await {
        Ok(conditions) => {
            let coords = conditions.coordinates;
            tracing::debug!(
                city,
                lat = coords.latitude,
                lon = coords.longitude,
                "resolved coordinates"
            );
            Ok(coords)
        }
        Err(err) => {
            tracing::debug!(city, error = %format!("{err:#}"), "coordinate lookup failed");
            Err(WeatherError::NotFound { city: city.to_string() })
        }
    }
}
