use crate::{
    error::{Result, WeatherError},
    model::WeatherRecord,
    provider::WeatherProvider,
};

/// Current weather for `city`.
///
/// Every provider failure is reported as [`WeatherError::NotFound`]; the cause
/// is only logged.
pub async fn fetch_current(provider: &dyn WeatherProvider, city: &str) -> Result<WeatherRecord> {
    match provider.current(city).await {
        Ok(conditions) => {
            tracing::info!(city, resolved = %conditions.record.city, "fetched current weather");
            Ok(conditions.record)
        }
        Err(err) => {
            tracing::debug!(city, error = %format!("{err:#}"), "current weather lookup failed");
            Err(WeatherError::NotFound { city: city.to_string() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedProvider;

    #[tokio::test]
    async fn returns_record_for_known_city() {
        let provider = ScriptedProvider::city("Paris", []);
        let record = fetch_current(&provider, "Paris").await.unwrap();

        assert_eq!(record.city, "Paris");
        assert_eq!(record.country, "FR");
        assert_eq!(record.humidity_pct, 60);
    }

    #[tokio::test]
    async fn provider_failure_is_not_found() {
        let provider = ScriptedProvider::unknown_city();
        let err = fetch_current(&provider, "Atlantis").await.unwrap_err();

        assert!(matches!(err, WeatherError::NotFound { ref city } if city == "Atlantis"));
        assert_eq!(err.to_string(), "City not found: Atlantis");
    }
}
