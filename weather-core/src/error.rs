use std::path::PathBuf;

use thiserror::Error;

/// Failures the core reports to the presentation layer.
///
/// A missing historical sample is not an error; the sampler returns `None`
/// and the trend simply omits that day.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The provider lookup failed. Unknown city, network failure and a
    /// rejected API key all land here.
    #[error("City not found: {city}")]
    NotFound { city: String },

    #[error("Could not find location: {city}")]
    LocationNotFound { city: String },

    #[error("{city} is already in favorites")]
    AlreadyExists { city: String },

    #[error("Failed to access favorites file {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Favorites file {} is not a JSON array of city names: {source}", path.display())]
    MalformedFavorites {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;
