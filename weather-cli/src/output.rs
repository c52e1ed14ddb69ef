use weather_core::{FavoritesList, WeatherRecord};

/// Multi-line summary of current weather.
pub fn format_record(record: &WeatherRecord) -> String {
    format!(
        "City: {}, {}\nTemperature: {}°C\nHumidity: {}%\nDescription: {}",
        record.city, record.country, record.temperature_c, record.humidity_pct, record.description
    )
}

pub fn format_favorites(list: &FavoritesList) -> String {
    if list.is_empty() {
        return "No favorites yet. Add one with `weather favorites add <city>`.".to_string();
    }

    list.iter()
        .enumerate()
        .map(|(i, city)| format!("{:>2}. {city}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
