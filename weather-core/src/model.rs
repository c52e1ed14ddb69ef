use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Date format used for trend labels.
pub const DATE_LABEL_FORMAT: &str = "%Y-%m-%d";

/// Current weather for a city, normalized from the provider payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub city: String,
    /// ISO country code, e.g. "FR".
    pub country: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Everything a single current-weather lookup yields.
///
/// The provider embeds coordinates in the current-weather payload, so both the
/// weather client and the geocode resolver are served by the same request.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub record: WeatherRecord,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalSample {
    pub timestamp: DateTime<Utc>,
    pub temperature_c: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub temperature_c: f64,
}

impl TrendPoint {
    pub fn label(&self) -> String {
        self.date.format(DATE_LABEL_FORMAT).to_string()
    }
}

/// Temperatures over the trend window, oldest date first.
///
/// Sparse: days whose sample was unavailable have no point at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub city: String,
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn min_temperature(&self) -> Option<f64> {
        self.points.iter().map(|p| p.temperature_c).reduce(f64::min)
    }

    pub fn max_temperature(&self) -> Option<f64> {
        self.points.iter().map(|p| p.temperature_c).reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(day: u32, temperature_c: f64) -> TrendPoint {
        TrendPoint {
            date: NaiveDate::from_ymd_opt(2024, 3, day).expect("valid date"),
            temperature_c,
        }
    }

    #[test]
    fn label_is_iso_date() {
        assert_eq!(point(5, 1.0).label(), "2024-03-05");
    }

    #[test]
    fn min_max_over_points() {
        let series = TrendSeries {
            city: "Oslo".into(),
            points: vec![point(1, -3.5), point(2, 4.0), point(3, 0.25)],
        };

        assert_eq!(series.len(), 3);
        assert_eq!(series.min_temperature(), Some(-3.5));
        assert_eq!(series.max_temperature(), Some(4.0));
    }

    #[test]
    fn empty_series_has_no_extremes() {
        let series = TrendSeries { city: "Oslo".into(), points: Vec::new() };

        assert!(series.is_empty());
        assert_eq!(series.min_temperature(), None);
        assert_eq!(series.max_temperature(), None);
    }

    #[test]
    fn trend_point_serializes_date_as_label() {
        let json = serde_json::to_value(point(9, 2.0)).expect("serialize");
        assert_eq!(json["date"], "2024-03-09");
    }
}
