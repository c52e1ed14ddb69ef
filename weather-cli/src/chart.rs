//! Terminal rendering of a temperature trend as horizontal bars.

use weather_core::{TREND_WINDOW_DAYS, TrendSeries};

const BAR_WIDTH: usize = 30;

/// Render `series` as a titled bar chart, one row per date, oldest first.
///
/// Bars are scaled between the series' minimum and maximum so small swings
/// stay visible; the coldest day still gets one block. An empty series
/// renders a message instead of an empty plot.
pub fn render_trend(series: &TrendSeries) -> String {
    let title = format!("Temperature Trends for {}", series.city);

    let (Some(min), Some(max)) = (series.min_temperature(), series.max_temperature()) else {
        return format!(
            "{title}\nNo temperature data available for the last {TREND_WINDOW_DAYS} days."
        );
    };

    let range = max - min;
    let mut lines = vec![title, format!("Date        {:─<width$}", "", width = BAR_WIDTH + 10)];

    for point in &series.points {
        let filled = if range > f64::EPSILON {
            let frac = (point.temperature_c - min) / range;
            1 + (frac * (BAR_WIDTH - 1) as f64).round() as usize
        } else {
            BAR_WIDTH
        };
        let filled = filled.min(BAR_WIDTH);
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));

        lines.push(format!("{} │{} {:>6.1}°C", point.label(), bar, point.temperature_c));
    }

    lines.push(format!(
        "min {min:.1}°C  max {max:.1}°C  ({} of {TREND_WINDOW_DAYS} days)",
        series.len()
    ));
    lines.join("\n")
}
