//! Text formatting shared by the dashboard widgets and the one-shot report.

use crate::domain::{
    novelty::WeatherTwin,
    trend::{TrendPrediction, TrendSummary},
    weather::HourlySample,
};

pub const NOT_AVAILABLE: &str = "N/A";
pub const DETAIL_HOURS: usize = 12;

#[must_use]
pub fn metric_temp(value: Option<f32>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{v:.1} °C"))
}

#[must_use]
pub fn metric_wind(value: Option<f32>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{v:.1} km/h"))
}

#[must_use]
pub fn prediction_text(trend: Option<&TrendPrediction>) -> String {
    match trend {
        None | Some(TrendPrediction::InsufficientData) => {
            "Insufficient data for prediction".to_string()
        }
        Some(TrendPrediction::InsufficientTemperatureData) => {
            "Insufficient temperature data for trend".to_string()
        }
        Some(TrendPrediction::Trend(summary)) => trend_sentence(summary),
    }
}

#[must_use]
pub fn trend_sentence(summary: &TrendSummary) -> String {
    let rain = if summary.rain_likely {
        "Rain is likely in the next 24 hours."
    } else {
        "Low chance of rain in the next 24 hours."
    };
    format!(
        "Temperatures will be {} (currently {:.1}°C → averaging {:.1}°C later). {rain}",
        summary.direction.label(),
        summary.current_temp_c,
        summary.average_future_c,
    )
}

#[must_use]
pub fn hour_detail_line(hour: &HourlySample) -> String {
    let temp = hour
        .temperature_c
        .map_or_else(|| NOT_AVAILABLE.to_string(), |t| format!("{t:.1}°C"));
    let precip = hour
        .precipitation_probability
        .map_or_else(|| NOT_AVAILABLE.to_string(), |p| format!("{p}%"));
    let wind = hour
        .wind_speed_kmh
        .map_or_else(|| NOT_AVAILABLE.to_string(), |w| format!("{w:.1} km/h"));
    format!(
        "{} | Temp: {temp} | Precip: {precip} | Wind: {wind}",
        hour.detail_label()
    )
}

#[must_use]
pub fn twin_line(twin: &WeatherTwin) -> String {
    format!("{}, {}: {}", twin.city, twin.country, twin.fact)
}

/// Chart points for hours that have a temperature, as `(label, °C)`.
#[must_use]
pub fn chart_points(window: &[HourlySample]) -> Vec<(String, f32)> {
    window
        .iter()
        .filter_map(|h| h.temperature_c.map(|t| (h.hour_label(), t)))
        .collect()
}

/// One block glyph per value, scaled between the series min and max.
#[must_use]
pub fn sparkline(values: &[f32]) -> String {
    const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    if values.is_empty() {
        return String::new();
    }
    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let span = (max - min).max(0.001);

    values
        .iter()
        .map(|v| {
            let level = (((v - min) / span) * (BLOCKS.len() as f32 - 1.0)).round() as usize;
            BLOCKS[level.min(BLOCKS.len() - 1)]
        })
        .collect()
}
