use super::weather::HourlySample;

const FUTURE_START: usize = 12;
const FUTURE_END: usize = 24;
const TREND_THRESHOLD_C: f32 = 2.0;
const RAIN_LIKELY_ABOVE: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    WarmingUp,
    CoolingDown,
    Stable,
}

impl TrendDirection {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::WarmingUp => "warming up",
            Self::CoolingDown => "cooling down",
            Self::Stable => "staying stable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendSummary {
    pub direction: TrendDirection,
    pub current_temp_c: f32,
    pub average_future_c: f32,
    pub rain_likely: bool,
    pub max_precipitation_probability: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrendPrediction {
    InsufficientData,
    InsufficientTemperatureData,
    Trend(TrendSummary),
}

impl TrendPrediction {
    #[must_use]
    pub fn summary(&self) -> Option<&TrendSummary> {
        match self {
            Self::Trend(summary) => Some(summary),
            _ => None,
        }
    }
}

/// Compares the mean of window hours 12..24 against `current_temp_c`.
///
/// The rain flag looks at the whole window, not just the later half.
/// A difference of exactly ±2 °C counts as stable.
#[must_use]
pub fn predict_trend(current_temp_c: f32, window: &[HourlySample]) -> TrendPrediction {
    if window.is_empty() {
        return TrendPrediction::InsufficientData;
    }

    let later = window
        .get(FUTURE_START..window.len().min(FUTURE_END))
        .unwrap_or_default();
    let temps = later
        .iter()
        .filter_map(|h| h.temperature_c)
        .collect::<Vec<_>>();
    if temps.is_empty() {
        return TrendPrediction::InsufficientTemperatureData;
    }

    let average_future_c = temps.iter().sum::<f32>() / temps.len() as f32;
    let diff = average_future_c - current_temp_c;
    let direction = if diff > TREND_THRESHOLD_C {
        TrendDirection::WarmingUp
    } else if diff < -TREND_THRESHOLD_C {
        TrendDirection::CoolingDown
    } else {
        TrendDirection::Stable
    };

    let max_precipitation_probability = window
        .iter()
        .take(FUTURE_END)
        .filter_map(|h| h.precipitation_probability)
        .max();

    TrendPrediction::Trend(TrendSummary {
        direction,
        current_temp_c,
        average_future_c,
        rain_likely: max_precipitation_probability.is_some_and(|p| p > RAIN_LIKELY_ABOVE),
        max_precipitation_probability,
    })
}
