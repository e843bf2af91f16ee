use super::HourlySample;
use crate::data::forecast::HourlyBlock;

pub const WINDOW_HOURS: usize = 24;

/// Slices the hourly arrays to the next [`WINDOW_HOURS`] entries.
///
/// Length follows the `time` array; the other arrays may be shorter and
/// their missing positions come back as `None`.
#[must_use]
pub fn extract_window(hourly: &HourlyBlock) -> Vec<HourlySample> {
    hourly
        .time
        .iter()
        .take(WINDOW_HOURS)
        .enumerate()
        .map(|(idx, time)| HourlySample {
            time: time.clone(),
            temperature_c: hourly.temperature_2m.get(idx).copied().flatten(),
            apparent_temperature_c: hourly.apparent_temperature.get(idx).copied().flatten(),
            precipitation_probability: hourly
                .precipitation_probability
                .get(idx)
                .copied()
                .flatten(),
            wind_speed_kmh: hourly.wind_speed_10m.get(idx).copied().flatten(),
        })
        .collect()
}
