use chrono::NaiveDateTime;

mod conditions;
mod window;

pub use conditions::{
    Classification, ConditionCategory, TemperatureBand, category_icon, classify,
    classify_current, temperature_band,
};
pub use window::{WINDOW_HOURS, extract_window};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub coordinate: Coordinate,
    pub label: String,
}

impl Location {
    /// Geocoder style label: `name[, admin1][, country]`.
    #[must_use]
    pub fn from_geocode(
        coordinate: Coordinate,
        name: &str,
        admin1: Option<&str>,
        country: Option<&str>,
    ) -> Self {
        let mut parts = vec![name];
        parts.extend(admin1.filter(|a| !a.is_empty()));
        parts.extend(country.filter(|c| !c.is_empty()));
        Self {
            coordinate,
            label: parts.join(", "),
        }
    }

    /// IP lookup style label: `city[, region], country`.
    #[must_use]
    pub fn from_ip_lookup(
        coordinate: Coordinate,
        city: &str,
        region: Option<&str>,
        country: &str,
    ) -> Self {
        let label = match region.map(str::trim).filter(|r| !r.is_empty()) {
            Some(region) => format!("{city}, {region}, {country}"),
            None => format!("{city}, {country}"),
        };
        Self { coordinate, label }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeResolution {
    Selected(Location),
    NotFound(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CurrentConditions {
    pub temperature_c: Option<f32>,
    pub apparent_temperature_c: Option<f32>,
    pub wind_speed_kmh: Option<f32>,
}

/// One hour of the forecast window. Absent fields are `None`, never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlySample {
    pub time: String,
    pub temperature_c: Option<f32>,
    pub apparent_temperature_c: Option<f32>,
    pub precipitation_probability: Option<u8>,
    pub wind_speed_kmh: Option<f32>,
}

impl HourlySample {
    #[must_use]
    pub fn hour_label(&self) -> String {
        hour_label(&self.time)
    }

    #[must_use]
    pub fn detail_label(&self) -> String {
        parse_datetime(&self.time).map_or_else(
            || self.time.clone(),
            |dt| dt.format("%Y-%m-%d %H:%M").to_string(),
        )
    }
}

#[must_use]
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// `HH:MM` for chart ticks; unparseable stamps keep their last five chars.
#[must_use]
pub fn hour_label(value: &str) -> String {
    if let Some(dt) = parse_datetime(value) {
        return dt.format("%H:%M").to_string();
    }
    let count = value.chars().count();
    value.chars().skip(count.saturating_sub(5)).collect()
}
