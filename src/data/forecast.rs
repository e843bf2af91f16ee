use reqwest::Client;
use serde::Deserialize;

use super::{get_json, http_client};
use crate::{
    domain::weather::{Coordinate, CurrentConditions, HourlySample, extract_window},
    error::LookupError,
};

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const SERVICE: &str = "forecast";
const HOURLY_FIELDS: &str =
    "temperature_2m,apparent_temperature,precipitation_probability,wind_speed_10m";
const CURRENT_FIELDS: &str = "temperature_2m,apparent_temperature,wind_speed_10m";
const FORECAST_DAYS: &str = "2";

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl ForecastClient {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_base_url(FORECAST_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            client: http_client()?,
            base_url: base_url.into(),
        })
    }

    pub async fn fetch(&self, coordinate: Coordinate) -> Result<ForecastResponse, LookupError> {
        tracing::debug!(
            latitude = coordinate.latitude,
            longitude = coordinate.longitude,
            "forecast request"
        );
        let request = self.client.get(&self.base_url).query(&[
            ("latitude", coordinate.latitude.to_string()),
            ("longitude", coordinate.longitude.to_string()),
            ("hourly", HOURLY_FIELDS.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("forecast_days", FORECAST_DAYS.to_string()),
            ("timezone", "auto".to_string()),
        ]);

        get_json(request, SERVICE).await
    }
}

/// Raw forecast payload. Missing objects and arrays decode as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub current: Option<CurrentBlock>,
    #[serde(default)]
    pub hourly: Option<HourlyBlock>,
}

impl ForecastResponse {
    #[must_use]
    pub fn current_conditions(&self) -> CurrentConditions {
        self.current
            .as_ref()
            .map(|current| CurrentConditions {
                temperature_c: current.temperature_2m,
                apparent_temperature_c: current.apparent_temperature,
                wind_speed_kmh: current.wind_speed_10m,
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn window(&self) -> Vec<HourlySample> {
        self.hourly
            .as_ref()
            .map(extract_window)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentBlock {
    #[serde(default)]
    pub temperature_2m: Option<f32>,
    #[serde(default)]
    pub apparent_temperature: Option<f32>,
    #[serde(default)]
    pub wind_speed_10m: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HourlyBlock {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f32>>,
    pub apparent_temperature: Vec<Option<f32>>,
    pub precipitation_probability: Vec<Option<u8>>,
    pub wind_speed_10m: Vec<Option<f32>>,
}
