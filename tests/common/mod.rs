#![allow(dead_code)]

use serde_json::{Value, json};
use weather_predictor::{
    app::pipeline::WeatherService,
    data::{forecast::ForecastClient, geocode::GeocodeClient, geoip::GeoIpClient},
    domain::novelty::NoveltyContent,
};
use wiremock::MockServer;

pub const GEOCODE_PATH: &str = "/v1/search";
pub const GEOIP_PATH: &str = "/json/";
pub const FORECAST_PATH: &str = "/v1/forecast";

/// Service whose three providers all point at `server`.
pub fn service_for(server: &MockServer) -> WeatherService {
    WeatherService::new(
        GeocodeClient::with_base_url(format!("{}{GEOCODE_PATH}", server.uri())).expect("geocode"),
        GeoIpClient::with_base_url(format!("{}{GEOIP_PATH}", server.uri())).expect("geoip"),
        ForecastClient::with_base_url(format!("{}{FORECAST_PATH}", server.uri()))
            .expect("forecast"),
        NoveltyContent::default(),
    )
}

pub fn london_geocode() -> Value {
    json!({
        "results": [{
            "id": 2643743,
            "name": "London",
            "latitude": 51.50853,
            "longitude": -0.12574,
            "country": "United Kingdom",
            "country_code": "GB",
            "admin1": "England",
            "timezone": "Europe/London"
        }],
        "generationtime_ms": 0.5
    })
}

pub fn geoip_success() -> Value {
    json!({
        "status": "success",
        "country": "Sweden",
        "regionName": "Stockholm County",
        "city": "Stockholm",
        "lat": 59.3293,
        "lon": 18.0686
    })
}

/// Hourly arrays of `hours` entries. Temperatures rise 0.5 °C per hour
/// from `start_temp`, rain probability stays at `precip`.
pub fn forecast_body(hours: usize, start_temp: f32, precip: u8) -> Value {
    let time = (0..hours)
        .map(|idx| format!("2026-02-{:02}T{:02}:00", 12 + idx / 24, idx % 24))
        .collect::<Vec<_>>();
    let temps = (0..hours)
        .map(|idx| start_temp + idx as f32 * 0.5)
        .collect::<Vec<_>>();
    json!({
        "latitude": 51.5,
        "longitude": -0.12,
        "timezone": "Europe/London",
        "current": {
            "time": "2026-02-12T00:00",
            "temperature_2m": start_temp,
            "apparent_temperature": start_temp - 2.0,
            "wind_speed_10m": 12.0
        },
        "hourly": {
            "time": time,
            "temperature_2m": temps,
            "apparent_temperature": temps,
            "precipitation_probability": vec![precip; hours],
            "wind_speed_10m": vec![12.0; hours]
        }
    })
}
