use reqwest::Client;
use serde::Deserialize;

use super::{get_json, http_client};
use crate::{
    domain::weather::{Coordinate, GeocodeResolution, Location},
    error::LookupError,
};

pub const GEOCODE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const SERVICE: &str = "geocoding";

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
}

impl GeocodeClient {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_base_url(GEOCODE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            client: http_client()?,
            base_url: base_url.into(),
        })
    }

    /// Looks up the single best match for `city`.
    pub async fn resolve(&self, city: &str) -> Result<GeocodeResolution, LookupError> {
        tracing::debug!(city, url = %self.base_url, "geocoding request");
        let request = self.client.get(&self.base_url).query(&[
            ("name", city),
            ("count", "1"),
            ("language", "en"),
            ("format", "json"),
        ]);

        let payload: GeocodeResponse = get_json(request, SERVICE).await?;

        Ok(payload
            .results
            .and_then(|results| results.into_iter().next())
            .map_or_else(
                || GeocodeResolution::NotFound(city.to_string()),
                |top| GeocodeResolution::Selected(top.into_location()),
            ))
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    admin1: Option<String>,
}

impl GeocodeResult {
    fn into_location(self) -> Location {
        Location::from_geocode(
            Coordinate::new(self.latitude, self.longitude),
            &self.name,
            self.admin1.as_deref(),
            self.country.as_deref(),
        )
    }
}
