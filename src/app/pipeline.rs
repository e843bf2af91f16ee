use std::sync::Arc;

use rand::Rng;

use crate::{
    cli::Cli,
    data::{
        forecast::{ForecastClient, ForecastResponse},
        geocode::GeocodeClient,
        geoip::GeoIpClient,
    },
    domain::{
        novelty::{Extras, NoveltyContent},
        trend::{TrendPrediction, predict_trend},
        weather::{
            Classification, CurrentConditions, GeocodeResolution, HourlySample, Location,
            classify_current,
        },
    },
    error::LookupFailure,
};

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    City(String),
    CurrentLocation,
}

#[derive(Debug, Clone)]
pub struct WeatherReport {
    pub location: Location,
    pub timezone: Option<String>,
    pub current: CurrentConditions,
    pub window: Vec<HourlySample>,
    pub classification: Classification,
    /// `None` when the current temperature is missing.
    pub trend: Option<TrendPrediction>,
    pub extras: Extras,
}

impl WeatherReport {
    pub fn build<R: Rng>(
        location: Location,
        response: &ForecastResponse,
        content: &NoveltyContent,
        rng: &mut R,
    ) -> Self {
        let current = response.current_conditions();
        let window = response.window();
        let classification = classify_current(&current, &window);
        let trend = current
            .temperature_c
            .map(|temp| predict_trend(temp, &window));
        let extras = content.pick(classification.category, rng);

        Self {
            location,
            timezone: response.timezone.clone(),
            current,
            window,
            classification,
            trend,
            extras,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WeatherService {
    geocoder: GeocodeClient,
    geoip: GeoIpClient,
    forecast: ForecastClient,
    content: Arc<NoveltyContent>,
}

impl WeatherService {
    #[must_use]
    pub fn new(
        geocoder: GeocodeClient,
        geoip: GeoIpClient,
        forecast: ForecastClient,
        content: NoveltyContent,
    ) -> Self {
        Self {
            geocoder,
            geoip,
            forecast,
            content: Arc::new(content),
        }
    }

    pub fn from_cli(cli: &Cli, content: NoveltyContent) -> anyhow::Result<Self> {
        Ok(Self::new(
            GeocodeClient::with_base_url(&cli.geocode_url)?,
            GeoIpClient::with_base_url(&cli.geoip_url)?,
            ForecastClient::with_base_url(&cli.forecast_url)?,
            content,
        ))
    }

    /// Runs resolve, fetch, window, classify and predict in sequence.
    /// The first failing stage ends the chain.
    pub async fn lookup(&self, request: &LookupRequest) -> Result<WeatherReport, LookupFailure> {
        let location = self.resolve(request).await?;
        tracing::info!(location = %location.label, "location resolved");

        let response = self
            .forecast
            .fetch(location.coordinate)
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, timeout = err.is_timeout(), "forecast fetch failed");
                LookupFailure::Forecast(err)
            })?;

        let report = WeatherReport::build(location, &response, &self.content, &mut rand::rng());
        tracing::info!(
            category = ?report.classification.category,
            hours = report.window.len(),
            trend = ?report.trend.as_ref().and_then(TrendPrediction::summary).map(|s| s.direction),
            "report ready"
        );
        Ok(report)
    }

    pub async fn resolve(&self, request: &LookupRequest) -> Result<Location, LookupFailure> {
        match request {
            LookupRequest::City(query) => self.resolve_city(query).await,
            LookupRequest::CurrentLocation => self.geoip.detect().await.map_err(|err| {
                tracing::warn!(error = %err, "ip location lookup failed");
                LookupFailure::LocationUnavailable(err)
            }),
        }
    }

    /// Provider errors and empty results both surface as "not found".
    async fn resolve_city(&self, query: &str) -> Result<Location, LookupFailure> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LookupFailure::EmptyCity);
        }

        match self.geocoder.resolve(query).await {
            Ok(GeocodeResolution::Selected(location)) => Ok(location),
            Ok(GeocodeResolution::NotFound(query)) => {
                tracing::info!(%query, "no geocoding match");
                Err(LookupFailure::CityNotFound {
                    query,
                    detail: None,
                })
            }
            Err(err) => {
                tracing::warn!(%query, error = %err, "geocoding failed");
                Err(LookupFailure::CityNotFound {
                    query: query.to_string(),
                    detail: Some(err.to_string()),
                })
            }
        }
    }
}
