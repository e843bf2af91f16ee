use thiserror::Error;

/// Failure of a single outbound provider call.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("{service} request failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{service} returned HTTP {status}")]
    Status { service: &'static str, status: u16 },
    #[error("{service} response could not be decoded: {source}")]
    Malformed {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{service} response is missing `{field}`")]
    MissingField {
        service: &'static str,
        field: &'static str,
    },
    #[error(
        "{service} rejected the lookup: {}",
        .message.as_deref().unwrap_or("no reason given")
    )]
    Rejected {
        service: &'static str,
        message: Option<String>,
    },
}

impl LookupError {
    #[must_use]
    pub fn service(&self) -> &'static str {
        match self {
            Self::Transport { service, .. }
            | Self::Status { service, .. }
            | Self::Malformed { service, .. }
            | Self::MissingField { service, .. }
            | Self::Rejected { service, .. } => *service,
        }
    }

    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { source, .. } if source.is_timeout())
    }
}

/// Why a user action produced no report.
#[derive(Debug, Error)]
pub enum LookupFailure {
    #[error("Please enter a city name")]
    EmptyCity,
    #[error("City not found: {query}. Try adding country/state for better results.")]
    CityNotFound {
        query: String,
        detail: Option<String>,
    },
    #[error("Could not detect your location: {0}")]
    LocationUnavailable(#[source] LookupError),
    #[error("Failed to fetch weather data: {0}")]
    Forecast(#[source] LookupError),
}
