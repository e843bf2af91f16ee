pub mod forecast;
pub mod geocode;
pub mod geoip;

use std::time::Duration;

use anyhow::Context;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::LookupError;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub(crate) fn http_client() -> anyhow::Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("weather-predictor/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("building HTTP client failed")
}

/// Sends `request` once and decodes a JSON body, sorting failures into
/// transport, status and decode errors.
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
    service: &'static str,
) -> Result<T, LookupError> {
    let response = request
        .send()
        .await
        .map_err(|source| LookupError::Transport { service, source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::Status {
            service,
            status: status.as_u16(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|source| LookupError::Malformed { service, source })
}
