use reqwest::Client;
use serde::Deserialize;

use super::{get_json, http_client};
use crate::{
    domain::weather::{Coordinate, Location},
    error::LookupError,
};

pub const GEOIP_URL: &str = "http://ip-api.com/json/";
const SERVICE: &str = "geoip";
const FIELDS: &str = "status,message,country,regionName,city,lat,lon";
const SUCCESS: &str = "success";

#[derive(Debug, Clone)]
pub struct GeoIpClient {
    client: Client,
    base_url: String,
}

impl GeoIpClient {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_base_url(GEOIP_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            client: http_client()?,
            base_url: base_url.into(),
        })
    }

    /// Locates the caller by public IP address.
    pub async fn detect(&self) -> Result<Location, LookupError> {
        tracing::debug!(url = %self.base_url, "geoip request");
        let request = self.client.get(&self.base_url).query(&[("fields", FIELDS)]);
        let payload: IpApiResponse = get_json(request, SERVICE).await?;
        payload.into_location()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IpApiResponse {
    status: String,
    message: Option<String>,
    country: Option<String>,
    region_name: Option<String>,
    city: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl IpApiResponse {
    fn into_location(self) -> Result<Location, LookupError> {
        if self.status != SUCCESS {
            return Err(LookupError::Rejected {
                service: SERVICE,
                message: self.message.filter(|m| !m.is_empty()),
            });
        }

        let missing = |field| LookupError::MissingField {
            service: SERVICE,
            field,
        };
        let lat = self.lat.ok_or_else(|| missing("lat"))?;
        let lon = self.lon.ok_or_else(|| missing("lon"))?;
        let city = self.city.ok_or_else(|| missing("city"))?;
        let country = self.country.unwrap_or_default();

        Ok(Location::from_ip_lookup(
            Coordinate::new(lat, lon),
            &city,
            self.region_name.as_deref(),
            &country,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> IpApiResponse {
        serde_json::from_str(body).expect("decode")
    }

    #[test]
    fn success_builds_city_region_country_label() {
        let location = decode(
            r#"{"status":"success","country":"Canada","regionName":"Quebec","city":"Montreal","lat":45.5,"lon":-73.6}"#,
        )
        .into_location()
        .expect("location");

        assert_eq!(location.label, "Montreal, Quebec, Canada");
        assert_eq!(location.coordinate, Coordinate::new(45.5, -73.6));
    }

    #[test]
    fn failure_status_carries_provider_message() {
        let err = decode(r#"{"status":"fail","message":"private range"}"#)
            .into_location()
            .expect_err("rejected");

        match err {
            LookupError::Rejected { message, .. } => {
                assert_eq!(message.as_deref(), Some("private range"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn success_without_coordinates_is_incomplete() {
        let err = decode(r#"{"status":"success","city":"Nowhere","country":"X"}"#)
            .into_location()
            .expect_err("incomplete");
        assert!(matches!(
            err,
            LookupError::MissingField { field: "lat", .. }
        ));
    }
}
