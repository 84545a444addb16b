//! IP-based geolocation source.
//!
//! Queries `ipapi.co/json` for coordinates and a country code. Strictly
//! best-effort: any failure logs a warning and yields an empty
//! [`UserLocation`], never blocking the advice flow.

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use compass_core::advice::location::LocationSource;
use compass_types::ad::CountryCode;
use compass_types::advice::{GeoPoint, UserLocation};

/// Geolocation via the ipapi.co JSON endpoint.
pub struct IpApiLocationSource {
    client: reqwest::Client,
    base_url: String,
}

impl IpApiLocationSource {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: "https://ipapi.co".to_string(),
        }
    }

    /// Override the base URL (useful for testing).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    async fn fetch(&self) -> Result<UserLocation, reqwest::Error> {
        let payload: IpApiPayload = self
            .client
            .get(format!("{}/json/", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(to_location(payload))
    }
}

impl Default for IpApiLocationSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationSource for IpApiLocationSource {
    async fn locate(&self) -> UserLocation {
        match self.fetch().await {
            Ok(location) => location,
            Err(err) => {
                warn!(error = %err, "geolocation failed, proceeding without location data");
                UserLocation::default()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct IpApiPayload {
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    country_code: Option<String>,
}

fn to_location(payload: IpApiPayload) -> UserLocation {
    let point = match (payload.latitude, payload.longitude) {
        (Some(latitude), Some(longitude)) => Some(GeoPoint {
            latitude,
            longitude,
        }),
        _ => None,
    };

    let country = payload
        .country_code
        .and_then(|code| CountryCode::new(&code).ok());

    UserLocation { point, country }
}
