//! openrouteservice geocoding client
//!
//! Converts free-form address strings to coordinates using the
//! `/geocode/search` endpoint (Pelias-based, GeoJSON responses).

use async_trait::async_trait;
use domain::GeoLocation;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use crate::config::OpenRouteServiceConfig;
use crate::error::OrsError;
use crate::http::{build_client, check_status, map_send_error};
use crate::models::GeocodeResponse;

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form address to geographic coordinates
    async fn geocode(&self, address: &str) -> Result<GeoLocation, OrsError>;
}

/// Geocoding client for the openrouteservice search API
pub struct OrsGeocodingClient {
    client: Client,
    config: OpenRouteServiceConfig,
    api_key: SecretString,
}

impl std::fmt::Debug for OrsGeocodingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrsGeocodingClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl OrsGeocodingClient {
    /// Create a new geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &OpenRouteServiceConfig, api_key: SecretString) -> Result<Self, OrsError> {
        Ok(Self {
            client: build_client(config)?,
            config: config.clone(),
            api_key,
        })
    }

    /// Pick the coordinates of the best match out of a search response
    fn parse_geocode_response(body: &str, address: &str) -> Result<GeoLocation, OrsError> {
        let parsed: GeocodeResponse =
            serde_json::from_str(body).map_err(|e| OrsError::ParseError(e.to_string()))?;

        let feature = parsed
            .features
            .into_iter()
            .next()
            .ok_or_else(|| OrsError::AddressNotFound(address.to_string()))?;

        if let Some(props) = &feature.properties {
            debug!(label = ?props.label, confidence = ?props.confidence, "Best geocoding match");
        }

        let coordinates = feature.geometry.map(|g| g.coordinates).unwrap_or_default();
        let [lon, lat, ..] = coordinates.as_slice() else {
            return Err(OrsError::ParseError(format!(
                "Missing coordinates for '{address}'"
            )));
        };

        GeoLocation::from_lon_lat(*lon, *lat).map_err(|e| OrsError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl GeocodingClient for OrsGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<GeoLocation, OrsError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(OrsError::AddressNotFound(
                "Address must not be empty".to_string(),
            ));
        }

        let url = format!("{}/geocode/search", self.config.base());
        let mut params = vec![
            ("api_key", self.api_key.expose_secret().to_string()),
            ("text", address.to_string()),
            ("size", "1".to_string()),
        ];

        if !self.config.country_filter.is_empty() {
            params.push(("boundary.country", self.config.country_filter.clone()));
        }

        debug!(%url, "Geocoding address");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| map_send_error(&e, self.config.timeout_secs))?;

        let response = check_status(response, |message| {
            OrsError::AddressNotFound(message.unwrap_or_else(|| address.to_string()))
        })
        .await?;

        let body = response
            .text()
            .await
            .map_err(|e| OrsError::ParseError(e.to_string()))?;

        let location = Self::parse_geocode_response(&body, address)?;
        debug!(%location, "Geocoded address");
        Ok(location)
    }
}
