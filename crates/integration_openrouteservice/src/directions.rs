//! openrouteservice directions client
//!
//! Computes the route between two coordinates via
//! `POST /v2/directions/{profile}` and reduces it to distance and duration.

use async_trait::async_trait;
use domain::{GeoLocation, RouteSummary};
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

use crate::config::OpenRouteServiceConfig;
use crate::error::OrsError;
use crate::http::{build_client, check_status, map_send_error};
use crate::models::{DirectionsRequest, DirectionsResponse};

/// Trait for routing clients
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Distance and duration of the best route from `origin` to `destination`
    async fn route(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
    ) -> Result<RouteSummary, OrsError>;
}

/// Directions client for the openrouteservice routing API
pub struct OrsDirectionsClient {
    client: Client,
    config: OpenRouteServiceConfig,
    api_key: SecretString,
}

impl std::fmt::Debug for OrsDirectionsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrsDirectionsClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl OrsDirectionsClient {
    /// Create a new directions client
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

    /// Reduce a directions response to the summary of its first route
    fn parse_directions_response(
        body: &str,
        origin: &GeoLocation,
        destination: &GeoLocation,
    ) -> Result<RouteSummary, OrsError> {
        let parsed: DirectionsResponse =
            serde_json::from_str(body).map_err(|e| OrsError::ParseError(e.to_string()))?;

        let route = parsed
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| no_route(origin, destination))?;

        // openrouteservice drops both totals when origin and destination coincide
        let summary = route.summary;
        let (distance, duration) = match (summary.distance, summary.duration) {
            (Some(distance), Some(duration)) => (distance, duration),
            (None, None) => (0.0, 0.0),
            _ => {
                return Err(OrsError::ParseError(
                    "Route summary is missing distance or duration".to_string(),
                ));
            },
        };

        RouteSummary::new(distance, duration).map_err(|e| OrsError::ParseError(e.to_string()))
    }
}

fn no_route(origin: &GeoLocation, destination: &GeoLocation) -> OrsError {
    OrsError::NoRouteFound {
        from: origin.to_string(),
        to: destination.to_string(),
    }
}

#[async_trait]
impl DirectionsClient for OrsDirectionsClient {
    #[instrument(skip(self), fields(from = %origin, to = %destination))]
    async fn route(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
    ) -> Result<RouteSummary, OrsError> {
        let url = format!(
            "{}/v2/directions/{}",
            self.config.base(),
            self.config.profile
        );
        let body = DirectionsRequest {
            coordinates: [origin.to_lon_lat(), destination.to_lon_lat()],
        };

        debug!(%url, "Requesting route");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| map_send_error(&e, self.config.timeout_secs))?;

        let response = check_status(response, |message| {
            if let Some(message) = message {
                warn!(%message, "Routing service could not route");
            }
            no_route(origin, destination)
        })
        .await?;

        let text = response
            .text()
            .await
            .map_err(|e| OrsError::ParseError(e.to_string()))?;

        let summary = Self::parse_directions_response(&text, origin, destination)?;
        debug!(
            distance_m = summary.distance_meters(),
            duration_s = summary.duration_seconds(),
            "Route found"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zurich() -> GeoLocation {
        GeoLocation::new(47.3769, 8.5417).unwrap()
    }

    fn bern() -> GeoLocation {
        GeoLocation::new(46.948, 7.4474).unwrap()
    }

    #[test]
    fn test_parse_first_route() {
        let json = r#"{
            "routes": [
                { "summary": { "distance": 125340.2, "duration": 5432.1 } },
                { "summary": { "distance": 130000.0, "duration": 6000.0 } }
            ]
        }"#;
        let route = OrsDirectionsClient::parse_directions_response(json, &zurich(), &bern()).unwrap();
        assert!((route.distance_km() - 125.34).abs() < 1e-9);
        assert!((route.duration_minutes() - 90.5).abs() < 1e-9);
    }

    #[test]
    fn test_parse_no_routes() {
        let err = OrsDirectionsClient::parse_directions_response(r#"{"routes":[]}"#, &zurich(), &bern())
            .unwrap_err();
        assert!(matches!(err, OrsError::NoRouteFound { .. }));
    }

    #[test]
    fn test_parse_zero_length_route() {
        let json = r#"{"routes":[{"summary":{}}]}"#;
        let route = OrsDirectionsClient::parse_directions_response(json, &bern(), &bern()).unwrap();
        assert!(route.distance_meters().abs() < f64::EPSILON);
        assert!(route.duration_seconds().abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_partial_summary() {
        let json = r#"{"routes":[{"summary":{"distance":100.0}}]}"#;
        let err = OrsDirectionsClient::parse_directions_response(json, &zurich(), &bern())
            .unwrap_err();
        assert!(matches!(err, OrsError::ParseError(_)));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(OrsDirectionsClient::parse_directions_response("not json", &zurich(), &bern()).is_err());
    }

    #[test]
    fn test_parse_negative_distance() {
        let json = r#"{"routes":[{"summary":{"distance":-1.0,"duration":10.0}}]}"#;
        assert!(OrsDirectionsClient::parse_directions_response(json, &zurich(), &bern()).is_err());
    }
}
