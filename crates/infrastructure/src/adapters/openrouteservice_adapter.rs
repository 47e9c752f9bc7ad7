//! openrouteservice adapter - Implements GeocodingPort and RoutingPort

use application::error::ApplicationError;
use application::ports::{GeocodingPort, RoutingPort};
use async_trait::async_trait;
use domain::{GeoLocation, RouteSummary};
use integration_openrouteservice::{
    DirectionsClient, GeocodingClient, OpenRouteServiceConfig, OrsDirectionsClient, OrsError,
    OrsGeocodingClient,
};
use secrecy::SecretString;
use tracing::{instrument, warn};

/// Adapter for the openrouteservice geocoding and directions APIs
pub struct OpenRouteServiceAdapter {
    geocoding_client: OrsGeocodingClient,
    directions_client: OrsDirectionsClient,
}

impl std::fmt::Debug for OpenRouteServiceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouteServiceAdapter")
            .field("geocoding_client", &"OrsGeocodingClient")
            .field("directions_client", &"OrsDirectionsClient")
            .finish()
    }
}

impl OpenRouteServiceAdapter {
    /// Create a new adapter sharing one API key between both clients
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP clients
    /// fail to initialize.
    pub fn new(
        config: &OpenRouteServiceConfig,
        api_key: SecretString,
    ) -> Result<Self, ApplicationError> {
        let geocoding_client =
            OrsGeocodingClient::new(config, api_key.clone()).map_err(map_config_error)?;
        let directions_client =
            OrsDirectionsClient::new(config, api_key).map_err(map_config_error)?;

        Ok(Self {
            geocoding_client,
            directions_client,
        })
    }
}

fn map_config_error(e: OrsError) -> ApplicationError {
    ApplicationError::Configuration(e.to_string())
}

fn log_rejection(e: &OrsError) {
    match e {
        OrsError::Unauthorized(_) => warn!("openrouteservice rejected the API key"),
        OrsError::RateLimitExceeded { retry_after_secs } => {
            warn!(?retry_after_secs, "openrouteservice rate limit exceeded");
        },
        _ => {},
    }
}

#[async_trait]
impl GeocodingPort for OpenRouteServiceAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<GeoLocation, ApplicationError> {
        self.geocoding_client.geocode(address).await.map_err(|e| {
            log_rejection(&e);
            ApplicationError::Geocode(e.to_string())
        })
    }
}

#[async_trait]
impl RoutingPort for OpenRouteServiceAdapter {
    #[instrument(skip(self), fields(from = %origin, to = %destination))]
    async fn route(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
    ) -> Result<RouteSummary, ApplicationError> {
        self.directions_client
            .route(origin, destination)
            .await
            .map_err(|e| {
                log_rejection(&e);
                ApplicationError::Route(e.to_string())
            })
    }
}
