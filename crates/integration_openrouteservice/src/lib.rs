//! openrouteservice integration for automap
//!
//! Provides address geocoding via the
//! [openrouteservice](https://openrouteservice.org) `/geocode/search` endpoint
//! and driving distance/duration via `/v2/directions/{profile}`.
//!
//! # Architecture
//!
//! [`GeocodingClient`] and [`DirectionsClient`] define the interfaces,
//! implemented by [`OrsGeocodingClient`] and [`OrsDirectionsClient`]. Both are
//! built from an [`OpenRouteServiceConfig`] and the API key, and apply an
//! explicit per-request timeout.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_openrouteservice::{
//!     DirectionsClient, GeocodingClient, OpenRouteServiceConfig, OrsDirectionsClient,
//!     OrsGeocodingClient,
//! };
//!
//! let config = OpenRouteServiceConfig::default();
//! let geocoder = OrsGeocodingClient::new(&config, api_key.clone())?;
//! let directions = OrsDirectionsClient::new(&config, api_key)?;
//!
//! let origin = geocoder.geocode("Bundesplatz 3, 3005 Bern, Switzerland").await?;
//! let destination = geocoder.geocode("Bahnhofplatz, 8001 Zürich, Switzerland").await?;
//! let route = directions.route(&origin, &destination).await?;
//! println!("{} km, {} min", route.distance_km(), route.duration_minutes());
//! ```

mod config;
mod directions;
mod error;
mod geocoding;
mod http;
mod models;

pub use config::OpenRouteServiceConfig;
pub use directions::{DirectionsClient, OrsDirectionsClient};
pub use error::OrsError;
pub use geocoding::{GeocodingClient, OrsGeocodingClient};
