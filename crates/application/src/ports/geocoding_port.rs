//! Geocoding port
//!
//! Turns a free-text address into coordinates. Adapters in the
//! infrastructure layer implement this port against a geocoding API.

use async_trait::async_trait;
use domain::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for address geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve an address to coordinates
    ///
    /// Fails with `ApplicationError::Geocode` when the service finds no match
    /// or cannot be reached.
    async fn geocode(&self, address: &str) -> Result<GeoLocation, ApplicationError>;
}
