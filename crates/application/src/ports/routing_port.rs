//! Routing port
//!
//! Computes distance and travel time between two coordinates.

use async_trait::async_trait;
use domain::{GeoLocation, RouteSummary};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for point-to-point routing
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Route from `origin` to `destination`
    ///
    /// Fails with `ApplicationError::Route` when no route exists or the
    /// service cannot be reached.
    async fn route(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
    ) -> Result<RouteSummary, ApplicationError>;
}
