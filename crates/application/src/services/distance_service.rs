//! Distance service - turns address records into routed output records
//!
//! Rows are handled strictly one after another: compose the destination
//! address, geocode it, route from the origin (geocoded once per run) and
//! record the outcome. What a failed row does to the rest of the batch is
//! decided by the configured [`FailurePolicy`].

use std::{fmt, sync::Arc, time::Duration};

use domain::{AddressRecord, GeoLocation, OutputRecord, RouteSummary};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{GeocodingPort, RoutingPort},
};

/// Progress is logged every this many rows
const PROGRESS_EVERY: usize = 10;

/// What to do when geocoding or routing fails for a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Record the failure in the row and continue with the next one
    #[default]
    #[serde(alias = "skip")]
    Mark,
    /// Stop the whole run at the first failed row
    Abort,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mark => write!(f, "mark"),
            Self::Abort => write!(f, "abort"),
        }
    }
}

/// Settings of the distance service
#[derive(Debug, Clone)]
pub struct DistanceServiceConfig {
    /// The fixed starting address, sent to the geocoder as-is
    pub origin_address: String,
    /// Country appended to every destination address (empty to disable)
    pub country_hint: String,
    /// Row failure handling
    pub failure_policy: FailurePolicy,
    /// Pause after each row that called the API
    pub pause_between_rows: Duration,
}

impl DistanceServiceConfig {
    /// Create a configuration with the given origin and defaults otherwise
    pub fn new(origin_address: impl Into<String>) -> Self {
        Self {
            origin_address: origin_address.into(),
            country_hint: String::new(),
            failure_policy: FailurePolicy::default(),
            pause_between_rows: Duration::ZERO,
        }
    }

    /// Set the country hint
    #[must_use]
    pub fn with_country_hint(mut self, hint: impl Into<String>) -> Self {
        self.country_hint = hint.into();
        self
    }

    /// Set the failure policy
    #[must_use]
    pub const fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Set the pause between API rows
    #[must_use]
    pub const fn with_pause(mut self, pause: Duration) -> Self {
        self.pause_between_rows = pause;
        self
    }
}

/// Service computing origin-to-destination routes for address records
pub struct DistanceService {
    geocoder: Arc<dyn GeocodingPort>,
    router: Arc<dyn RoutingPort>,
    config: DistanceServiceConfig,
}

impl fmt::Debug for DistanceService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistanceService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DistanceService {
    /// Create a new distance service
    pub fn new(
        geocoder: Arc<dyn GeocodingPort>,
        router: Arc<dyn RoutingPort>,
        config: DistanceServiceConfig,
    ) -> Self {
        Self {
            geocoder,
            router,
            config,
        }
    }

    /// Geocode the fixed origin
    ///
    /// Called once per run; the result is reused for every row.
    #[instrument(skip(self), fields(origin = %self.config.origin_address))]
    pub async fn resolve_origin(&self) -> Result<GeoLocation, ApplicationError> {
        let address = self.config.origin_address.trim();
        if address.is_empty() {
            return Err(ApplicationError::MissingConfiguration(
                "origin address".to_string(),
            ));
        }

        let origin = self.geocoder.geocode(address).await.map_err(|e| {
            ApplicationError::OriginUnresolved {
                address: address.to_string(),
                reason: e.to_string(),
            }
        })?;

        info!(%origin, "Origin resolved");
        Ok(origin)
    }

    /// Geocode a record and route to it from `origin`
    ///
    /// Records without a street are not sent to the API; the caller turns
    /// them into `NO_ADDRESS` rows before calling this.
    #[instrument(skip(self, origin, record), fields(row = record.row_index()))]
    pub async fn route_record(
        &self,
        origin: &GeoLocation,
        record: &AddressRecord,
    ) -> Result<RouteSummary, ApplicationError> {
        let destination_text = record.full_address(&self.config.country_hint);
        debug!(destination = %destination_text, "Processing row");

        let destination = self.geocoder.geocode(&destination_text).await?;
        debug!(
            straight_line_km = origin.straight_line_km(&destination),
            "Destination geocoded"
        );

        self.router.route(origin, &destination).await
    }

    /// Process a single record into an output record
    ///
    /// Failures are always captured in the row here; the batch policy is
    /// applied by [`Self::process_all`].
    pub async fn process_record(&self, origin: &GeoLocation, record: AddressRecord) -> OutputRecord {
        if !record.has_street() {
            debug!(row = record.row_index(), "No street, skipping");
            return OutputRecord::no_address(record);
        }

        match self.route_record(origin, &record).await {
            Ok(route) => OutputRecord::routed(record, route),
            Err(e) => {
                warn!(row = record.row_index(), error = %e, "Row failed");
                OutputRecord::failed(record, e.to_string())
            },
        }
    }

    /// Resolve the origin, then process all records
    ///
    /// When the origin cannot be geocoded, [`FailurePolicy::Mark`] fails
    /// every row that has a street with the origin error and
    /// [`FailurePolicy::Abort`] ends the run with
    /// `ApplicationError::OriginUnresolved`.
    pub async fn process_batch(
        &self,
        records: Vec<AddressRecord>,
    ) -> Result<Vec<OutputRecord>, ApplicationError> {
        match self.resolve_origin().await {
            Ok(origin) => self.process_all(&origin, records).await,
            Err(e @ ApplicationError::OriginUnresolved { .. })
                if self.config.failure_policy == FailurePolicy::Mark =>
            {
                warn!(error = %e, "Origin unresolved, marking every row as failed");
                Ok(fail_all(records, &e.to_string()))
            },
            Err(e) => Err(e),
        }
    }

    /// Process all records in input order
    ///
    /// Returns exactly one output record per input record. With
    /// [`FailurePolicy::Abort`] the first failed row ends the run with
    /// `ApplicationError::RowAborted`.
    #[instrument(skip_all, fields(rows = records.len(), policy = %self.config.failure_policy))]
    pub async fn process_all(
        &self,
        origin: &GeoLocation,
        records: Vec<AddressRecord>,
    ) -> Result<Vec<OutputRecord>, ApplicationError> {
        let total = records.len();
        let mut rows = Vec::with_capacity(total);

        for (idx, record) in records.into_iter().enumerate() {
            if idx % PROGRESS_EVERY == 0 {
                info!("Row {}/{}", idx + 1, total);
            }

            let called_api = record.has_street();
            let row = self.process_record(origin, record).await;

            if self.config.failure_policy == FailurePolicy::Abort {
                if let Some(reason) = row.outcome.error() {
                    return Err(ApplicationError::RowAborted {
                        row: idx + 1,
                        reason: reason.to_string(),
                    });
                }
            }
            rows.push(row);

            if called_api && !self.config.pause_between_rows.is_zero() && idx + 1 < total {
                tokio::time::sleep(self.config.pause_between_rows).await;
            }
        }

        Ok(rows)
    }
}

fn fail_all(records: Vec<AddressRecord>, reason: &str) -> Vec<OutputRecord> {
    records
        .into_iter()
        .map(|record| {
            if record.has_street() {
                OutputRecord::failed(record, reason)
            } else {
                OutputRecord::no_address(record)
            }
        })
        .collect()
}
