//! Output record entity - an address record plus its routing outcome

use serde::{Deserialize, Serialize};

use super::AddressRecord;
use crate::value_objects::RouteSummary;

/// Marker written for rows without a street
pub const NO_ADDRESS_MARKER: &str = "NO_ADDRESS";

/// Marker written for rows where geocoding or routing failed
pub const API_ERROR_MARKER: &str = "API_ERROR";

/// Result of processing one address row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RowOutcome {
    /// Origin and destination were geocoded and a route was found
    Routed(RouteSummary),
    /// The row has no street, nothing was sent to the API
    NoAddress,
    /// Geocoding or routing failed for this row
    Failed {
        /// Human-readable failure reason
        reason: String,
    },
}

impl RowOutcome {
    /// Marker text for rows that carry no route
    #[must_use]
    pub const fn marker(&self) -> Option<&'static str> {
        match self {
            Self::Routed(_) => None,
            Self::NoAddress => Some(NO_ADDRESS_MARKER),
            Self::Failed { .. } => Some(API_ERROR_MARKER),
        }
    }

    /// Route summary, if the row was routed
    #[must_use]
    pub const fn route(&self) -> Option<&RouteSummary> {
        match self {
            Self::Routed(route) => Some(route),
            _ => None,
        }
    }

    /// Failure reason, if the row failed
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    /// Whether the row failed
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// An input record together with what happened to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    /// The original record
    pub record: AddressRecord,
    /// The processing result
    pub outcome: RowOutcome,
}

impl OutputRecord {
    /// Create an output record
    #[must_use]
    pub const fn new(record: AddressRecord, outcome: RowOutcome) -> Self {
        Self { record, outcome }
    }

    /// Record routed successfully
    #[must_use]
    pub const fn routed(record: AddressRecord, route: RouteSummary) -> Self {
        Self::new(record, RowOutcome::Routed(route))
    }

    /// Record skipped for lack of a street
    #[must_use]
    pub const fn no_address(record: AddressRecord) -> Self {
        Self::new(record, RowOutcome::NoAddress)
    }

    /// Record that failed with the given reason
    pub fn failed(record: AddressRecord, reason: impl Into<String>) -> Self {
        Self::new(
            record,
            RowOutcome::Failed {
                reason: reason.into(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AddressRecord {
        AddressRecord::new(0, "Marktgasse 5", "3011", "Bern")
    }

    #[test]
    fn routed_has_no_marker() {
        let route = RouteSummary::new(1000.0, 60.0).unwrap();
        let out = OutputRecord::routed(record(), route);
        assert_eq!(out.outcome.marker(), None);
        assert_eq!(out.outcome.route(), Some(&route));
        assert!(out.outcome.error().is_none());
    }

    #[test]
    fn markers() {
        assert_eq!(
            OutputRecord::no_address(record()).outcome.marker(),
            Some("NO_ADDRESS")
        );
        let failed = OutputRecord::failed(record(), "Address not found");
        assert_eq!(failed.outcome.marker(), Some("API_ERROR"));
        assert_eq!(failed.outcome.error(), Some("Address not found"));
        assert!(failed.outcome.is_failed());
    }
}
