//! Sheet-level aggregates: the loaded input and the report to write

use serde::{Deserialize, Serialize};

use super::{AddressRecord, OutputRecord, RowOutcome};

/// All destination rows of one input sheet, in input order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressSheet {
    /// Column names of the header row, in input order
    pub headers: Vec<String>,
    /// Data rows
    pub records: Vec<AddressRecord>,
}

impl AddressSheet {
    /// Create a sheet
    #[must_use]
    pub const fn new(headers: Vec<String>, records: Vec<AddressRecord>) -> Self {
        Self { headers, records }
    }

    /// Number of data rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the sheet has no data rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Processed rows ready to be written, one per input record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistanceReport {
    /// Column names carried over from the input sheet
    pub headers: Vec<String>,
    /// Output rows, same order as the input
    pub rows: Vec<OutputRecord>,
}

impl DistanceReport {
    /// Create a report
    #[must_use]
    pub const fn new(headers: Vec<String>, rows: Vec<OutputRecord>) -> Self {
        Self { headers, rows }
    }
}

/// Counts of how a batch went
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Rows processed
    pub total: usize,
    /// Rows with a route
    pub routed: usize,
    /// Rows skipped for lack of a street
    pub no_address: usize,
    /// Rows where geocoding or routing failed
    pub failed: usize,
}

impl BatchSummary {
    /// Tally the outcomes of a set of output rows
    #[must_use]
    pub fn from_rows(rows: &[OutputRecord]) -> Self {
        rows.iter().fold(
            Self {
                total: rows.len(),
                ..Self::default()
            },
            |mut acc, row| {
                match row.outcome {
                    RowOutcome::Routed(_) => acc.routed += 1,
                    RowOutcome::NoAddress => acc.no_address += 1,
                    RowOutcome::Failed { .. } => acc.failed += 1,
                }
                acc
            },
        )
    }
}
