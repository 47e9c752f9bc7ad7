//! Spreadsheet ports
//!
//! Reading the destination list and writing the distance report.
//! Both are plain blocking calls, a run touches each file once.

use domain::{AddressSheet, DistanceReport};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for loading the input address sheet
#[cfg_attr(test, automock)]
pub trait AddressSourcePort: Send + Sync {
    /// Load every data row, in input order
    ///
    /// Fails with `FileNotFound`, `Schema`, `UnsupportedFormat` or `InputRead`.
    fn load(&self) -> Result<AddressSheet, ApplicationError>;
}

/// Port for writing the processed report
#[cfg_attr(test, automock)]
pub trait ReportSinkPort: Send + Sync {
    /// Write one output row per report row
    ///
    /// Fails with `Write` or `UnsupportedFormat`.
    fn write(&self, report: &DistanceReport) -> Result<(), ApplicationError>;
}
