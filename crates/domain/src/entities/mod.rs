//! Domain Entities - Records flowing through a distance batch

mod address_record;
mod output_record;
mod sheet;

pub use address_record::AddressRecord;
pub use output_record::{API_ERROR_MARKER, NO_ADDRESS_MARKER, OutputRecord, RowOutcome};
pub use sheet::{AddressSheet, BatchSummary, DistanceReport};
