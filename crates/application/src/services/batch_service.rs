//! Batch service - load, process, write

use std::{fmt, sync::Arc};

use domain::{BatchSummary, DistanceReport};
use tracing::{info, instrument};

use super::DistanceService;
use crate::{
    error::ApplicationError,
    ports::{AddressSourcePort, ReportSinkPort},
};

/// Runs one complete distance batch
///
/// The input is loaded before any network call so that a missing or
/// malformed file fails fast. The report is written only after every row
/// has been processed.
pub struct BatchService {
    source: Arc<dyn AddressSourcePort>,
    sink: Arc<dyn ReportSinkPort>,
    distances: DistanceService,
}

impl fmt::Debug for BatchService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchService")
            .field("distances", &self.distances)
            .finish_non_exhaustive()
    }
}

impl BatchService {
    /// Create a new batch service
    pub fn new(
        source: Arc<dyn AddressSourcePort>,
        sink: Arc<dyn ReportSinkPort>,
        distances: DistanceService,
    ) -> Self {
        Self {
            source,
            sink,
            distances,
        }
    }

    /// Execute the batch
    #[instrument(skip(self))]
    pub async fn run(&self) -> Result<BatchSummary, ApplicationError> {
        let sheet = self.source.load()?;
        info!(rows = sheet.len(), "Processing {} rows...", sheet.len());

        let rows = if sheet.is_empty() {
            Vec::new()
        } else {
            self.distances.process_batch(sheet.records).await?
        };

        let summary = BatchSummary::from_rows(&rows);
        self.sink.write(&DistanceReport::new(sheet.headers, rows))?;

        info!(
            total = summary.total,
            routed = summary.routed,
            no_address = summary.no_address,
            failed = summary.failed,
            "Batch finished"
        );
        Ok(summary)
    }
}
