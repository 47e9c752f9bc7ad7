//! Wiring of adapters and services for one batch run

use std::sync::Arc;

use application::{ApplicationError, BatchService, DistanceService};
use secrecy::SecretString;
use tracing::debug;

use crate::adapters::{OpenRouteServiceAdapter, SpreadsheetReader, SpreadsheetWriter};
use crate::config::AppConfig;

/// Build a ready-to-run batch service from the configuration
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the HTTP clients
/// cannot be created.
pub fn build_batch_service(
    config: &AppConfig,
    api_key: SecretString,
) -> Result<BatchService, ApplicationError> {
    config.validate()?;

    let ors = Arc::new(OpenRouteServiceAdapter::new(
        &config.openrouteservice,
        api_key,
    )?);
    let distances = DistanceService::new(ors.clone(), ors, config.distance_service_config());

    debug!(
        input = %config.input.path.display(),
        output = %config.output.path.display(),
        "Batch service wired"
    );

    Ok(BatchService::new(
        Arc::new(SpreadsheetReader::from_config(&config.input)),
        Arc::new(SpreadsheetWriter::from_config(&config.output)),
        distances,
    ))
}
