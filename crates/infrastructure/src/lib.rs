//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of openrouteservice and
//! spreadsheet files, and provides configuration loading and logging setup.

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use bootstrap::build_batch_service;
pub use config::{
    API_KEY_ENV, AppConfig, InputConfig, LogFormat, OriginConfig, OutputConfig, ProcessingConfig,
    api_key_from, resolve_api_key,
};
pub use telemetry::{TelemetryError, init_logging};
