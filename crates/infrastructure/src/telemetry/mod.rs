//! Logging setup
//!
//! Installs a `tracing` subscriber writing to stderr, so stdout stays free
//! for the result lines of the CLI.

mod logging;

pub use logging::{TelemetryError, default_filter, init_logging};
