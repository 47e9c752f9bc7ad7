//! Application layer - Use cases and orchestration
//!
//! Defines the ports the batch needs (geocoding, routing, reading and
//! writing sheets) and the services that drive a run through them.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
