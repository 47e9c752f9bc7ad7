//! Domain layer for automap
//!
//! Contains the records, coordinates and route results that flow through a
//! distance batch. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
