//! Value Objects - Immutable, identity-less domain primitives

mod cell_value;
mod geo_location;
mod route_summary;

pub use cell_value::CellValue;
pub use geo_location::GeoLocation;
pub use route_summary::RouteSummary;
