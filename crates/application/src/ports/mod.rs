//! Ports - interfaces the application layer needs from the outside world

mod geocoding_port;
mod routing_port;
mod sheet_ports;

pub use geocoding_port::GeocodingPort;
pub use routing_port::RoutingPort;
pub use sheet_ports::{AddressSourcePort, ReportSinkPort};

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
#[cfg(test)]
pub use routing_port::MockRoutingPort;
#[cfg(test)]
pub use sheet_ports::{MockAddressSourcePort, MockReportSinkPort};
