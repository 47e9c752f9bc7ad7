//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates out of range
    #[error(
        "Invalid coordinates ({latitude}, {longitude}): latitude must be -90 to 90, longitude must be -180 to 180"
    )]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Negative or non-finite route values
    #[error("Invalid route: distance {distance_meters} m, duration {duration_seconds} s")]
    InvalidRoute {
        distance_meters: f64,
        duration_seconds: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_coordinates_message() {
        let err = DomainError::InvalidCoordinates {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert!(err.to_string().contains("91"));
        assert!(err.to_string().starts_with("Invalid coordinates"));
    }

    #[test]
    fn invalid_route_message() {
        let err = DomainError::InvalidRoute {
            distance_meters: -5.0,
            duration_seconds: 1.0,
        };
        assert_eq!(err.to_string(), "Invalid route: distance -5 m, duration 1 s");
    }
}
