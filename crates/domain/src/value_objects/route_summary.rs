//! Driving route summary value object

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Distance and travel time of one route between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    distance_meters: f64,
    duration_seconds: f64,
}

impl RouteSummary {
    /// Create a route summary
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRoute` if either value is negative or not finite.
    pub fn new(distance_meters: f64, duration_seconds: f64) -> Result<Self, DomainError> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if !valid(distance_meters) || !valid(duration_seconds) {
            return Err(DomainError::InvalidRoute {
                distance_meters,
                duration_seconds,
            });
        }
        Ok(Self {
            distance_meters,
            duration_seconds,
        })
    }

    /// Route length in meters
    #[must_use]
    pub const fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    /// Travel time in seconds
    #[must_use]
    pub const fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    /// Route length in kilometers, rounded to 2 decimals
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        round_to(self.distance_meters / 1000.0, 2)
    }

    /// Travel time in minutes, rounded to 1 decimal
    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        round_to(self.duration_seconds / 60.0, 1)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_units_with_rounding() {
        let route = RouteSummary::new(12_345.678, 1_234.0).unwrap();
        assert!((route.distance_km() - 12.35).abs() < f64::EPSILON);
        assert!((route.duration_minutes() - 20.6).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_route_is_valid() {
        let route = RouteSummary::new(0.0, 0.0).unwrap();
        assert!(route.distance_km().abs() < f64::EPSILON);
        assert!(route.duration_minutes().abs() < f64::EPSILON);
    }

    #[test]
    fn negative_values_rejected() {
        assert!(RouteSummary::new(-1.0, 10.0).is_err());
        assert!(RouteSummary::new(10.0, -1.0).is_err());
        assert!(RouteSummary::new(f64::NAN, 10.0).is_err());
    }
}
