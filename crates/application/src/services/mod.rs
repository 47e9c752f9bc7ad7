//! Application services

mod batch_service;
mod distance_service;

pub use batch_service::BatchService;
pub use distance_service::{DistanceService, DistanceServiceConfig, FailurePolicy};
