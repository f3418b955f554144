//! Time configurations and service delivery points.

pub mod model;
pub mod repository;

pub use model::{ServiceDeliveryPoint, TimeConfiguration};
pub use repository::{ServiceDeliveryPointRepository, TimeConfigurationRepository};
