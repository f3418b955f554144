//! Reference data repository interfaces

use super::model::{ServiceDeliveryPoint, TimeConfiguration};
use crate::domain::repositories::CrudRepository;

pub trait TimeConfigurationRepository: CrudRepository<TimeConfiguration> {}

pub trait ServiceDeliveryPointRepository: CrudRepository<ServiceDeliveryPoint> {}
