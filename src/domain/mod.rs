pub mod application_information;
pub mod authorization;
pub mod common;
pub mod customer;
pub mod kinds;
pub mod reading_type;
pub mod reference_data;
pub mod repositories;
pub mod retail_customer;
pub mod subscription;
pub mod usage_point;

// Re-export commonly used types
pub use application_information::ApplicationInformation;
pub use authorization::Authorization;
pub use common::{DateTimeInterval, Identified, IdentifiedObject, LinkType, SummaryMeasurement};
pub use customer::{
    Customer, CustomerAccount, CustomerAgreement, EndDevice, ServiceLocation, ServiceSupplier,
};
pub use reading_type::ReadingType;
pub use reference_data::{ServiceDeliveryPoint, TimeConfiguration};
pub use repositories::{CrudRepository, RepositoryProvider};
pub use retail_customer::RetailCustomer;
pub use subscription::Subscription;
pub use usage_point::{IntervalBlock, IntervalReading, MeterReading, ReadingQuality, UsagePoint};

pub use crate::shared::errors::{DomainError, DomainResult};
