//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

#[macro_use]
mod support;

pub mod application_information_repository;
pub mod authorization_repository;
pub mod customer_account_repository;
pub mod customer_repository;
pub mod reading_type_repository;
pub mod reference_data_repository;
pub mod repository_provider;
pub mod retail_customer_repository;
pub mod service_location_repository;
pub mod subscription_repository;
pub mod usage_point_repository;

#[cfg(test)]
mod tests;

pub use repository_provider::SeaOrmRepositoryProvider;
