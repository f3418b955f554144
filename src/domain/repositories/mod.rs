//! Repository traits for the domain layer
//!
//! Contains:
//! - `CrudRepository` — the basic surface every aggregate exposes
//! - `RepositoryProvider` — unified access to all per-aggregate repositories

use async_trait::async_trait;
use uuid::Uuid;

use super::application_information::ApplicationInformationRepository;
use super::authorization::AuthorizationRepository;
use super::customer::{
    CustomerAccountRepository, CustomerAgreementRepository, CustomerRepository,
    EndDeviceRepository, ServiceLocationRepository, ServiceSupplierRepository,
};
use super::reading_type::ReadingTypeRepository;
use super::reference_data::{ServiceDeliveryPointRepository, TimeConfigurationRepository};
use super::retail_customer::RetailCustomerRepository;
use super::subscription::SubscriptionRepository;
use super::usage_point::UsagePointRepository;
use crate::shared::errors::{DomainError, DomainResult};

// ── CrudRepository ──────────────────────────────────────────────

/// Basic persistence surface of an aggregate.
///
/// `save_all` is an upsert keyed by each item's id: saving the same
/// natural key twice overwrites the same rows. Owned children are
/// replaced as a whole, so children missing from the saved graph are
/// deleted.
#[async_trait]
pub trait CrudRepository<T>: Send + Sync
where
    T: Send + 'static,
{
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<T>>;
    async fn find_all(&self) -> DomainResult<Vec<T>>;
    async fn save_all(&self, items: Vec<T>) -> DomainResult<Vec<T>>;
    /// Returns whether a row existed.
    async fn delete_by_id(&self, id: Uuid) -> DomainResult<bool>;
    /// Returns the number of aggregate roots removed.
    async fn delete_all(&self) -> DomainResult<u64>;
    async fn count(&self) -> DomainResult<u64>;

    async fn save(&self, item: T) -> DomainResult<T> {
        self.save_all(vec![item])
            .await?
            .pop()
            .ok_or_else(|| DomainError::Validation("save produced no result".to_string()))
    }

    async fn exists_by_id(&self, id: Uuid) -> DomainResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let up = repos.usage_points().find_by_id(id).await?;
///     let subs = repos.subscriptions().find_all_by_retail_customer(rc).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn usage_points(&self) -> &dyn UsagePointRepository;
    fn reading_types(&self) -> &dyn ReadingTypeRepository;
    fn time_configurations(&self) -> &dyn TimeConfigurationRepository;
    fn service_delivery_points(&self) -> &dyn ServiceDeliveryPointRepository;
    fn retail_customers(&self) -> &dyn RetailCustomerRepository;
    fn application_information(&self) -> &dyn ApplicationInformationRepository;
    fn authorizations(&self) -> &dyn AuthorizationRepository;
    fn subscriptions(&self) -> &dyn SubscriptionRepository;
    fn customers(&self) -> &dyn CustomerRepository;
    fn customer_accounts(&self) -> &dyn CustomerAccountRepository;
    fn customer_agreements(&self) -> &dyn CustomerAgreementRepository;
    fn end_devices(&self) -> &dyn EndDeviceRepository;
    fn service_locations(&self) -> &dyn ServiceLocationRepository;
    fn service_suppliers(&self) -> &dyn ServiceSupplierRepository;
}
