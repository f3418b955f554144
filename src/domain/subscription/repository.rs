//! Subscription repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Subscription;
use crate::domain::repositories::CrudRepository;
use crate::shared::errors::DomainResult;

#[async_trait]
pub trait SubscriptionRepository: CrudRepository<Subscription> {
    async fn find_by_hashed_id(&self, hashed_id: &str) -> DomainResult<Option<Subscription>>;
    async fn find_all_by_retail_customer(
        &self,
        retail_customer_id: Uuid,
    ) -> DomainResult<Vec<Subscription>>;
}
