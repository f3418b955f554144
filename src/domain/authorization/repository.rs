//! Authorization repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Authorization;
use crate::domain::repositories::CrudRepository;
use crate::shared::errors::DomainResult;

#[async_trait]
pub trait AuthorizationRepository: CrudRepository<Authorization> {
    async fn find_by_access_token(&self, access_token: &str)
        -> DomainResult<Option<Authorization>>;
    async fn find_all_by_retail_customer(
        &self,
        retail_customer_id: Uuid,
    ) -> DomainResult<Vec<Authorization>>;
}
