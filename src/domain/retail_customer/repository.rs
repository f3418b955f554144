//! RetailCustomer repository interface

use async_trait::async_trait;

use super::model::RetailCustomer;
use crate::domain::repositories::CrudRepository;
use crate::shared::errors::DomainResult;

#[async_trait]
pub trait RetailCustomerRepository: CrudRepository<RetailCustomer> {
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<RetailCustomer>>;
}
