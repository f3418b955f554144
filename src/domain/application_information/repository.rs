//! ApplicationInformation repository interface

use async_trait::async_trait;

use super::model::ApplicationInformation;
use crate::domain::repositories::CrudRepository;
use crate::shared::errors::DomainResult;

#[async_trait]
pub trait ApplicationInformationRepository: CrudRepository<ApplicationInformation> {
    async fn find_by_client_id(&self, client_id: &str)
        -> DomainResult<Option<ApplicationInformation>>;
}
