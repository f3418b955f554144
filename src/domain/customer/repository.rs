//! Customer-domain repository interfaces

use async_trait::async_trait;

use super::asset::EndDevice;
use super::document::{CustomerAccount, CustomerAgreement};
use super::location::ServiceLocation;
use super::organisation::{Customer, ServiceSupplier};
use crate::domain::repositories::CrudRepository;
use crate::shared::errors::DomainResult;

#[async_trait]
pub trait CustomerRepository: CrudRepository<Customer> {
    async fn find_by_puc_number(&self, puc_number: &str) -> DomainResult<Option<Customer>>;
}

#[async_trait]
pub trait CustomerAccountRepository: CrudRepository<CustomerAccount> {
    async fn find_by_account_id(&self, account_id: &str)
        -> DomainResult<Option<CustomerAccount>>;
}

#[async_trait]
pub trait CustomerAgreementRepository: CrudRepository<CustomerAgreement> {
    async fn find_by_agreement_id(
        &self,
        agreement_id: &str,
    ) -> DomainResult<Option<CustomerAgreement>>;
}

pub trait EndDeviceRepository: CrudRepository<EndDevice> {}

pub trait ServiceLocationRepository: CrudRepository<ServiceLocation> {}

pub trait ServiceSupplierRepository: CrudRepository<ServiceSupplier> {}
