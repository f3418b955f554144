//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::application_information::ApplicationInformationRepository;
use crate::domain::authorization::AuthorizationRepository;
use crate::domain::customer::{
    CustomerAccountRepository, CustomerAgreementRepository, CustomerRepository,
    EndDeviceRepository, ServiceLocationRepository, ServiceSupplierRepository,
};
use crate::domain::reading_type::ReadingTypeRepository;
use crate::domain::reference_data::{ServiceDeliveryPointRepository, TimeConfigurationRepository};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::retail_customer::RetailCustomerRepository;
use crate::domain::subscription::SubscriptionRepository;
use crate::domain::usage_point::UsagePointRepository;

use super::application_information_repository::SeaOrmApplicationInformationRepository;
use super::authorization_repository::SeaOrmAuthorizationRepository;
use super::customer_account_repository::{
    SeaOrmCustomerAccountRepository, SeaOrmCustomerAgreementRepository,
};
use super::customer_repository::{SeaOrmCustomerRepository, SeaOrmServiceSupplierRepository};
use super::reading_type_repository::SeaOrmReadingTypeRepository;
use super::reference_data_repository::{
    SeaOrmServiceDeliveryPointRepository, SeaOrmTimeConfigurationRepository,
};
use super::retail_customer_repository::SeaOrmRetailCustomerRepository;
use super::service_location_repository::{
    SeaOrmEndDeviceRepository, SeaOrmServiceLocationRepository,
};
use super::subscription_repository::SeaOrmSubscriptionRepository;
use super::usage_point_repository::SeaOrmUsagePointRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let up = repos.usage_points().find_by_id(id).await?;
/// let sub = repos.subscriptions().find_by_hashed_id(&hashed).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    usage_points: SeaOrmUsagePointRepository,
    reading_types: SeaOrmReadingTypeRepository,
    time_configurations: SeaOrmTimeConfigurationRepository,
    service_delivery_points: SeaOrmServiceDeliveryPointRepository,
    retail_customers: SeaOrmRetailCustomerRepository,
    application_information: SeaOrmApplicationInformationRepository,
    authorizations: SeaOrmAuthorizationRepository,
    subscriptions: SeaOrmSubscriptionRepository,
    customers: SeaOrmCustomerRepository,
    customer_accounts: SeaOrmCustomerAccountRepository,
    customer_agreements: SeaOrmCustomerAgreementRepository,
    end_devices: SeaOrmEndDeviceRepository,
    service_locations: SeaOrmServiceLocationRepository,
    service_suppliers: SeaOrmServiceSupplierRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            usage_points: SeaOrmUsagePointRepository::new(db.clone()),
            reading_types: SeaOrmReadingTypeRepository::new(db.clone()),
            time_configurations: SeaOrmTimeConfigurationRepository::new(db.clone()),
            service_delivery_points: SeaOrmServiceDeliveryPointRepository::new(db.clone()),
            retail_customers: SeaOrmRetailCustomerRepository::new(db.clone()),
            application_information: SeaOrmApplicationInformationRepository::new(db.clone()),
            authorizations: SeaOrmAuthorizationRepository::new(db.clone()),
            subscriptions: SeaOrmSubscriptionRepository::new(db.clone()),
            customers: SeaOrmCustomerRepository::new(db.clone()),
            customer_accounts: SeaOrmCustomerAccountRepository::new(db.clone()),
            customer_agreements: SeaOrmCustomerAgreementRepository::new(db.clone()),
            end_devices: SeaOrmEndDeviceRepository::new(db.clone()),
            service_locations: SeaOrmServiceLocationRepository::new(db.clone()),
            service_suppliers: SeaOrmServiceSupplierRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn usage_points(&self) -> &dyn UsagePointRepository {
        &self.usage_points
    }

    fn reading_types(&self) -> &dyn ReadingTypeRepository {
        &self.reading_types
    }

    fn time_configurations(&self) -> &dyn TimeConfigurationRepository {
        &self.time_configurations
    }

    fn service_delivery_points(&self) -> &dyn ServiceDeliveryPointRepository {
        &self.service_delivery_points
    }

    fn retail_customers(&self) -> &dyn RetailCustomerRepository {
        &self.retail_customers
    }

    fn application_information(&self) -> &dyn ApplicationInformationRepository {
        &self.application_information
    }

    fn authorizations(&self) -> &dyn AuthorizationRepository {
        &self.authorizations
    }

    fn subscriptions(&self) -> &dyn SubscriptionRepository {
        &self.subscriptions
    }

    fn customers(&self) -> &dyn CustomerRepository {
        &self.customers
    }

    fn customer_accounts(&self) -> &dyn CustomerAccountRepository {
        &self.customer_accounts
    }

    fn customer_agreements(&self) -> &dyn CustomerAgreementRepository {
        &self.customer_agreements
    }

    fn end_devices(&self) -> &dyn EndDeviceRepository {
        &self.end_devices
    }

    fn service_locations(&self) -> &dyn ServiceLocationRepository {
        &self.service_locations
    }

    fn service_suppliers(&self) -> &dyn ServiceSupplierRepository {
        &self.service_suppliers
    }
}
