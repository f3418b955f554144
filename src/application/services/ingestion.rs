//! Batch ingestion of ESPI resources
//!
//! Resources arrive hydrated (ids already derived from their natural keys)
//! and are saved aggregate by aggregate in foreign-key order, so a feed can
//! be replayed: the second run overwrites the rows the first one wrote.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::domain::customer::{
    Customer, CustomerAccount, CustomerAgreement, EndDevice, ServiceLocation, ServiceSupplier,
};
use crate::domain::{
    ApplicationInformation, Authorization, DomainResult, ReadingType, RepositoryProvider,
    RetailCustomer, ServiceDeliveryPoint, Subscription, TimeConfiguration, UsagePoint,
};

/// Everything one feed delivers. Empty collections are skipped.
#[derive(Debug, Clone, Default)]
pub struct IngestionBatch {
    pub retail_customers: Vec<RetailCustomer>,
    pub reading_types: Vec<ReadingType>,
    pub time_configurations: Vec<TimeConfiguration>,
    pub service_delivery_points: Vec<ServiceDeliveryPoint>,
    pub application_information: Vec<ApplicationInformation>,
    pub authorizations: Vec<Authorization>,
    pub usage_points: Vec<UsagePoint>,
    pub subscriptions: Vec<Subscription>,
    pub customers: Vec<Customer>,
    pub service_suppliers: Vec<ServiceSupplier>,
    pub customer_accounts: Vec<CustomerAccount>,
    pub customer_agreements: Vec<CustomerAgreement>,
    pub service_locations: Vec<ServiceLocation>,
    pub end_devices: Vec<EndDevice>,
}

impl IngestionBatch {
    pub fn is_empty(&self) -> bool {
        self.counts() == StoreCounts::default()
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            retail_customers: self.retail_customers.len() as u64,
            reading_types: self.reading_types.len() as u64,
            time_configurations: self.time_configurations.len() as u64,
            service_delivery_points: self.service_delivery_points.len() as u64,
            application_information: self.application_information.len() as u64,
            authorizations: self.authorizations.len() as u64,
            usage_points: self.usage_points.len() as u64,
            subscriptions: self.subscriptions.len() as u64,
            customers: self.customers.len() as u64,
            service_suppliers: self.service_suppliers.len() as u64,
            customer_accounts: self.customer_accounts.len() as u64,
            customer_agreements: self.customer_agreements.len() as u64,
            service_locations: self.service_locations.len() as u64,
            end_devices: self.end_devices.len() as u64,
        }
    }
}

/// Number of aggregate roots per repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub retail_customers: u64,
    pub reading_types: u64,
    pub time_configurations: u64,
    pub service_delivery_points: u64,
    pub application_information: u64,
    pub authorizations: u64,
    pub usage_points: u64,
    pub subscriptions: u64,
    pub customers: u64,
    pub service_suppliers: u64,
    pub customer_accounts: u64,
    pub customer_agreements: u64,
    pub service_locations: u64,
    pub end_devices: u64,
}

impl StoreCounts {
    pub fn total(&self) -> u64 {
        self.retail_customers
            + self.reading_types
            + self.time_configurations
            + self.service_delivery_points
            + self.application_information
            + self.authorizations
            + self.usage_points
            + self.subscriptions
            + self.customers
            + self.service_suppliers
            + self.customer_accounts
            + self.customer_agreements
            + self.service_locations
            + self.end_devices
    }
}

/// Saves and purges whole feeds through the repository provider.
pub struct IngestionService {
    repos: Arc<dyn RepositoryProvider>,
}

impl IngestionService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Save every aggregate of `batch`, referenced records first.
    ///
    /// Each repository call is its own transaction. A failure stops the
    /// run; aggregates saved before it stay saved.
    pub async fn ingest(&self, batch: IngestionBatch) -> DomainResult<StoreCounts> {
        let counts = batch.counts();
        let r = &self.repos;

        if !batch.retail_customers.is_empty() {
            r.retail_customers().save_all(batch.retail_customers).await?;
        }
        if !batch.reading_types.is_empty() {
            r.reading_types().save_all(batch.reading_types).await?;
        }
        if !batch.time_configurations.is_empty() {
            r.time_configurations()
                .save_all(batch.time_configurations)
                .await?;
        }
        if !batch.service_delivery_points.is_empty() {
            r.service_delivery_points()
                .save_all(batch.service_delivery_points)
                .await?;
        }
        if !batch.application_information.is_empty() {
            r.application_information()
                .save_all(batch.application_information)
                .await?;
        }
        if !batch.authorizations.is_empty() {
            r.authorizations().save_all(batch.authorizations).await?;
        }
        if !batch.usage_points.is_empty() {
            r.usage_points().save_all(batch.usage_points).await?;
        }
        if !batch.subscriptions.is_empty() {
            r.subscriptions().save_all(batch.subscriptions).await?;
        }

        if !batch.customers.is_empty() {
            r.customers().save_all(batch.customers).await?;
        }
        if !batch.service_suppliers.is_empty() {
            r.service_suppliers().save_all(batch.service_suppliers).await?;
        }
        if !batch.customer_accounts.is_empty() {
            r.customer_accounts().save_all(batch.customer_accounts).await?;
        }
        if !batch.customer_agreements.is_empty() {
            r.customer_agreements()
                .save_all(batch.customer_agreements)
                .await?;
        }
        if !batch.service_locations.is_empty() {
            r.service_locations().save_all(batch.service_locations).await?;
        }
        if !batch.end_devices.is_empty() {
            r.end_devices().save_all(batch.end_devices).await?;
        }

        info!(total = counts.total(), "Batch ingested");
        Ok(counts)
    }

    /// Delete everything, dependents first. Returns what was removed.
    pub async fn purge(&self) -> DomainResult<StoreCounts> {
        let r = &self.repos;
        let counts = StoreCounts {
            subscriptions: r.subscriptions().delete_all().await?,
            usage_points: r.usage_points().delete_all().await?,
            authorizations: r.authorizations().delete_all().await?,
            application_information: r.application_information().delete_all().await?,
            retail_customers: r.retail_customers().delete_all().await?,
            service_delivery_points: r.service_delivery_points().delete_all().await?,
            time_configurations: r.time_configurations().delete_all().await?,
            reading_types: r.reading_types().delete_all().await?,
            end_devices: r.end_devices().delete_all().await?,
            service_locations: r.service_locations().delete_all().await?,
            customer_agreements: r.customer_agreements().delete_all().await?,
            customer_accounts: r.customer_accounts().delete_all().await?,
            service_suppliers: r.service_suppliers().delete_all().await?,
            customers: r.customers().delete_all().await?,
        };
        info!(total = counts.total(), "Store purged");
        Ok(counts)
    }

    /// Current row counts of every aggregate root.
    pub async fn counts(&self) -> DomainResult<StoreCounts> {
        let r = &self.repos;
        Ok(StoreCounts {
            retail_customers: r.retail_customers().count().await?,
            reading_types: r.reading_types().count().await?,
            time_configurations: r.time_configurations().count().await?,
            service_delivery_points: r.service_delivery_points().count().await?,
            application_information: r.application_information().count().await?,
            authorizations: r.authorizations().count().await?,
            usage_points: r.usage_points().count().await?,
            subscriptions: r.subscriptions().count().await?,
            customers: r.customers().count().await?,
            service_suppliers: r.service_suppliers().count().await?,
            customer_accounts: r.customer_accounts().count().await?,
            customer_agreements: r.customer_agreements().count().await?,
            service_locations: r.service_locations().count().await?,
            end_devices: r.end_devices().count().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    use super::*;
    use crate::domain::kinds::GrantType;
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::SeaOrmRepositoryProvider;
    use crate::domain::usage_point::{IntervalBlock, IntervalReading, MeterReading};

    const BASE: &str = "https://dc.example/espi/1_1/resource";

    async fn service() -> IngestionService {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        IngestionService::new(Arc::new(SeaOrmRepositoryProvider::new(db)))
    }

    fn feed() -> IngestionBatch {
        let rc = RetailCustomer::new(&format!("{BASE}/RetailCustomer/1"), "grace");
        let rt = ReadingType::interval_energy(&format!("{BASE}/ReadingType/1"), 3_600);
        let tc = TimeConfiguration::new(&format!("{BASE}/LocalTimeParameters/1"), -18_000);
        let app = ApplicationInformation::new(&format!("{BASE}/ApplicationInformation/1"), "tp")
            .with_grant_type(GrantType::AuthorizationCode);
        let mut auth = Authorization::granted(&format!("{BASE}/Authorization/1"), "t", "FB=1", 0, 60);
        auth.retail_customer_id = Some(rc.object.id);
        let mut up = UsagePoint::new(&format!("{BASE}/UsagePoint/1"))
            .for_retail_customer(rc.object.id)
            .with_meter_reading(
                MeterReading::new(&format!("{BASE}/MeterReading/1"))
                    .with_reading_type(rt.object.id)
                    .with_block(
                        IntervalBlock::new(&format!("{BASE}/IntervalBlock/1"), 0, 3_600)
                            .with_reading(IntervalReading::new(0, 3_600, 500)),
                    ),
            );
        up.local_time_parameters_id = Some(tc.object.id);
        let sub = Subscription::new(
            &format!("{BASE}/Subscription/1"),
            app.object.id,
            auth.object.id,
            rc.object.id,
        )
        .with_usage_point(up.object.id);
        let account = CustomerAccount::with_account_id("ACC-1");
        let agreement = CustomerAgreement::with_agreement_id("AGR-1").for_account(account.object.id);

        IngestionBatch {
            retail_customers: vec![rc],
            reading_types: vec![rt],
            time_configurations: vec![tc],
            application_information: vec![app],
            authorizations: vec![auth],
            usage_points: vec![up],
            subscriptions: vec![sub],
            customer_accounts: vec![account],
            customer_agreements: vec![agreement],
            ..IngestionBatch::default()
        }
    }

    #[test]
    fn empty_batch() {
        assert!(IngestionBatch::default().is_empty());
        assert!(!feed().is_empty());
        assert_eq!(feed().counts().total(), 9);
    }

    #[tokio::test]
    async fn replaying_a_feed_is_idempotent() {
        let service = service().await;
        let ingested = service.ingest(feed()).await.unwrap();
        service.ingest(feed()).await.unwrap();

        let stored = service.counts().await.unwrap();
        assert_eq!(stored, ingested);
    }

    #[tokio::test]
    async fn purge_removes_everything() {
        let service = service().await;
        service.ingest(feed()).await.unwrap();

        let removed = service.purge().await.unwrap();
        assert_eq!(removed.usage_points, 1);
        assert_eq!(removed.subscriptions, 1);
        assert_eq!(service.counts().await.unwrap(), StoreCounts::default());
    }

    #[tokio::test]
    async fn dangling_subscription_fails_the_run() {
        let service = service().await;
        let mut batch = feed();
        batch.application_information.clear();

        let err = service.ingest(batch).await.unwrap_err();
        assert!(err.is_storage());
        let stored = service.counts().await.unwrap();
        assert_eq!(stored.usage_points, 1);
        assert_eq!(stored.subscriptions, 0);
    }
}
