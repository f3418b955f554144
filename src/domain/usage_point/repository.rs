//! UsagePoint repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::meter_reading::MeterReading;
use super::model::UsagePoint;
use crate::domain::repositories::CrudRepository;
use crate::shared::errors::DomainResult;

#[async_trait]
pub trait UsagePointRepository: CrudRepository<UsagePoint> {
    async fn find_all_by_retail_customer(
        &self,
        retail_customer_id: Uuid,
    ) -> DomainResult<Vec<UsagePoint>>;

    /// One meter reading with its interval data.
    async fn find_meter_reading(&self, id: Uuid) -> DomainResult<Option<MeterReading>>;
}
