//! SeaORM implementations of the time configuration and service delivery
//! point repositories.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, TransactionTrait};
use tracing::{info, warn};
use uuid::Uuid;

use super::support::{active, db_err, last_per_id, link_href, link_rel, upsert_all};
use crate::domain::reference_data::{
    ServiceDeliveryPoint, ServiceDeliveryPointRepository, TimeConfiguration,
    TimeConfigurationRepository,
};
use crate::domain::repositories::CrudRepository;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{service_delivery_point, time_configuration};

// ── Conversion helpers ──────────────────────────────────────────

fn decode_rule(stored: Option<String>) -> DomainResult<Option<Vec<u8>>> {
    stored
        .map(|rule| {
            hex::decode(&rule)
                .map_err(|e| DomainError::Storage(format!("Corrupt DST rule {rule}: {e}")))
        })
        .transpose()
}

fn time_configuration_to_domain(m: time_configuration::Model) -> DomainResult<TimeConfiguration> {
    Ok(TimeConfiguration {
        dst_end_rule: decode_rule(m.dst_end_rule.clone())?,
        dst_offset: m.dst_offset,
        dst_start_rule: decode_rule(m.dst_start_rule.clone())?,
        tz_offset: m.tz_offset,
        object: identified_object!(m),
    })
}

fn time_configuration_to_entity(tc: &TimeConfiguration) -> time_configuration::Model {
    let o = &tc.object;
    time_configuration::Model {
        id: o.id,
        description: o.description.clone(),
        published: o.published,
        updated: o.updated,
        self_link_href: link_href(&o.self_link),
        self_link_rel: link_rel(&o.self_link),
        up_link_href: link_href(&o.up_link),
        up_link_rel: link_rel(&o.up_link),
        dst_end_rule: tc.dst_end_rule.as_ref().map(hex::encode),
        dst_offset: tc.dst_offset,
        dst_start_rule: tc.dst_start_rule.as_ref().map(hex::encode),
        tz_offset: tc.tz_offset,
    }
}

fn service_delivery_point_to_domain(m: service_delivery_point::Model) -> ServiceDeliveryPoint {
    ServiceDeliveryPoint {
        name: m.name.clone(),
        tariff_profile: m.tariff_profile.clone(),
        customer_agreement: m.customer_agreement.clone(),
        object: identified_object!(m),
    }
}

fn service_delivery_point_to_entity(sdp: &ServiceDeliveryPoint) -> service_delivery_point::Model {
    let o = &sdp.object;
    service_delivery_point::Model {
        id: o.id,
        description: o.description.clone(),
        published: o.published,
        updated: o.updated,
        self_link_href: link_href(&o.self_link),
        self_link_rel: link_rel(&o.self_link),
        up_link_href: link_href(&o.up_link),
        up_link_rel: link_rel(&o.up_link),
        name: sdp.name.clone(),
        tariff_profile: sdp.tariff_profile.clone(),
        customer_agreement: sdp.customer_agreement.clone(),
    }
}

// ── SeaOrmTimeConfigurationRepository ───────────────────────────

pub struct SeaOrmTimeConfigurationRepository {
    db: DatabaseConnection,
}

impl SeaOrmTimeConfigurationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<TimeConfiguration> for SeaOrmTimeConfigurationRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<TimeConfiguration>> {
        let model = time_configuration::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(time_configuration_to_domain).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<TimeConfiguration>> {
        let models = time_configuration::Entity::find()
            .order_by_asc(time_configuration::Column::SelfLinkHref)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(time_configuration_to_domain).collect()
    }

    async fn save_all(&self, items: Vec<TimeConfiguration>) -> DomainResult<Vec<TimeConfiguration>> {
        let items = last_per_id(items);
        let rows: Vec<time_configuration::ActiveModel> = items
            .iter()
            .map(|tc| active(time_configuration_to_entity(tc)))
            .collect();
        let txn = self.db.begin().await.map_err(db_err)?;
        upsert_all(&txn, rows).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        info!(count = items.len(), "Time configurations saved");
        Ok(items)
    }

    async fn delete_by_id(&self, id: Uuid) -> DomainResult<bool> {
        let result = time_configuration::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            warn!(%id, "Time configuration not found for delete");
        }
        Ok(result.rows_affected > 0)
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let result = time_configuration::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }

    async fn count(&self) -> DomainResult<u64> {
        time_configuration::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}

impl TimeConfigurationRepository for SeaOrmTimeConfigurationRepository {}

// ── SeaOrmServiceDeliveryPointRepository ────────────────────────

pub struct SeaOrmServiceDeliveryPointRepository {
    db: DatabaseConnection,
}

impl SeaOrmServiceDeliveryPointRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<ServiceDeliveryPoint> for SeaOrmServiceDeliveryPointRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ServiceDeliveryPoint>> {
        let model = service_delivery_point::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(service_delivery_point_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<ServiceDeliveryPoint>> {
        let models = service_delivery_point::Entity::find()
            .order_by_asc(service_delivery_point::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models
            .into_iter()
            .map(service_delivery_point_to_domain)
            .collect())
    }

    async fn save_all(
        &self,
        items: Vec<ServiceDeliveryPoint>,
    ) -> DomainResult<Vec<ServiceDeliveryPoint>> {
        let items = last_per_id(items);
        let rows: Vec<service_delivery_point::ActiveModel> = items
            .iter()
            .map(|sdp| active(service_delivery_point_to_entity(sdp)))
            .collect();
        let txn = self.db.begin().await.map_err(db_err)?;
        upsert_all(&txn, rows).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        info!(count = items.len(), "Service delivery points saved");
        Ok(items)
    }

    async fn delete_by_id(&self, id: Uuid) -> DomainResult<bool> {
        let result = service_delivery_point::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            warn!(%id, "Service delivery point not found for delete");
        }
        Ok(result.rows_affected > 0)
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let result = service_delivery_point::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }

    async fn count(&self) -> DomainResult<u64> {
        service_delivery_point::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}

impl ServiceDeliveryPointRepository for SeaOrmServiceDeliveryPointRepository {}
