//! SeaORM implementation of SubscriptionRepository

use std::collections::BTreeSet;

use async_trait::async_trait;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::support::{
    active, active_serial, db_err, delete_in, find_in, group_by, insert_all, last_per_id, link_href,
    link_rel, upsert_all,
};
use crate::domain::repositories::CrudRepository;
use crate::domain::subscription::{Subscription, SubscriptionRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{subscription, subscription_usage_point};

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(m: subscription::Model, usage_point_ids: BTreeSet<Uuid>) -> Subscription {
    Subscription {
        hashed_id: m.hashed_id.clone(),
        last_update: m.last_update,
        application_information_id: m.application_information_id,
        authorization_id: m.authorization_id,
        retail_customer_id: m.retail_customer_id,
        usage_point_ids,
        object: identified_object!(m),
    }
}

fn domain_to_entity(s: &Subscription) -> subscription::Model {
    let o = &s.object;
    subscription::Model {
        id: o.id,
        description: o.description.clone(),
        published: o.published,
        updated: o.updated,
        self_link_href: link_href(&o.self_link),
        self_link_rel: link_rel(&o.self_link),
        up_link_href: link_href(&o.up_link),
        up_link_rel: link_rel(&o.up_link),
        hashed_id: s.hashed_id.clone(),
        last_update: s.last_update,
        application_information_id: s.application_information_id,
        authorization_id: s.authorization_id,
        retail_customer_id: s.retail_customer_id,
    }
}

async fn hydrate<C: ConnectionTrait>(
    conn: &C,
    models: Vec<subscription::Model>,
) -> Result<Vec<Subscription>, DbErr> {
    let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
    let links = find_in::<subscription_usage_point::Entity, _, _>(
        conn,
        subscription_usage_point::Column::SubscriptionId,
        &ids,
        subscription_usage_point::Column::Id,
    )
    .await?;
    let mut links = group_by(links, |l| l.subscription_id);
    Ok(models
        .into_iter()
        .map(|m| {
            let usage_points = links
                .remove(&m.id)
                .unwrap_or_default()
                .into_iter()
                .map(|l| l.usage_point_id)
                .collect();
            entity_to_domain(m, usage_points)
        })
        .collect())
}

/// Delete the subscriptions matching `condition` together with their
/// usage point links. Returns the number of subscriptions removed.
pub(crate) async fn delete_subscriptions_where<C: ConnectionTrait>(
    conn: &C,
    condition: SimpleExpr,
) -> Result<u64, DbErr> {
    let ids: Vec<Uuid> = subscription::Entity::find()
        .select_only()
        .column(subscription::Column::Id)
        .filter(condition)
        .into_tuple()
        .all(conn)
        .await?;
    if ids.is_empty() {
        return Ok(0);
    }
    subscription_usage_point::Entity::delete_many()
        .filter(subscription_usage_point::Column::SubscriptionId.is_in(ids.clone()))
        .exec(conn)
        .await?;
    let result = subscription::Entity::delete_many()
        .filter(subscription::Column::Id.is_in(ids))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

// ── SeaOrmSubscriptionRepository ────────────────────────────────

pub struct SeaOrmSubscriptionRepository {
    db: DatabaseConnection,
}

impl SeaOrmSubscriptionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<Subscription> for SeaOrmSubscriptionRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Subscription>> {
        let model = subscription::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(model) = model else {
            return Ok(None);
        };
        Ok(hydrate(&self.db, vec![model]).await.map_err(db_err)?.pop())
    }

    async fn find_all(&self) -> DomainResult<Vec<Subscription>> {
        let models = subscription::Entity::find()
            .order_by_asc(subscription::Column::HashedId)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        hydrate(&self.db, models).await.map_err(db_err)
    }

    async fn save_all(&self, items: Vec<Subscription>) -> DomainResult<Vec<Subscription>> {
        let items = last_per_id(items);
        let ids: Vec<Uuid> = items.iter().map(|s| s.object.id).collect();
        let rows: Vec<subscription::ActiveModel> =
            items.iter().map(|s| active(domain_to_entity(s))).collect();
        let links: Vec<subscription_usage_point::ActiveModel> = items
            .iter()
            .flat_map(|s| {
                s.usage_point_ids.iter().map(move |usage_point_id| {
                    active_serial(subscription_usage_point::Model {
                        id: 0,
                        subscription_id: s.object.id,
                        usage_point_id: *usage_point_id,
                    })
                })
            })
            .collect();

        let txn = self.db.begin().await.map_err(db_err)?;
        upsert_all(&txn, rows).await.map_err(db_err)?;
        delete_in::<subscription_usage_point::Entity, _, _>(
            &txn,
            subscription_usage_point::Column::SubscriptionId,
            &ids,
        )
        .await
        .map_err(db_err)?;
        insert_all(&txn, links).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        info!(count = items.len(), "Subscriptions saved");
        Ok(items)
    }

    async fn delete_by_id(&self, id: Uuid) -> DomainResult<bool> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let removed = delete_subscriptions_where(&txn, subscription::Column::Id.eq(id))
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        if removed == 0 {
            warn!(%id, "Subscription not found for delete");
        }
        Ok(removed > 0)
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let txn = self.db.begin().await.map_err(db_err)?;
        subscription_usage_point::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        let result = subscription::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        info!(count = result.rows_affected, "Subscriptions deleted");
        Ok(result.rows_affected)
    }

    async fn count(&self) -> DomainResult<u64> {
        subscription::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}

#[async_trait]
impl SubscriptionRepository for SeaOrmSubscriptionRepository {
    async fn find_by_hashed_id(&self, hashed_id: &str) -> DomainResult<Option<Subscription>> {
        debug!(hashed_id, "Looking up subscription");
        let model = subscription::Entity::find()
            .filter(subscription::Column::HashedId.eq(hashed_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(model) = model else {
            return Ok(None);
        };
        Ok(hydrate(&self.db, vec![model]).await.map_err(db_err)?.pop())
    }

    async fn find_all_by_retail_customer(
        &self,
        retail_customer_id: Uuid,
    ) -> DomainResult<Vec<Subscription>> {
        let models = subscription::Entity::find()
            .filter(subscription::Column::RetailCustomerId.eq(retail_customer_id))
            .order_by_asc(subscription::Column::HashedId)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        hydrate(&self.db, models).await.map_err(db_err)
    }
}
