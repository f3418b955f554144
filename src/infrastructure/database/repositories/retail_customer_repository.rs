//! SeaORM implementation of RetailCustomerRepository

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::subscription_repository::delete_subscriptions_where;
use super::support::{active, db_err, last_per_id, link_href, link_rel, upsert_all};
use crate::domain::repositories::CrudRepository;
use crate::domain::retail_customer::{RetailCustomer, RetailCustomerRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{retail_customer, subscription};

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(m: retail_customer::Model) -> RetailCustomer {
    RetailCustomer {
        username: m.username.clone(),
        first_name: m.first_name.clone(),
        last_name: m.last_name.clone(),
        password: m.password.clone(),
        enabled: m.enabled,
        role: m.role.clone(),
        email: m.email.clone(),
        phone: m.phone.clone(),
        account_created: m.account_created,
        last_login: m.last_login,
        account_locked: m.account_locked,
        failed_login_attempts: m.failed_login_attempts,
        object: identified_object!(m),
    }
}

fn domain_to_entity(rc: &RetailCustomer) -> retail_customer::Model {
    let o = &rc.object;
    retail_customer::Model {
        id: o.id,
        description: o.description.clone(),
        published: o.published,
        updated: o.updated,
        self_link_href: link_href(&o.self_link),
        self_link_rel: link_rel(&o.self_link),
        up_link_href: link_href(&o.up_link),
        up_link_rel: link_rel(&o.up_link),
        username: rc.username.clone(),
        first_name: rc.first_name.clone(),
        last_name: rc.last_name.clone(),
        password: rc.password.clone(),
        enabled: rc.enabled,
        role: rc.role.clone(),
        email: rc.email.clone(),
        phone: rc.phone.clone(),
        account_created: rc.account_created,
        last_login: rc.last_login,
        account_locked: rc.account_locked,
        failed_login_attempts: rc.failed_login_attempts,
    }
}

// ── SeaOrmRetailCustomerRepository ──────────────────────────────

pub struct SeaOrmRetailCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmRetailCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<RetailCustomer> for SeaOrmRetailCustomerRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<RetailCustomer>> {
        let model = retail_customer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<RetailCustomer>> {
        let models = retail_customer::Entity::find()
            .order_by_asc(retail_customer::Column::Username)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn save_all(&self, items: Vec<RetailCustomer>) -> DomainResult<Vec<RetailCustomer>> {
        let items = last_per_id(items);
        let rows: Vec<retail_customer::ActiveModel> =
            items.iter().map(|rc| active(domain_to_entity(rc))).collect();
        let txn = self.db.begin().await.map_err(db_err)?;
        upsert_all(&txn, rows).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        info!(count = items.len(), "Retail customers saved");
        Ok(items)
    }

    async fn delete_by_id(&self, id: Uuid) -> DomainResult<bool> {
        let txn = self.db.begin().await.map_err(db_err)?;
        let subscriptions =
            delete_subscriptions_where(&txn, subscription::Column::RetailCustomerId.eq(id))
                .await
                .map_err(db_err)?;
        let result = retail_customer::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        if result.rows_affected == 0 {
            warn!(%id, "Retail customer not found for delete");
            return Ok(false);
        }
        info!(%id, subscriptions, "Retail customer deleted");
        Ok(true)
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let txn = self.db.begin().await.map_err(db_err)?;
        delete_subscriptions_where(&txn, subscription::Column::RetailCustomerId.is_not_null())
            .await
            .map_err(db_err)?;
        let result = retail_customer::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        info!(count = result.rows_affected, "Retail customers deleted");
        Ok(result.rows_affected)
    }

    async fn count(&self) -> DomainResult<u64> {
        retail_customer::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}

#[async_trait]
impl RetailCustomerRepository for SeaOrmRetailCustomerRepository {
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<RetailCustomer>> {
        debug!(username, "Looking up retail customer");
        let model = retail_customer::Entity::find()
            .filter(retail_customer::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }
}
