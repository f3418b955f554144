//! SeaORM implementation of AuthorizationRepository

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::support::{active, db_err, interval, last_per_id, link_href, link_rel, upsert_all};
use crate::domain::authorization::{Authorization, AuthorizationRepository};
use crate::domain::kinds::{AuthorizationStatus, GrantType, OAuthError, ResponseType, TokenType};
use crate::domain::repositories::CrudRepository;
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::authorization;

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(m: authorization::Model) -> DomainResult<Authorization> {
    Ok(Authorization {
        authorized_period: interval(m.authorized_period_start, m.authorized_period_duration),
        published_period: interval(m.published_period_start, m.published_period_duration),
        access_token: m.access_token.clone(),
        refresh_token: m.refresh_token.clone(),
        authorization_uri: m.authorization_uri.clone(),
        resource_uri: m.resource_uri.clone(),
        customer_resource_uri: m.customer_resource_uri.clone(),
        scope: m.scope.clone(),
        state: m.state.clone(),
        status: m.status.map(AuthorizationStatus::from_code).transpose()?,
        expires_in: m.expires_in,
        grant_type: m.grant_type.as_deref().map(GrantType::from_code).transpose()?,
        response_type: m
            .response_type
            .as_deref()
            .map(ResponseType::from_code)
            .transpose()?,
        token_type: m.token_type.as_deref().map(TokenType::from_code).transpose()?,
        error: m.error.as_deref().map(OAuthError::from_code).transpose()?,
        error_description: m.error_description.clone(),
        error_uri: m.error_uri.clone(),
        third_party: m.third_party.clone(),
        code: m.code.clone(),
        application_information_id: m.application_information_id,
        retail_customer_id: m.retail_customer_id,
        object: identified_object!(m),
    })
}

fn domain_to_entity(a: &Authorization) -> authorization::Model {
    let o = &a.object;
    authorization::Model {
        id: o.id,
        description: o.description.clone(),
        published: o.published,
        updated: o.updated,
        self_link_href: link_href(&o.self_link),
        self_link_rel: link_rel(&o.self_link),
        up_link_href: link_href(&o.up_link),
        up_link_rel: link_rel(&o.up_link),
        authorized_period_start: a.authorized_period.start,
        authorized_period_duration: a.authorized_period.duration,
        published_period_start: a.published_period.start,
        published_period_duration: a.published_period.duration,
        access_token: a.access_token.clone(),
        refresh_token: a.refresh_token.clone(),
        authorization_uri: a.authorization_uri.clone(),
        resource_uri: a.resource_uri.clone(),
        customer_resource_uri: a.customer_resource_uri.clone(),
        scope: a.scope.clone(),
        state: a.state.clone(),
        status: a.status.map(|k| k.code()),
        expires_in: a.expires_in,
        grant_type: a.grant_type.map(|k| k.code().to_string()),
        response_type: a.response_type.map(|k| k.code().to_string()),
        token_type: a.token_type.map(|k| k.code().to_string()),
        error: a.error.map(|k| k.code().to_string()),
        error_description: a.error_description.clone(),
        error_uri: a.error_uri.clone(),
        third_party: a.third_party.clone(),
        code: a.code.clone(),
        application_information_id: a.application_information_id,
        retail_customer_id: a.retail_customer_id,
    }
}

// ── SeaOrmAuthorizationRepository ───────────────────────────────

pub struct SeaOrmAuthorizationRepository {
    db: DatabaseConnection,
}

impl SeaOrmAuthorizationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<Authorization> for SeaOrmAuthorizationRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Authorization>> {
        let model = authorization::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(entity_to_domain).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Authorization>> {
        let models = authorization::Entity::find()
            .order_by_asc(authorization::Column::SelfLinkHref)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(entity_to_domain).collect()
    }

    async fn save_all(&self, items: Vec<Authorization>) -> DomainResult<Vec<Authorization>> {
        let items = last_per_id(items);
        let rows: Vec<authorization::ActiveModel> =
            items.iter().map(|a| active(domain_to_entity(a))).collect();
        let txn = self.db.begin().await.map_err(db_err)?;
        upsert_all(&txn, rows).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        info!(count = items.len(), "Authorizations saved");
        Ok(items)
    }

    /// Fails while a subscription still refers to the authorization.
    async fn delete_by_id(&self, id: Uuid) -> DomainResult<bool> {
        let result = authorization::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            warn!(%id, "Authorization not found for delete");
        }
        Ok(result.rows_affected > 0)
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let result = authorization::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }

    async fn count(&self) -> DomainResult<u64> {
        authorization::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}

#[async_trait]
impl AuthorizationRepository for SeaOrmAuthorizationRepository {
    async fn find_by_access_token(&self, access_token: &str) -> DomainResult<Option<Authorization>> {
        debug!("Looking up authorization by access token");
        let model = authorization::Entity::find()
            .filter(authorization::Column::AccessToken.eq(access_token))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(entity_to_domain).transpose()
    }

    async fn find_all_by_retail_customer(
        &self,
        retail_customer_id: Uuid,
    ) -> DomainResult<Vec<Authorization>> {
        let models = authorization::Entity::find()
            .filter(authorization::Column::RetailCustomerId.eq(retail_customer_id))
            .order_by_asc(authorization::Column::SelfLinkHref)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(entity_to_domain).collect()
    }
}
