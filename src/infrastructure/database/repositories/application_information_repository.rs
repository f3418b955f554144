//! SeaORM implementation of ApplicationInformationRepository

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::support::{
    active, active_serial, db_err, group_by, insert_all, last_per_id, link_href, link_rel,
    upsert_all,
};
use crate::domain::application_information::{
    ApplicationInformation, ApplicationInformationRepository,
};
use crate::domain::kinds::{
    DataCustodianApplicationStatus, GrantType, ResponseType, ThirdPartyApplicationStatus,
    ThirdPartyApplicationType, ThirdPartyApplicationUse, TokenEndpointMethod,
};
use crate::domain::repositories::CrudRepository;
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{
    application_information, application_information_grant_type, application_information_scope,
};

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(
    m: application_information::Model,
    scopes: Vec<application_information_scope::Model>,
    grant_types: Vec<application_information_grant_type::Model>,
) -> DomainResult<ApplicationInformation> {
    Ok(ApplicationInformation {
        client_id: m.client_id.clone(),
        client_secret: m.client_secret.clone(),
        client_name: m.client_name.clone(),
        client_id_issued_at: m.client_id_issued_at,
        client_secret_expires_at: m.client_secret_expires_at,
        data_custodian_id: m.data_custodian_id.clone(),
        data_custodian_application_status: m
            .data_custodian_application_status
            .map(DataCustodianApplicationStatus::from_code)
            .transpose()?,
        third_party_application_description: m.third_party_application_description.clone(),
        third_party_application_status: m
            .third_party_application_status
            .map(ThirdPartyApplicationStatus::from_code)
            .transpose()?,
        third_party_application_type: m
            .third_party_application_type
            .map(ThirdPartyApplicationType::from_code)
            .transpose()?,
        third_party_application_use: m
            .third_party_application_use
            .map(ThirdPartyApplicationUse::from_code)
            .transpose()?,
        third_party_phone: m.third_party_phone.clone(),
        authorization_server_uri: m.authorization_server_uri.clone(),
        third_party_notify_uri: m.third_party_notify_uri.clone(),
        authorization_server_authorization_endpoint: m
            .authorization_server_authorization_endpoint
            .clone(),
        authorization_server_token_endpoint: m.authorization_server_token_endpoint.clone(),
        data_custodian_bulk_request_uri: m.data_custodian_bulk_request_uri.clone(),
        data_custodian_resource_endpoint: m.data_custodian_resource_endpoint.clone(),
        redirect_uri: m.redirect_uri.clone(),
        software_id: m.software_id.clone(),
        software_version: m.software_version.clone(),
        token_endpoint_auth_method: m
            .token_endpoint_auth_method
            .as_deref()
            .map(TokenEndpointMethod::from_code)
            .transpose()?,
        response_type: m
            .response_type
            .as_deref()
            .map(ResponseType::from_code)
            .transpose()?,
        registration_access_token: m.registration_access_token.clone(),
        registration_client_uri: m.registration_client_uri.clone(),
        scopes: scopes.into_iter().map(|s| s.scope).collect(),
        grant_types: grant_types
            .iter()
            .map(|g| GrantType::from_code(&g.grant_type))
            .collect::<Result<_, _>>()?,
        object: identified_object!(m),
    })
}

fn domain_to_entity(app: &ApplicationInformation) -> application_information::Model {
    let o = &app.object;
    application_information::Model {
        id: o.id,
        description: o.description.clone(),
        published: o.published,
        updated: o.updated,
        self_link_href: link_href(&o.self_link),
        self_link_rel: link_rel(&o.self_link),
        up_link_href: link_href(&o.up_link),
        up_link_rel: link_rel(&o.up_link),
        client_id: app.client_id.clone(),
        client_secret: app.client_secret.clone(),
        client_name: app.client_name.clone(),
        client_id_issued_at: app.client_id_issued_at,
        client_secret_expires_at: app.client_secret_expires_at,
        data_custodian_id: app.data_custodian_id.clone(),
        data_custodian_application_status: app
            .data_custodian_application_status
            .map(|k| k.code()),
        third_party_application_description: app.third_party_application_description.clone(),
        third_party_application_status: app.third_party_application_status.map(|k| k.code()),
        third_party_application_type: app.third_party_application_type.map(|k| k.code()),
        third_party_application_use: app.third_party_application_use.map(|k| k.code()),
        third_party_phone: app.third_party_phone.clone(),
        authorization_server_uri: app.authorization_server_uri.clone(),
        third_party_notify_uri: app.third_party_notify_uri.clone(),
        authorization_server_authorization_endpoint: app
            .authorization_server_authorization_endpoint
            .clone(),
        authorization_server_token_endpoint: app.authorization_server_token_endpoint.clone(),
        data_custodian_bulk_request_uri: app.data_custodian_bulk_request_uri.clone(),
        data_custodian_resource_endpoint: app.data_custodian_resource_endpoint.clone(),
        redirect_uri: app.redirect_uri.clone(),
        software_id: app.software_id.clone(),
        software_version: app.software_version.clone(),
        token_endpoint_auth_method: app
            .token_endpoint_auth_method
            .map(|k| k.code().to_string()),
        response_type: app.response_type.map(|k| k.code().to_string()),
        registration_access_token: app.registration_access_token.clone(),
        registration_client_uri: app.registration_client_uri.clone(),
    }
}

async fn hydrate<C: ConnectionTrait>(
    conn: &C,
    models: Vec<application_information::Model>,
) -> DomainResult<Vec<ApplicationInformation>> {
    let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
    let scopes = application_information_scope::Entity::find()
        .filter(application_information_scope::Column::ApplicationInformationId.is_in(ids.clone()))
        .order_by_asc(application_information_scope::Column::Id)
        .all(conn)
        .await
        .map_err(db_err)?;
    let grant_types = application_information_grant_type::Entity::find()
        .filter(application_information_grant_type::Column::ApplicationInformationId.is_in(ids))
        .all(conn)
        .await
        .map_err(db_err)?;
    let mut scopes = group_by(scopes, |s| s.application_information_id);
    let mut grant_types = group_by(grant_types, |g| g.application_information_id);

    models
        .into_iter()
        .map(|m| {
            let id = m.id;
            entity_to_domain(
                m,
                scopes.remove(&id).unwrap_or_default(),
                grant_types.remove(&id).unwrap_or_default(),
            )
        })
        .collect()
}

async fn delete_children<C: ConnectionTrait>(conn: &C, ids: Vec<Uuid>) -> DomainResult<()> {
    application_information_scope::Entity::delete_many()
        .filter(application_information_scope::Column::ApplicationInformationId.is_in(ids.clone()))
        .exec(conn)
        .await
        .map_err(db_err)?;
    application_information_grant_type::Entity::delete_many()
        .filter(application_information_grant_type::Column::ApplicationInformationId.is_in(ids))
        .exec(conn)
        .await
        .map_err(db_err)?;
    Ok(())
}

// ── SeaOrmApplicationInformationRepository ──────────────────────

pub struct SeaOrmApplicationInformationRepository {
    db: DatabaseConnection,
}

impl SeaOrmApplicationInformationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<ApplicationInformation> for SeaOrmApplicationInformationRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ApplicationInformation>> {
        let model = application_information::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(model) = model else {
            return Ok(None);
        };
        Ok(hydrate(&self.db, vec![model]).await?.pop())
    }

    async fn find_all(&self) -> DomainResult<Vec<ApplicationInformation>> {
        let models = application_information::Entity::find()
            .order_by_asc(application_information::Column::ClientId)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        hydrate(&self.db, models).await
    }

    async fn save_all(
        &self,
        items: Vec<ApplicationInformation>,
    ) -> DomainResult<Vec<ApplicationInformation>> {
        let items = last_per_id(items);
        let ids: Vec<Uuid> = items.iter().map(|a| a.object.id).collect();
        let rows: Vec<application_information::ActiveModel> =
            items.iter().map(|a| active(domain_to_entity(a))).collect();
        let scopes: Vec<application_information_scope::ActiveModel> = items
            .iter()
            .flat_map(|a| {
                a.scopes.iter().map(move |scope| {
                    active_serial(application_information_scope::Model {
                        id: 0,
                        application_information_id: a.object.id,
                        scope: scope.clone(),
                    })
                })
            })
            .collect();
        let grant_types: Vec<application_information_grant_type::ActiveModel> = items
            .iter()
            .flat_map(|a| {
                a.grant_types.iter().map(move |grant_type| {
                    active_serial(application_information_grant_type::Model {
                        id: 0,
                        application_information_id: a.object.id,
                        grant_type: grant_type.code().to_string(),
                    })
                })
            })
            .collect();

        let txn = self.db.begin().await.map_err(db_err)?;
        upsert_all(&txn, rows).await.map_err(db_err)?;
        delete_children(&txn, ids).await?;
        insert_all(&txn, scopes).await.map_err(db_err)?;
        insert_all(&txn, grant_types).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        info!(count = items.len(), "Application information saved");
        Ok(items)
    }

    async fn delete_by_id(&self, id: Uuid) -> DomainResult<bool> {
        let txn = self.db.begin().await.map_err(db_err)?;
        delete_children(&txn, vec![id]).await?;
        let result = application_information::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        if result.rows_affected == 0 {
            warn!(%id, "Application information not found for delete");
        }
        Ok(result.rows_affected > 0)
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let txn = self.db.begin().await.map_err(db_err)?;
        application_information_scope::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        application_information_grant_type::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        let result = application_information::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        Ok(result.rows_affected)
    }

    async fn count(&self) -> DomainResult<u64> {
        application_information::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}

#[async_trait]
impl ApplicationInformationRepository for SeaOrmApplicationInformationRepository {
    async fn find_by_client_id(
        &self,
        client_id: &str,
    ) -> DomainResult<Option<ApplicationInformation>> {
        debug!(client_id, "Looking up application information");
        let model = application_information::Entity::find()
            .filter(application_information::Column::ClientId.eq(client_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(model) = model else {
            return Ok(None);
        };
        Ok(hydrate(&self.db, vec![model]).await?.pop())
    }
}
