//! ApplicationInformation entity (usage schema)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "application_information")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub description: Option<String>,
    pub published: Option<DateTimeUtc>,
    pub updated: Option<DateTimeUtc>,
    pub self_link_href: Option<String>,
    pub self_link_rel: Option<String>,
    pub up_link_href: Option<String>,
    pub up_link_rel: Option<String>,
    pub client_id: String,
    pub client_secret: Option<String>,
    pub client_name: Option<String>,
    pub client_id_issued_at: Option<i64>,
    pub client_secret_expires_at: Option<i64>,
    pub data_custodian_id: Option<String>,
    pub data_custodian_application_status: Option<i32>,
    pub third_party_application_description: Option<String>,
    pub third_party_application_status: Option<i32>,
    pub third_party_application_type: Option<i32>,
    pub third_party_application_use: Option<i32>,
    pub third_party_phone: Option<String>,
    pub authorization_server_uri: Option<String>,
    pub third_party_notify_uri: Option<String>,
    pub authorization_server_authorization_endpoint: Option<String>,
    pub authorization_server_token_endpoint: Option<String>,
    pub data_custodian_bulk_request_uri: Option<String>,
    pub data_custodian_resource_endpoint: Option<String>,
    pub redirect_uri: Option<String>,
    pub software_id: Option<String>,
    pub software_version: Option<String>,
    pub token_endpoint_auth_method: Option<String>,
    pub response_type: Option<String>,
    pub registration_access_token: Option<String>,
    pub registration_client_uri: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
