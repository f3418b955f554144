//! Authorization entity (usage schema)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authorizations")]
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
    pub authorized_period_start: Option<i64>,
    pub authorized_period_duration: Option<i64>,
    pub published_period_start: Option<i64>,
    pub published_period_duration: Option<i64>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub authorization_uri: Option<String>,
    pub resource_uri: Option<String>,
    pub customer_resource_uri: Option<String>,
    pub scope: Option<String>,
    pub state: Option<String>,
    /// 0 = revoked, 1 = active, 2 = denied
    pub status: Option<i32>,
    pub expires_in: Option<i64>,
    pub grant_type: Option<String>,
    pub response_type: Option<String>,
    pub token_type: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
    pub error_uri: Option<String>,
    pub third_party: Option<String>,
    pub code: Option<String>,
    pub application_information_id: Option<Uuid>,
    pub retail_customer_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::application_information::Entity",
        from = "Column::ApplicationInformationId",
        to = "super::application_information::Column::Id"
    )]
    ApplicationInformation,
    #[sea_orm(
        belongs_to = "super::retail_customer::Entity",
        from = "Column::RetailCustomerId",
        to = "super::retail_customer::Column::Id"
    )]
    RetailCustomer,
}

impl Related<super::application_information::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationInformation.def()
    }
}

impl Related<super::retail_customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RetailCustomer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
