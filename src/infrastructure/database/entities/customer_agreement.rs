//! CustomerAgreement entity (customer schema)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customer_agreements")]
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
    pub created_date_time: Option<i64>,
    pub last_modified_date_time: Option<i64>,
    pub revision_number: Option<String>,
    pub subject: Option<String>,
    pub title: Option<String>,
    pub doc_type: Option<String>,
    pub electronic_address_email1: Option<String>,
    pub electronic_address_email2: Option<String>,
    pub electronic_address_web: Option<String>,
    pub electronic_address_lan: Option<String>,
    pub status_value: Option<String>,
    pub status_date_time: Option<i64>,
    pub status_remark: Option<String>,
    pub status_reason: Option<String>,
    pub sign_date: Option<i64>,
    pub validity_interval_start: Option<i64>,
    pub validity_interval_duration: Option<i64>,
    pub load_mgmt: Option<String>,
    pub is_pre_pay: bool,
    pub shut_off_date_time: Option<i64>,
    pub currency: Option<String>,
    pub agreement_id: Option<String>,
    pub customer_account_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer_account::Entity",
        from = "Column::CustomerAccountId",
        to = "super::customer_account::Column::Id"
    )]
    CustomerAccount,
}

impl Related<super::customer_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerAccount.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
