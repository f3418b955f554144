//! CustomerAccount entity (customer schema)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customer_accounts")]
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
    pub billing_cycle: Option<String>,
    pub budget_bill: Option<String>,
    pub last_bill_amount: Option<i64>,
    pub account_id: Option<String>,
    pub customer_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
