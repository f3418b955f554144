//! Notification owned by a customer account

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customer_account_notifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_account_id: Uuid,
    pub method_kind: Option<String>,
    pub time: Option<i64>,
    pub note: Option<String>,
    pub customer_notification_kind: Option<String>,
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
