//! Scheduled status owned by a customer agreement

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customer_agreement_future_statuses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_agreement_id: Uuid,
    pub status_value: Option<String>,
    pub status_date_time: Option<i64>,
    pub status_remark: Option<String>,
    pub status_reason: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer_agreement::Entity",
        from = "Column::CustomerAgreementId",
        to = "super::customer_agreement::Column::Id"
    )]
    CustomerAgreement,
}

impl Related<super::customer_agreement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerAgreement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
