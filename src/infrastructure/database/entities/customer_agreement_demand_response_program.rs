//! Demand response program owned by a customer agreement

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customer_agreement_demand_response_programs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_agreement_id: Uuid,
    pub program_name: String,
    pub enrollment_status: Option<String>,
    pub program_description: Option<String>,
    pub program_date_start: Option<i64>,
    pub program_date_duration: Option<i64>,
    pub capacity_reservation_level_multiplier: Option<i32>,
    pub capacity_reservation_level_uom: Option<i32>,
    pub capacity_reservation_level_value: Option<i64>,
    pub capacity_reservation_level_time_stamp: Option<i64>,
    pub capacity_reservation_level_reading_type_ref: Option<String>,
    pub dr_program_nomination_multiplier: Option<i32>,
    pub dr_program_nomination_uom: Option<i32>,
    pub dr_program_nomination_value: Option<i64>,
    pub dr_program_nomination_time_stamp: Option<i64>,
    pub dr_program_nomination_reading_type_ref: Option<String>,
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
