//! Quality code attached to an interval reading

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reading_qualities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub interval_reading_id: i32,
    pub quality: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::interval_reading::Entity",
        from = "Column::IntervalReadingId",
        to = "super::interval_reading::Column::Id"
    )]
    IntervalReading,
}

impl Related<super::interval_reading::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IntervalReading.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
