//! MeterReading entity (usage schema)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "meter_readings")]
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
    pub usage_point_id: Uuid,
    pub reading_type_id: Option<Uuid>,
    /// Order within the owning usage point
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::usage_point::Entity",
        from = "Column::UsagePointId",
        to = "super::usage_point::Column::Id"
    )]
    UsagePoint,
    #[sea_orm(
        belongs_to = "super::reading_type::Entity",
        from = "Column::ReadingTypeId",
        to = "super::reading_type::Column::Id"
    )]
    ReadingType,
}

impl Related<super::usage_point::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UsagePoint.def()
    }
}

impl Related<super::reading_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReadingType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
