//! EndDevice entity (customer schema)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "end_devices")]
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
    pub asset_type: Option<String>,
    pub utc_number: Option<String>,
    pub serial_number: Option<String>,
    pub lot_number: Option<String>,
    pub purchase_price: Option<i64>,
    pub critical: bool,
    pub electronic_address_email1: Option<String>,
    pub electronic_address_email2: Option<String>,
    pub electronic_address_web: Option<String>,
    pub electronic_address_lan: Option<String>,
    pub installation_date: Option<i64>,
    pub manufactured_date: Option<i64>,
    pub status_value: Option<String>,
    pub status_date_time: Option<i64>,
    pub status_remark: Option<String>,
    pub status_reason: Option<String>,
    pub is_virtual: bool,
    pub is_pan: bool,
    pub install_code: Option<String>,
    pub amr_system: Option<String>,
    pub service_location_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::service_location::Entity",
        from = "Column::ServiceLocationId",
        to = "super::service_location::Column::Id"
    )]
    ServiceLocation,
}

impl Related<super::service_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceLocation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
