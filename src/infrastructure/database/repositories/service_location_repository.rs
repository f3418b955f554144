//! SeaORM implementations of the service location and end device
//! repositories (customer schema).

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use tracing::{info, warn};
use uuid::Uuid;

use super::support::{
    active, active_serial, db_err, find_in, group_by, insert_all, last_per_id, link_href, link_rel,
    upsert_all, AddressColumns, ElectronicAddressColumns, PhoneColumns, StatusColumns,
};
use crate::domain::common::PositionPoint;
use crate::domain::customer::{
    Asset, AssetContainer, EndDevice, EndDeviceRepository, Location, ServiceLocation,
    ServiceLocationRepository,
};
use crate::domain::repositories::CrudRepository;
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{
    end_device, service_location, service_location_position_point,
    service_location_usage_point_ref,
};

// ── Service location conversion ─────────────────────────────────

fn location_to_domain(
    m: service_location::Model,
    points: Vec<service_location_position_point::Model>,
    refs: Vec<service_location_usage_point_ref::Model>,
) -> ServiceLocation {
    let main_address = AddressColumns {
        street_number: m.main_address_street_number.clone(),
        street_name: m.main_address_street_name.clone(),
        street_suffix: m.main_address_street_suffix.clone(),
        suite_number: m.main_address_suite_number.clone(),
        town_code: m.main_address_town_code.clone(),
        town_name: m.main_address_town_name.clone(),
        state_or_province: m.main_address_state_or_province.clone(),
        country: m.main_address_country.clone(),
        postal_code: m.main_address_postal_code.clone(),
        status: StatusColumns {
            value: m.main_address_status_value.clone(),
            date_time: m.main_address_status_date_time,
            remark: m.main_address_status_remark.clone(),
            reason: m.main_address_status_reason.clone(),
        },
    };
    let phone1 = PhoneColumns {
        country_code: m.phone1_country_code.clone(),
        area_code: m.phone1_area_code.clone(),
        local_number: m.phone1_local_number.clone(),
        ext: m.phone1_ext.clone(),
    };
    ServiceLocation {
        location: Location {
            location_type: m.location_type.clone(),
            main_address: main_address.into(),
            phone1: phone1.into(),
            electronic_address: electronic_address_columns!(m).into(),
            geo_info_reference: m.geo_info_reference.clone(),
            direction: m.direction.clone(),
            status: status_columns!(m).into(),
            position_points: points
                .into_iter()
                .map(|p| PositionPoint {
                    x_position: p.x_position,
                    y_position: p.y_position,
                    z_position: p.z_position,
                })
                .collect(),
        },
        access_method: m.access_method.clone(),
        site_access_problem: m.site_access_problem.clone(),
        needs_inspection: m.needs_inspection,
        outage_block: m.outage_block.clone(),
        usage_point_hrefs: refs.into_iter().map(|r| r.usage_point_href).collect(),
        object: identified_object!(m),
    }
}

fn location_to_entity(sl: &ServiceLocation) -> service_location::Model {
    let o = &sl.object;
    let loc = &sl.location;
    let address = AddressColumns::from(&loc.main_address);
    let phone = PhoneColumns::from(&loc.phone1);
    let email = ElectronicAddressColumns::from(&loc.electronic_address);
    let status = StatusColumns::from(&loc.status);
    service_location::Model {
        id: o.id,
        description: o.description.clone(),
        published: o.published,
        updated: o.updated,
        self_link_href: link_href(&o.self_link),
        self_link_rel: link_rel(&o.self_link),
        up_link_href: link_href(&o.up_link),
        up_link_rel: link_rel(&o.up_link),
        location_type: loc.location_type.clone(),
        main_address_street_number: address.street_number,
        main_address_street_name: address.street_name,
        main_address_street_suffix: address.street_suffix,
        main_address_suite_number: address.suite_number,
        main_address_town_code: address.town_code,
        main_address_town_name: address.town_name,
        main_address_state_or_province: address.state_or_province,
        main_address_country: address.country,
        main_address_postal_code: address.postal_code,
        main_address_status_value: address.status.value,
        main_address_status_date_time: address.status.date_time,
        main_address_status_remark: address.status.remark,
        main_address_status_reason: address.status.reason,
        phone1_country_code: phone.country_code,
        phone1_area_code: phone.area_code,
        phone1_local_number: phone.local_number,
        phone1_ext: phone.ext,
        electronic_address_email1: email.email1,
        electronic_address_email2: email.email2,
        electronic_address_web: email.web,
        electronic_address_lan: email.lan,
        geo_info_reference: loc.geo_info_reference.clone(),
        direction: loc.direction.clone(),
        status_value: status.value,
        status_date_time: status.date_time,
        status_remark: status.remark,
        status_reason: status.reason,
        access_method: sl.access_method.clone(),
        site_access_problem: sl.site_access_problem.clone(),
        needs_inspection: sl.needs_inspection,
        outage_block: sl.outage_block.clone(),
    }
}

async fn hydrate_locations<C: ConnectionTrait>(
    conn: &C,
    models: Vec<service_location::Model>,
) -> DomainResult<Vec<ServiceLocation>> {
    let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
    let points = find_in::<service_location_position_point::Entity, _, _>(
        conn,
        service_location_position_point::Column::ServiceLocationId,
        &ids,
        service_location_position_point::Column::Id,
    )
    .await
    .map_err(db_err)?;
    let refs = find_in::<service_location_usage_point_ref::Entity, _, _>(
        conn,
        service_location_usage_point_ref::Column::ServiceLocationId,
        &ids,
        service_location_usage_point_ref::Column::Id,
    )
    .await
    .map_err(db_err)?;
    let mut points = group_by(points, |p| p.service_location_id);
    let mut refs = group_by(refs, |r| r.service_location_id);
    Ok(models
        .into_iter()
        .map(|m| {
            let id = m.id;
            location_to_domain(
                m,
                points.remove(&id).unwrap_or_default(),
                refs.remove(&id).unwrap_or_default(),
            )
        })
        .collect())
}

async fn delete_location_children<C: ConnectionTrait>(
    conn: &C,
    ids: Vec<Uuid>,
) -> DomainResult<()> {
    service_location_position_point::Entity::delete_many()
        .filter(service_location_position_point::Column::ServiceLocationId.is_in(ids.clone()))
        .exec(conn)
        .await
        .map_err(db_err)?;
    service_location_usage_point_ref::Entity::delete_many()
        .filter(service_location_usage_point_ref::Column::ServiceLocationId.is_in(ids))
        .exec(conn)
        .await
        .map_err(db_err)?;
    Ok(())
}

// ── End device conversion ───────────────────────────────────────

fn device_to_domain(m: end_device::Model) -> EndDevice {
    EndDevice {
        container: AssetContainer {
            asset: Asset {
                asset_type: m.asset_type.clone(),
                utc_number: m.utc_number.clone(),
                serial_number: m.serial_number.clone(),
                lot_number: m.lot_number.clone(),
                purchase_price: m.purchase_price,
                critical: m.critical,
                electronic_address: electronic_address_columns!(m).into(),
                installation_date: m.installation_date,
                manufactured_date: m.manufactured_date,
                status: status_columns!(m).into(),
            },
        },
        is_virtual: m.is_virtual,
        is_pan: m.is_pan,
        install_code: m.install_code.clone(),
        amr_system: m.amr_system.clone(),
        service_location_id: m.service_location_id,
        object: identified_object!(m),
    }
}

fn device_to_entity(d: &EndDevice) -> end_device::Model {
    let o = &d.object;
    let asset = &d.container.asset;
    let email = ElectronicAddressColumns::from(&asset.electronic_address);
    let status = StatusColumns::from(&asset.status);
    end_device::Model {
        id: o.id,
        description: o.description.clone(),
        published: o.published,
        updated: o.updated,
        self_link_href: link_href(&o.self_link),
        self_link_rel: link_rel(&o.self_link),
        up_link_href: link_href(&o.up_link),
        up_link_rel: link_rel(&o.up_link),
        asset_type: asset.asset_type.clone(),
        utc_number: asset.utc_number.clone(),
        serial_number: asset.serial_number.clone(),
        lot_number: asset.lot_number.clone(),
        purchase_price: asset.purchase_price,
        critical: asset.critical,
        electronic_address_email1: email.email1,
        electronic_address_email2: email.email2,
        electronic_address_web: email.web,
        electronic_address_lan: email.lan,
        installation_date: asset.installation_date,
        manufactured_date: asset.manufactured_date,
        status_value: status.value,
        status_date_time: status.date_time,
        status_remark: status.remark,
        status_reason: status.reason,
        is_virtual: d.is_virtual,
        is_pan: d.is_pan,
        install_code: d.install_code.clone(),
        amr_system: d.amr_system.clone(),
        service_location_id: d.service_location_id,
    }
}

// ── SeaOrmServiceLocationRepository ─────────────────────────────

pub struct SeaOrmServiceLocationRepository {
    db: DatabaseConnection,
}

impl SeaOrmServiceLocationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<ServiceLocation> for SeaOrmServiceLocationRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ServiceLocation>> {
        let model = service_location::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(model) = model else {
            return Ok(None);
        };
        Ok(hydrate_locations(&self.db, vec![model]).await?.pop())
    }

    async fn find_all(&self) -> DomainResult<Vec<ServiceLocation>> {
        let models = service_location::Entity::find()
            .order_by_asc(service_location::Column::SelfLinkHref)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        hydrate_locations(&self.db, models).await
    }

    async fn save_all(&self, items: Vec<ServiceLocation>) -> DomainResult<Vec<ServiceLocation>> {
        let items = last_per_id(items);
        let ids: Vec<Uuid> = items.iter().map(|l| l.object.id).collect();
        let rows: Vec<service_location::ActiveModel> =
            items.iter().map(|l| active(location_to_entity(l))).collect();
        let mut points: Vec<service_location_position_point::ActiveModel> = Vec::new();
        let mut refs: Vec<service_location_usage_point_ref::ActiveModel> = Vec::new();
        for l in &items {
            let id = l.object.id;
            for point in &l.location.position_points {
                points.push(active_serial(service_location_position_point::Model {
                    id: 0,
                    service_location_id: id,
                    x_position: point.x_position.clone(),
                    y_position: point.y_position.clone(),
                    z_position: point.z_position.clone(),
                }));
            }
            for href in &l.usage_point_hrefs {
                refs.push(active_serial(service_location_usage_point_ref::Model {
                    id: 0,
                    service_location_id: id,
                    usage_point_href: href.clone(),
                }));
            }
        }

        let txn = self.db.begin().await.map_err(db_err)?;
        upsert_all(&txn, rows).await.map_err(db_err)?;
        delete_location_children(&txn, ids).await?;
        insert_all(&txn, points).await.map_err(db_err)?;
        insert_all(&txn, refs).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        info!(count = items.len(), "Service locations saved");
        Ok(items)
    }

    /// End devices installed at the location survive and lose the link.
    async fn delete_by_id(&self, id: Uuid) -> DomainResult<bool> {
        let txn = self.db.begin().await.map_err(db_err)?;
        delete_location_children(&txn, vec![id]).await?;
        let result = service_location::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        if result.rows_affected == 0 {
            warn!(%id, "Service location not found for delete");
        }
        Ok(result.rows_affected > 0)
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let txn = self.db.begin().await.map_err(db_err)?;
        service_location_position_point::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        service_location_usage_point_ref::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        let result = service_location::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        Ok(result.rows_affected)
    }

    async fn count(&self) -> DomainResult<u64> {
        service_location::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}

impl ServiceLocationRepository for SeaOrmServiceLocationRepository {}

// ── SeaOrmEndDeviceRepository ───────────────────────────────────

pub struct SeaOrmEndDeviceRepository {
    db: DatabaseConnection,
}

impl SeaOrmEndDeviceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<EndDevice> for SeaOrmEndDeviceRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<EndDevice>> {
        let model = end_device::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(device_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<EndDevice>> {
        let models = end_device::Entity::find()
            .order_by_asc(end_device::Column::SerialNumber)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(device_to_domain).collect())
    }

    async fn save_all(&self, items: Vec<EndDevice>) -> DomainResult<Vec<EndDevice>> {
        let items = last_per_id(items);
        let rows: Vec<end_device::ActiveModel> =
            items.iter().map(|d| active(device_to_entity(d))).collect();
        let txn = self.db.begin().await.map_err(db_err)?;
        upsert_all(&txn, rows).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        info!(count = items.len(), "End devices saved");
        Ok(items)
    }

    async fn delete_by_id(&self, id: Uuid) -> DomainResult<bool> {
        let result = end_device::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            warn!(%id, "End device not found for delete");
        }
        Ok(result.rows_affected > 0)
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let result = end_device::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }

    async fn count(&self) -> DomainResult<u64> {
        end_device::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}

impl EndDeviceRepository for SeaOrmEndDeviceRepository {}
