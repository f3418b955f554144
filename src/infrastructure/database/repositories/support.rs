//! Helpers shared by the SeaORM repositories: error mapping, batched
//! upserts, and the flattening of value objects into prefixed columns.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IdenStatic,
    IntoActiveModel, Iterable, PrimaryKeyToColumn, QueryFilter, QueryOrder, Value,
};

use crate::domain::common::{
    DateTimeInterval, Identified, ElectronicAddress, LinkType, Organisation, Status, StreetAddress,
    StreetDetail, SummaryMeasurement, TelephoneNumber, TownDetail,
};
use crate::domain::kinds::{UnitMultiplierKind, UnitSymbolKind};
use crate::domain::{DomainError, DomainResult};

/// Upper bound on bind parameters per statement; SQLite allows 32766.
const MAX_BIND_PARAMS: usize = 30_000;

/// Keys bound per `IN (...)` filter.
const KEY_CHUNK: usize = 10_000;

pub(crate) fn db_err(e: DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

/// Collapse repeated ids in a save batch. The last occurrence wins and
/// keeps its position relative to the other survivors.
pub(crate) fn last_per_id<T: Identified>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut kept: Vec<T> = items
        .into_iter()
        .rev()
        .filter(|item| seen.insert(item.id()))
        .collect();
    kept.reverse();
    kept
}

/// Identity and link columns of an identified row.
macro_rules! identified_object {
    ($model:expr) => {
        $crate::domain::common::IdentifiedObject {
            id: $model.id,
            description: $model.description,
            published: $model.published,
            updated: $model.updated,
            self_link: $crate::infrastructure::database::repositories::support::link(
                $model.self_link_href,
                $model.self_link_rel,
            ),
            up_link: $crate::infrastructure::database::repositories::support::link(
                $model.up_link_href,
                $model.up_link_rel,
            ),
        }
    };
}

/// The `status_*` group of a row.
macro_rules! status_columns {
    ($model:expr) => {
        $crate::infrastructure::database::repositories::support::StatusColumns {
            value: $model.status_value.clone(),
            date_time: $model.status_date_time,
            remark: $model.status_remark.clone(),
            reason: $model.status_reason.clone(),
        }
    };
}

/// The `electronic_address_*` group of a row.
macro_rules! electronic_address_columns {
    ($model:expr) => {
        $crate::infrastructure::database::repositories::support::ElectronicAddressColumns {
            email1: $model.electronic_address_email1.clone(),
            email2: $model.electronic_address_email2.clone(),
            web: $model.electronic_address_web.clone(),
            lan: $model.electronic_address_lan.clone(),
        }
    };
}

/// The `organisation_*` group of a customer or supplier row.
macro_rules! organisation_columns {
    ($model:expr) => {
        $crate::infrastructure::database::repositories::support::OrganisationColumns {
            name: $model.organisation_name.clone(),
            address: $crate::infrastructure::database::repositories::support::AddressColumns {
                street_number: $model.organisation_address_street_number.clone(),
                street_name: $model.organisation_address_street_name.clone(),
                street_suffix: $model.organisation_address_street_suffix.clone(),
                suite_number: $model.organisation_address_suite_number.clone(),
                town_code: $model.organisation_address_town_code.clone(),
                town_name: $model.organisation_address_town_name.clone(),
                state_or_province: $model.organisation_address_state_or_province.clone(),
                country: $model.organisation_address_country.clone(),
                postal_code: $model.organisation_address_postal_code.clone(),
                status: $crate::infrastructure::database::repositories::support::StatusColumns {
                    value: $model.organisation_address_status_value.clone(),
                    date_time: $model.organisation_address_status_date_time,
                    remark: $model.organisation_address_status_remark.clone(),
                    reason: $model.organisation_address_status_reason.clone(),
                },
            },
            phone1: $crate::infrastructure::database::repositories::support::PhoneColumns {
                country_code: $model.organisation_phone1_country_code.clone(),
                area_code: $model.organisation_phone1_area_code.clone(),
                local_number: $model.organisation_phone1_local_number.clone(),
                ext: $model.organisation_phone1_ext.clone(),
            },
            electronic_address:
                $crate::infrastructure::database::repositories::support::ElectronicAddressColumns {
                    email1: $model.organisation_electronic_address_email1.clone(),
                    email2: $model.organisation_electronic_address_email2.clone(),
                    web: $model.organisation_electronic_address_web.clone(),
                    lan: $model.organisation_electronic_address_lan.clone(),
                },
        }
    };
}

pub(crate) fn link(href: Option<String>, rel: Option<String>) -> Option<LinkType> {
    href.map(|href| LinkType {
        href,
        rel: rel.unwrap_or_default(),
    })
}

pub(crate) fn link_href(link: &Option<LinkType>) -> Option<String> {
    link.as_ref().map(|l| l.href.clone())
}

pub(crate) fn link_rel(link: &Option<LinkType>) -> Option<String> {
    link.as_ref().map(|l| l.rel.clone())
}

/// Active model writing every column of `model`.
pub(crate) fn active<A>(model: <A::Entity as EntityTrait>::Model) -> A
where
    A: ActiveModelTrait,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    model.into_active_model().reset_all()
}

/// Active model for a row whose surrogate key the database assigns.
pub(crate) fn active_serial<A>(model: <A::Entity as EntityTrait>::Model) -> A
where
    A: ActiveModelTrait,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    let mut am = active::<A>(model);
    for key in <A::Entity as EntityTrait>::PrimaryKey::iter() {
        am.not_set(key.into_column());
    }
    am
}

fn batch_size<E: EntityTrait>() -> usize {
    let per_row = E::Column::iter().count().max(1);
    (MAX_BIND_PARAMS / per_row).max(1)
}

/// Plain batched insert. No-op for an empty batch.
pub(crate) async fn insert_all<A, C>(conn: &C, models: Vec<A>) -> Result<(), DbErr>
where
    A: ActiveModelTrait + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    let size = batch_size::<A::Entity>();
    let mut rows = models.into_iter().peekable();
    while rows.peek().is_some() {
        let batch: Vec<A> = rows.by_ref().take(size).collect();
        <A::Entity as EntityTrait>::insert_many(batch)
            .exec_without_returning(conn)
            .await?;
    }
    Ok(())
}

/// Batched insert that overwrites existing rows with the same primary key.
pub(crate) async fn upsert_all<A, C>(conn: &C, models: Vec<A>) -> Result<(), DbErr>
where
    A: ActiveModelTrait + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    let keys: Vec<_> = <A::Entity as EntityTrait>::PrimaryKey::iter()
        .map(|key| key.into_column())
        .collect();
    let key_names: Vec<&str> = keys.iter().map(|key| key.as_str()).collect();
    let updates: Vec<_> = <A::Entity as EntityTrait>::Column::iter()
        .filter(|column| !key_names.contains(&column.as_str()))
        .collect();

    let size = batch_size::<A::Entity>();
    let mut rows = models.into_iter().peekable();
    while rows.peek().is_some() {
        let batch: Vec<A> = rows.by_ref().take(size).collect();
        <A::Entity as EntityTrait>::insert_many(batch)
            .on_conflict(
                OnConflict::columns(keys.clone())
                    .update_columns(updates.clone())
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await?;
    }
    Ok(())
}

/// Rows whose `column` matches one of `keys`, ordered by `order`.
///
/// Keys are bound in chunks, so every row of one owner lands in the same
/// query and keeps its relative order.
pub(crate) async fn find_in<E, C, V>(
    conn: &C,
    column: E::Column,
    keys: &[V],
    order: E::Column,
) -> Result<Vec<E::Model>, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
    V: Into<Value> + Clone,
{
    let mut rows = Vec::new();
    for chunk in keys.chunks(KEY_CHUNK) {
        let found = E::find()
            .filter(column.is_in(chunk.iter().cloned()))
            .order_by_asc(order)
            .all(conn)
            .await?;
        rows.extend(found);
    }
    Ok(rows)
}

pub(crate) async fn delete_in<E, C, V>(conn: &C, column: E::Column, keys: &[V]) -> Result<u64, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
    V: Into<Value> + Clone,
{
    let mut removed = 0;
    for chunk in keys.chunks(KEY_CHUNK) {
        let result = E::delete_many()
            .filter(column.is_in(chunk.iter().cloned()))
            .exec(conn)
            .await?;
        removed += result.rows_affected;
    }
    Ok(removed)
}

/// Group child rows by owner, keeping their stored order.
pub(crate) fn group_by<K, V>(rows: Vec<V>, key: impl Fn(&V) -> K) -> HashMap<K, Vec<V>>
where
    K: Eq + Hash,
{
    let mut groups: HashMap<K, Vec<V>> = HashMap::new();
    for row in rows {
        groups.entry(key(&row)).or_default().push(row);
    }
    groups
}

pub(crate) fn position(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

// ── Flattened value objects ─────────────────────────────────────

pub(crate) fn interval(start: Option<i64>, duration: Option<i64>) -> DateTimeInterval {
    DateTimeInterval { start, duration }
}

#[derive(Debug, Default)]
pub(crate) struct MeasurementColumns {
    pub multiplier: Option<i32>,
    pub uom: Option<i32>,
    pub value: Option<i64>,
    pub time_stamp: Option<i64>,
    pub reading_type_ref: Option<String>,
}

impl From<&Option<SummaryMeasurement>> for MeasurementColumns {
    fn from(measurement: &Option<SummaryMeasurement>) -> Self {
        match measurement {
            Some(m) => Self {
                multiplier: m.power_of_ten_multiplier.map(|k| k.code()),
                uom: m.uom.map(|k| k.code()),
                value: m.value,
                time_stamp: m.time_stamp,
                reading_type_ref: m.reading_type_ref.clone(),
            },
            None => Self::default(),
        }
    }
}

impl MeasurementColumns {
    /// All-null columns read back as an absent measurement.
    pub fn into_measurement(self) -> DomainResult<Option<SummaryMeasurement>> {
        if self.multiplier.is_none()
            && self.uom.is_none()
            && self.value.is_none()
            && self.time_stamp.is_none()
            && self.reading_type_ref.is_none()
        {
            return Ok(None);
        }
        Ok(Some(SummaryMeasurement {
            power_of_ten_multiplier: self
                .multiplier
                .map(UnitMultiplierKind::from_code)
                .transpose()?,
            uom: self.uom.map(UnitSymbolKind::from_code).transpose()?,
            value: self.value,
            time_stamp: self.time_stamp,
            reading_type_ref: self.reading_type_ref,
        }))
    }
}

#[derive(Debug, Default)]
pub(crate) struct StatusColumns {
    pub value: Option<String>,
    pub date_time: Option<i64>,
    pub remark: Option<String>,
    pub reason: Option<String>,
}

impl From<&Status> for StatusColumns {
    fn from(status: &Status) -> Self {
        Self {
            value: status.value.clone(),
            date_time: status.date_time,
            remark: status.remark.clone(),
            reason: status.reason.clone(),
        }
    }
}

impl From<StatusColumns> for Status {
    fn from(c: StatusColumns) -> Self {
        Status {
            value: c.value,
            date_time: c.date_time,
            remark: c.remark,
            reason: c.reason,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct AddressColumns {
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub street_suffix: Option<String>,
    pub suite_number: Option<String>,
    pub town_code: Option<String>,
    pub town_name: Option<String>,
    pub state_or_province: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub status: StatusColumns,
}

impl From<&StreetAddress> for AddressColumns {
    fn from(a: &StreetAddress) -> Self {
        Self {
            street_number: a.street_detail.number.clone(),
            street_name: a.street_detail.name.clone(),
            street_suffix: a.street_detail.suffix.clone(),
            suite_number: a.street_detail.suite_number.clone(),
            town_code: a.town_detail.code.clone(),
            town_name: a.town_detail.name.clone(),
            state_or_province: a.town_detail.state_or_province.clone(),
            country: a.town_detail.country.clone(),
            postal_code: a.postal_code.clone(),
            status: StatusColumns::from(&a.status),
        }
    }
}

impl From<AddressColumns> for StreetAddress {
    fn from(c: AddressColumns) -> Self {
        StreetAddress {
            street_detail: StreetDetail {
                number: c.street_number,
                name: c.street_name,
                suffix: c.street_suffix,
                suite_number: c.suite_number,
            },
            town_detail: TownDetail {
                code: c.town_code,
                name: c.town_name,
                state_or_province: c.state_or_province,
                country: c.country,
            },
            status: c.status.into(),
            postal_code: c.postal_code,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct PhoneColumns {
    pub country_code: Option<String>,
    pub area_code: Option<String>,
    pub local_number: Option<String>,
    pub ext: Option<String>,
}

impl From<&TelephoneNumber> for PhoneColumns {
    fn from(t: &TelephoneNumber) -> Self {
        Self {
            country_code: t.country_code.clone(),
            area_code: t.area_code.clone(),
            local_number: t.local_number.clone(),
            ext: t.ext.clone(),
        }
    }
}

impl From<PhoneColumns> for TelephoneNumber {
    fn from(c: PhoneColumns) -> Self {
        TelephoneNumber {
            country_code: c.country_code,
            area_code: c.area_code,
            local_number: c.local_number,
            ext: c.ext,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ElectronicAddressColumns {
    pub email1: Option<String>,
    pub email2: Option<String>,
    pub web: Option<String>,
    pub lan: Option<String>,
}

impl From<&ElectronicAddress> for ElectronicAddressColumns {
    fn from(e: &ElectronicAddress) -> Self {
        Self {
            email1: e.email1.clone(),
            email2: e.email2.clone(),
            web: e.web.clone(),
            lan: e.lan.clone(),
        }
    }
}

impl From<ElectronicAddressColumns> for ElectronicAddress {
    fn from(c: ElectronicAddressColumns) -> Self {
        ElectronicAddress {
            email1: c.email1,
            email2: c.email2,
            web: c.web,
            lan: c.lan,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct OrganisationColumns {
    pub name: Option<String>,
    pub address: AddressColumns,
    pub phone1: PhoneColumns,
    pub electronic_address: ElectronicAddressColumns,
}

impl From<&Organisation> for OrganisationColumns {
    fn from(o: &Organisation) -> Self {
        Self {
            name: o.organisation_name.clone(),
            address: AddressColumns::from(&o.street_address),
            phone1: PhoneColumns::from(&o.phone1),
            electronic_address: ElectronicAddressColumns::from(&o.electronic_address),
        }
    }
}

impl From<OrganisationColumns> for Organisation {
    fn from(c: OrganisationColumns) -> Self {
        Organisation {
            organisation_name: c.name,
            street_address: c.address.into(),
            phone1: c.phone1.into(),
            electronic_address: c.electronic_address.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::CodeError;

    #[test]
    fn absent_measurement_flattens_to_nulls() {
        let columns = MeasurementColumns::from(&None);
        assert!(columns.value.is_none());
        assert_eq!(columns.into_measurement().unwrap(), None);
    }

    #[test]
    fn measurement_survives_flattening() {
        let measurement = SummaryMeasurement::new(UnitMultiplierKind::Kilo, UnitSymbolKind::WattHours, 7)
            .at(100)
            .with_reading_type_ref("rt/1");
        let columns = MeasurementColumns::from(&Some(measurement.clone()));
        assert_eq!(columns.multiplier, Some(3));
        assert_eq!(columns.into_measurement().unwrap(), Some(measurement));
    }

    #[test]
    fn empty_measurement_loads_as_absent() {
        let columns = MeasurementColumns::from(&Some(SummaryMeasurement::default()));
        assert_eq!(columns.into_measurement().unwrap(), None);
    }

    #[test]
    fn last_occurrence_of_an_id_wins() {
        use crate::domain::RetailCustomer;

        let alan = RetailCustomer::new("rc/1", "alan");
        let grace = RetailCustomer::new("rc/2", "grace");
        let renamed = alan.clone().named("Alan", "Turing");
        let kept = last_per_id(vec![alan, grace.clone(), renamed.clone()]);
        assert_eq!(kept, vec![grace, renamed]);
    }

    #[test]
    fn unknown_stored_unit_is_a_code_error() {
        let columns = MeasurementColumns {
            uom: Some(-42),
            ..MeasurementColumns::default()
        };
        match columns.into_measurement() {
            Err(DomainError::Code(CodeError::Unknown { code, .. })) => assert_eq!(code, "-42"),
            other => panic!("expected unknown code, got {other:?}"),
        }
    }

    #[test]
    fn link_keeps_href_and_rel() {
        let link = link(Some("a/b".into()), Some("self".into()));
        assert_eq!(link, Some(LinkType::new("a/b", "self")));
        assert_eq!(link_href(&link).as_deref(), Some("a/b"));
        assert_eq!(link_rel(&None), None);
    }

    #[test]
    fn address_survives_flattening() {
        let mut address = StreetAddress::default();
        address.street_detail.number = Some("12".into());
        address.town_detail.name = Some("Springfield".into());
        address.status = Status::new("verified", 5);
        let back = StreetAddress::from(AddressColumns::from(&address));
        assert_eq!(back, address);
    }

    #[test]
    fn positions_saturate() {
        assert_eq!(position(3), 3);
        assert_eq!(position(usize::MAX), i32::MAX);
    }
}
