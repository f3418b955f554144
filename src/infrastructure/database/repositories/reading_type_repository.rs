//! SeaORM implementation of ReadingTypeRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, TransactionTrait};
use tracing::{info, warn};
use uuid::Uuid;

use super::support::{active, db_err, last_per_id, link_href, link_rel, upsert_all};
use crate::domain::kinds::{
    AccumulationKind, CommodityKind, CurrencyCode, DataQualifierKind, FlowDirectionKind,
    MeasurementKind, PhaseCodeKind, QualityOfReading, TimeAttributeKind, UnitMultiplierKind,
    UnitSymbolKind,
};
use crate::domain::reading_type::{Rational, ReadingType, ReadingTypeRepository};
use crate::domain::repositories::CrudRepository;
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::reading_type;

// ── Conversion helpers ──────────────────────────────────────────

fn rational(numerator: Option<i64>, denominator: Option<i64>) -> Option<Rational> {
    Some(Rational {
        numerator: numerator?,
        denominator: denominator?,
    })
}

/// Fails when a stored code no longer maps to exactly one kind, e.g. the
/// measurement kind 112 shared by two variants.
fn entity_to_domain(m: reading_type::Model) -> DomainResult<ReadingType> {
    Ok(ReadingType {
        accumulation_behaviour: m
            .accumulation_behaviour
            .map(AccumulationKind::from_code)
            .transpose()?,
        commodity: m.commodity.map(CommodityKind::from_code).transpose()?,
        consumption_tier: m.consumption_tier,
        currency: m.currency.map(CurrencyCode::from_code).transpose()?,
        data_qualifier: m.data_qualifier.map(DataQualifierKind::from_code).transpose()?,
        default_quality: m.default_quality.map(QualityOfReading::from_code).transpose()?,
        flow_direction: m.flow_direction.map(FlowDirectionKind::from_code).transpose()?,
        interval_length: m.interval_length,
        kind: m.kind.map(MeasurementKind::from_code).transpose()?,
        phase: m.phase.map(PhaseCodeKind::from_code).transpose()?,
        power_of_ten_multiplier: m
            .power_of_ten_multiplier
            .map(UnitMultiplierKind::from_code)
            .transpose()?,
        time_attribute: m.time_attribute.map(TimeAttributeKind::from_code).transpose()?,
        tou: m.tou,
        uom: m.uom.map(UnitSymbolKind::from_code).transpose()?,
        cpp: m.cpp,
        interharmonic: rational(m.interharmonic_numerator, m.interharmonic_denominator),
        measuring_period: m.measuring_period.map(TimeAttributeKind::from_code).transpose()?,
        argument: rational(m.argument_numerator, m.argument_denominator),
        object: identified_object!(m),
    })
}

fn domain_to_entity(rt: &ReadingType) -> reading_type::Model {
    let o = &rt.object;
    reading_type::Model {
        id: o.id,
        description: o.description.clone(),
        published: o.published,
        updated: o.updated,
        self_link_href: link_href(&o.self_link),
        self_link_rel: link_rel(&o.self_link),
        up_link_href: link_href(&o.up_link),
        up_link_rel: link_rel(&o.up_link),
        accumulation_behaviour: rt.accumulation_behaviour.map(|k| k.code()),
        commodity: rt.commodity.map(|k| k.code()),
        consumption_tier: rt.consumption_tier,
        currency: rt.currency.map(|k| k.code()),
        data_qualifier: rt.data_qualifier.map(|k| k.code()),
        default_quality: rt.default_quality.map(|k| k.code()),
        flow_direction: rt.flow_direction.map(|k| k.code()),
        interval_length: rt.interval_length,
        kind: rt.kind.map(|k| k.code()),
        phase: rt.phase.map(|k| k.code()),
        power_of_ten_multiplier: rt.power_of_ten_multiplier.map(|k| k.code()),
        time_attribute: rt.time_attribute.map(|k| k.code()),
        tou: rt.tou,
        uom: rt.uom.map(|k| k.code()),
        cpp: rt.cpp,
        interharmonic_numerator: rt.interharmonic.map(|r| r.numerator),
        interharmonic_denominator: rt.interharmonic.map(|r| r.denominator),
        measuring_period: rt.measuring_period.map(|k| k.code()),
        argument_numerator: rt.argument.map(|r| r.numerator),
        argument_denominator: rt.argument.map(|r| r.denominator),
    }
}

// ── SeaOrmReadingTypeRepository ─────────────────────────────────

pub struct SeaOrmReadingTypeRepository {
    db: DatabaseConnection,
}

impl SeaOrmReadingTypeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<ReadingType> for SeaOrmReadingTypeRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ReadingType>> {
        let model = reading_type::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(entity_to_domain).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<ReadingType>> {
        let models = reading_type::Entity::find()
            .order_by_asc(reading_type::Column::SelfLinkHref)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(entity_to_domain).collect()
    }

    async fn save_all(&self, items: Vec<ReadingType>) -> DomainResult<Vec<ReadingType>> {
        let items = last_per_id(items);
        let rows: Vec<reading_type::ActiveModel> =
            items.iter().map(|rt| active(domain_to_entity(rt))).collect();
        let txn = self.db.begin().await.map_err(db_err)?;
        upsert_all(&txn, rows).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        info!(count = items.len(), "Reading types saved");
        Ok(items)
    }

    /// Meter readings that referred to the reading type keep their data
    /// and lose the reference.
    async fn delete_by_id(&self, id: Uuid) -> DomainResult<bool> {
        let result = reading_type::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected == 0 {
            warn!(%id, "Reading type not found for delete");
        }
        Ok(result.rows_affected > 0)
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let result = reading_type::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }

    async fn count(&self) -> DomainResult<u64> {
        reading_type::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}

impl ReadingTypeRepository for SeaOrmReadingTypeRepository {}
