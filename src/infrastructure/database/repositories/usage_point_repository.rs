//! SeaORM implementation of UsagePointRepository
//!
//! A usage point is stored as one graph: the root row plus every owned
//! child (meter readings down to reading qualities, usage summaries with
//! their line items and rider refs, power-quality summaries, node refs).
//! Saving replaces the owned subtree inside one transaction, so children
//! missing from the saved value are removed with it.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::support::{
    active, active_serial, db_err, delete_in, find_in, group_by, insert_all, interval, last_per_id,
    link_href, link_rel, position, upsert_all, MeasurementColumns,
};
use crate::domain::kinds::{
    AmiBillingReadyKind, AnodeType, ApnodeType, CurrencyCode, EnrollmentStatus, ItemKind,
    PhaseCodeKind, QualityOfReading, ServiceKind, UsagePointConnectedKind,
};
use crate::domain::repositories::CrudRepository;
use crate::domain::usage_point::{
    AggregateNodeRef, BillingChargeSource, ElectricPowerQualitySummary, IntervalBlock,
    IntervalReading, LineItem, MeterReading, PnodeRef, ReadingQuality, TariffRiderRef,
    UsagePoint, UsagePointRepository, UsageSummary,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{
    electric_power_quality_summary, interval_block, interval_reading, line_item, meter_reading,
    reading_quality, subscription_usage_point, usage_point, usage_point_aggregate_node_ref,
    usage_point_pnode_ref, usage_summary, usage_summary_tariff_rider_ref,
};

// ── Root conversion ─────────────────────────────────────────────

fn usage_point_to_entity(up: &UsagePoint) -> usage_point::Model {
    let o = &up.object;
    let estimated_load = MeasurementColumns::from(&up.estimated_load);
    let nominal_service_voltage = MeasurementColumns::from(&up.nominal_service_voltage);
    let rated_current = MeasurementColumns::from(&up.rated_current);
    let rated_power = MeasurementColumns::from(&up.rated_power);
    usage_point::Model {
        id: o.id,
        description: o.description.clone(),
        published: o.published,
        updated: o.updated,
        self_link_href: link_href(&o.self_link),
        self_link_rel: link_rel(&o.self_link),
        up_link_href: link_href(&o.up_link),
        up_link_rel: link_rel(&o.up_link),
        role_flags: up.role_flags_hex(),
        service_category: up.service_category.map(|k| k.code()),
        status: up.status,
        uri: up.uri.clone(),
        ami_billing_ready: up.ami_billing_ready.map(|k| k.code().to_string()),
        check_billing: up.check_billing,
        connection_state: up.connection_state.map(|k| k.code().to_string()),
        estimated_load_multiplier: estimated_load.multiplier,
        estimated_load_uom: estimated_load.uom,
        estimated_load_value: estimated_load.value,
        estimated_load_time_stamp: estimated_load.time_stamp,
        estimated_load_reading_type_ref: estimated_load.reading_type_ref,
        grounded: up.grounded,
        is_sdp: up.is_sdp,
        is_virtual: up.is_virtual,
        minimal_usage_expected: up.minimal_usage_expected,
        nominal_service_voltage_multiplier: nominal_service_voltage.multiplier,
        nominal_service_voltage_uom: nominal_service_voltage.uom,
        nominal_service_voltage_value: nominal_service_voltage.value,
        nominal_service_voltage_time_stamp: nominal_service_voltage.time_stamp,
        nominal_service_voltage_reading_type_ref: nominal_service_voltage.reading_type_ref,
        outage_region: up.outage_region.clone(),
        phase_code: up.phase_code.map(|k| k.code()),
        rated_current_multiplier: rated_current.multiplier,
        rated_current_uom: rated_current.uom,
        rated_current_value: rated_current.value,
        rated_current_time_stamp: rated_current.time_stamp,
        rated_current_reading_type_ref: rated_current.reading_type_ref,
        rated_power_multiplier: rated_power.multiplier,
        rated_power_uom: rated_power.uom,
        rated_power_value: rated_power.value,
        rated_power_time_stamp: rated_power.time_stamp,
        rated_power_reading_type_ref: rated_power.reading_type_ref,
        read_cycle: up.read_cycle.clone(),
        read_route: up.read_route.clone(),
        service_delivery_remark: up.service_delivery_remark.clone(),
        service_priority: up.service_priority.clone(),
        retail_customer_id: up.retail_customer_id,
        service_delivery_point_id: up.service_delivery_point_id,
        local_time_parameters_id: up.local_time_parameters_id,
    }
}

/// Root fields only; the caller fills in the owned collections.
fn usage_point_to_domain(m: usage_point::Model) -> DomainResult<UsagePoint> {
    let role_flags = m
        .role_flags
        .as_deref()
        .map(hex::decode)
        .transpose()
        .map_err(|e| DomainError::Storage(format!("Corrupt role flags on {}: {e}", m.id)))?;
    let estimated_load = MeasurementColumns {
        multiplier: m.estimated_load_multiplier,
        uom: m.estimated_load_uom,
        value: m.estimated_load_value,
        time_stamp: m.estimated_load_time_stamp,
        reading_type_ref: m.estimated_load_reading_type_ref.clone(),
    };
    let nominal_service_voltage = MeasurementColumns {
        multiplier: m.nominal_service_voltage_multiplier,
        uom: m.nominal_service_voltage_uom,
        value: m.nominal_service_voltage_value,
        time_stamp: m.nominal_service_voltage_time_stamp,
        reading_type_ref: m.nominal_service_voltage_reading_type_ref.clone(),
    };
    let rated_current = MeasurementColumns {
        multiplier: m.rated_current_multiplier,
        uom: m.rated_current_uom,
        value: m.rated_current_value,
        time_stamp: m.rated_current_time_stamp,
        reading_type_ref: m.rated_current_reading_type_ref.clone(),
    };
    let rated_power = MeasurementColumns {
        multiplier: m.rated_power_multiplier,
        uom: m.rated_power_uom,
        value: m.rated_power_value,
        time_stamp: m.rated_power_time_stamp,
        reading_type_ref: m.rated_power_reading_type_ref.clone(),
    };

    Ok(UsagePoint {
        role_flags,
        service_category: m.service_category.map(ServiceKind::from_code).transpose()?,
        status: m.status,
        uri: m.uri.clone(),
        ami_billing_ready: m
            .ami_billing_ready
            .as_deref()
            .map(AmiBillingReadyKind::from_code)
            .transpose()?,
        check_billing: m.check_billing,
        connection_state: m
            .connection_state
            .as_deref()
            .map(UsagePointConnectedKind::from_code)
            .transpose()?,
        estimated_load: estimated_load.into_measurement()?,
        grounded: m.grounded,
        is_sdp: m.is_sdp,
        is_virtual: m.is_virtual,
        minimal_usage_expected: m.minimal_usage_expected,
        nominal_service_voltage: nominal_service_voltage.into_measurement()?,
        outage_region: m.outage_region.clone(),
        phase_code: m.phase_code.map(PhaseCodeKind::from_code).transpose()?,
        rated_current: rated_current.into_measurement()?,
        rated_power: rated_power.into_measurement()?,
        read_cycle: m.read_cycle.clone(),
        read_route: m.read_route.clone(),
        service_delivery_remark: m.service_delivery_remark.clone(),
        service_priority: m.service_priority.clone(),
        retail_customer_id: m.retail_customer_id,
        service_delivery_point_id: m.service_delivery_point_id,
        local_time_parameters_id: m.local_time_parameters_id,
        meter_readings: Vec::new(),
        usage_summaries: Vec::new(),
        electric_power_quality_summaries: Vec::new(),
        pnode_refs: Vec::new(),
        aggregate_node_refs: Vec::new(),
        object: identified_object!(m),
    })
}

// ── Child conversions ───────────────────────────────────────────

fn meter_reading_to_entity(
    mr: &MeterReading,
    usage_point_id: Uuid,
    index: usize,
) -> meter_reading::Model {
    let o = &mr.object;
    meter_reading::Model {
        id: o.id,
        description: o.description.clone(),
        published: o.published,
        updated: o.updated,
        self_link_href: link_href(&o.self_link),
        self_link_rel: link_rel(&o.self_link),
        up_link_href: link_href(&o.up_link),
        up_link_rel: link_rel(&o.up_link),
        usage_point_id,
        reading_type_id: mr.reading_type_id,
        position: position(index),
    }
}

fn interval_block_to_entity(
    block: &IntervalBlock,
    meter_reading_id: Uuid,
    index: usize,
) -> interval_block::Model {
    let o = &block.object;
    interval_block::Model {
        id: o.id,
        description: o.description.clone(),
        published: o.published,
        updated: o.updated,
        self_link_href: link_href(&o.self_link),
        self_link_rel: link_rel(&o.self_link),
        up_link_href: link_href(&o.up_link),
        up_link_rel: link_rel(&o.up_link),
        meter_reading_id,
        position: position(index),
        interval_start: block.interval.start,
        interval_duration: block.interval.duration,
    }
}

fn interval_reading_to_entity(
    reading: &IntervalReading,
    id: i32,
    interval_block_id: Uuid,
) -> interval_reading::Model {
    interval_reading::Model {
        id,
        interval_block_id,
        time_period_start: reading.time_period.start,
        time_period_duration: reading.time_period.duration,
        value: reading.value,
        cost: reading.cost,
        consumption_tier: reading.consumption_tier,
        tou: reading.tou,
        cpp: reading.cpp,
    }
}

fn interval_reading_to_domain(
    m: interval_reading::Model,
    qualities: Vec<reading_quality::Model>,
) -> DomainResult<IntervalReading> {
    Ok(IntervalReading {
        time_period: interval(m.time_period_start, m.time_period_duration),
        value: m.value,
        cost: m.cost,
        consumption_tier: m.consumption_tier,
        tou: m.tou,
        cpp: m.cpp,
        reading_qualities: qualities
            .into_iter()
            .map(|q| QualityOfReading::from_code(q.quality).map(ReadingQuality::from))
            .collect::<Result<BTreeSet<_>, _>>()?,
    })
}

fn usage_summary_to_entity(
    s: &UsageSummary,
    usage_point_id: Uuid,
    index: usize,
) -> usage_summary::Model {
    let o = &s.object;
    let overall_last = MeasurementColumns::from(&s.overall_consumption_last_period);
    let billing_overall = MeasurementColumns::from(&s.current_billing_period_overall_consumption);
    let day_net = MeasurementColumns::from(&s.current_day_net_consumption);
    let day_overall = MeasurementColumns::from(&s.current_day_overall_consumption);
    let peak_demand = MeasurementColumns::from(&s.peak_demand);
    let ratchet_demand = MeasurementColumns::from(&s.ratchet_demand);
    usage_summary::Model {
        id: o.id,
        description: o.description.clone(),
        published: o.published,
        updated: o.updated,
        self_link_href: link_href(&o.self_link),
        self_link_rel: link_rel(&o.self_link),
        up_link_href: link_href(&o.up_link),
        up_link_rel: link_rel(&o.up_link),
        usage_point_id,
        position: position(index),
        billing_period_start: s.billing_period.start,
        billing_period_duration: s.billing_period.duration,
        bill_last_period: s.bill_last_period,
        bill_to_date: s.bill_to_date,
        cost_additional_last_period: s.cost_additional_last_period,
        currency: s.currency.map(|k| k.code()),
        quality_of_reading: s.quality_of_reading.map(|k| k.code()),
        status_time_stamp: s.status_time_stamp,
        ratchet_demand_period_start: s.ratchet_demand_period.start,
        ratchet_demand_period_duration: s.ratchet_demand_period.duration,
        overall_consumption_last_period_multiplier: overall_last.multiplier,
        overall_consumption_last_period_uom: overall_last.uom,
        overall_consumption_last_period_value: overall_last.value,
        overall_consumption_last_period_time_stamp: overall_last.time_stamp,
        overall_consumption_last_period_reading_type_ref: overall_last.reading_type_ref,
        current_billing_period_overall_consumption_multiplier: billing_overall.multiplier,
        current_billing_period_overall_consumption_uom: billing_overall.uom,
        current_billing_period_overall_consumption_value: billing_overall.value,
        current_billing_period_overall_consumption_time_stamp: billing_overall.time_stamp,
        current_billing_period_overall_consumption_reading_type_ref: billing_overall
            .reading_type_ref,
        current_day_net_consumption_multiplier: day_net.multiplier,
        current_day_net_consumption_uom: day_net.uom,
        current_day_net_consumption_value: day_net.value,
        current_day_net_consumption_time_stamp: day_net.time_stamp,
        current_day_net_consumption_reading_type_ref: day_net.reading_type_ref,
        current_day_overall_consumption_multiplier: day_overall.multiplier,
        current_day_overall_consumption_uom: day_overall.uom,
        current_day_overall_consumption_value: day_overall.value,
        current_day_overall_consumption_time_stamp: day_overall.time_stamp,
        current_day_overall_consumption_reading_type_ref: day_overall.reading_type_ref,
        peak_demand_multiplier: peak_demand.multiplier,
        peak_demand_uom: peak_demand.uom,
        peak_demand_value: peak_demand.value,
        peak_demand_time_stamp: peak_demand.time_stamp,
        peak_demand_reading_type_ref: peak_demand.reading_type_ref,
        ratchet_demand_multiplier: ratchet_demand.multiplier,
        ratchet_demand_uom: ratchet_demand.uom,
        ratchet_demand_value: ratchet_demand.value,
        ratchet_demand_time_stamp: ratchet_demand.time_stamp,
        ratchet_demand_reading_type_ref: ratchet_demand.reading_type_ref,
        billing_charge_source_agency_name: s
            .billing_charge_source
            .as_ref()
            .and_then(|source| source.agency_name.clone()),
        tariff_profile: s.tariff_profile.clone(),
        read_cycle: s.read_cycle.clone(),
    }
}

fn usage_summary_to_domain(
    m: usage_summary::Model,
    riders: Vec<usage_summary_tariff_rider_ref::Model>,
    items: Vec<line_item::Model>,
) -> DomainResult<UsageSummary> {
    let overall_last = MeasurementColumns {
        multiplier: m.overall_consumption_last_period_multiplier,
        uom: m.overall_consumption_last_period_uom,
        value: m.overall_consumption_last_period_value,
        time_stamp: m.overall_consumption_last_period_time_stamp,
        reading_type_ref: m.overall_consumption_last_period_reading_type_ref.clone(),
    };
    let billing_overall = MeasurementColumns {
        multiplier: m.current_billing_period_overall_consumption_multiplier,
        uom: m.current_billing_period_overall_consumption_uom,
        value: m.current_billing_period_overall_consumption_value,
        time_stamp: m.current_billing_period_overall_consumption_time_stamp,
        reading_type_ref: m
            .current_billing_period_overall_consumption_reading_type_ref
            .clone(),
    };
    let day_net = MeasurementColumns {
        multiplier: m.current_day_net_consumption_multiplier,
        uom: m.current_day_net_consumption_uom,
        value: m.current_day_net_consumption_value,
        time_stamp: m.current_day_net_consumption_time_stamp,
        reading_type_ref: m.current_day_net_consumption_reading_type_ref.clone(),
    };
    let day_overall = MeasurementColumns {
        multiplier: m.current_day_overall_consumption_multiplier,
        uom: m.current_day_overall_consumption_uom,
        value: m.current_day_overall_consumption_value,
        time_stamp: m.current_day_overall_consumption_time_stamp,
        reading_type_ref: m.current_day_overall_consumption_reading_type_ref.clone(),
    };
    let peak_demand = MeasurementColumns {
        multiplier: m.peak_demand_multiplier,
        uom: m.peak_demand_uom,
        value: m.peak_demand_value,
        time_stamp: m.peak_demand_time_stamp,
        reading_type_ref: m.peak_demand_reading_type_ref.clone(),
    };
    let ratchet_demand = MeasurementColumns {
        multiplier: m.ratchet_demand_multiplier,
        uom: m.ratchet_demand_uom,
        value: m.ratchet_demand_value,
        time_stamp: m.ratchet_demand_time_stamp,
        reading_type_ref: m.ratchet_demand_reading_type_ref.clone(),
    };

    Ok(UsageSummary {
        usage_point_id: Some(m.usage_point_id),
        billing_period: interval(m.billing_period_start, m.billing_period_duration),
        bill_last_period: m.bill_last_period,
        bill_to_date: m.bill_to_date,
        cost_additional_last_period: m.cost_additional_last_period,
        currency: m.currency.map(CurrencyCode::from_code).transpose()?,
        quality_of_reading: m
            .quality_of_reading
            .map(QualityOfReading::from_code)
            .transpose()?,
        status_time_stamp: m.status_time_stamp,
        ratchet_demand_period: interval(
            m.ratchet_demand_period_start,
            m.ratchet_demand_period_duration,
        ),
        overall_consumption_last_period: overall_last.into_measurement()?,
        current_billing_period_overall_consumption: billing_overall.into_measurement()?,
        current_day_net_consumption: day_net.into_measurement()?,
        current_day_overall_consumption: day_overall.into_measurement()?,
        peak_demand: peak_demand.into_measurement()?,
        ratchet_demand: ratchet_demand.into_measurement()?,
        billing_charge_source: m
            .billing_charge_source_agency_name
            .clone()
            .map(|name| BillingChargeSource {
                agency_name: Some(name),
            }),
        tariff_profile: m.tariff_profile.clone(),
        read_cycle: m.read_cycle.clone(),
        tariff_rider_refs: riders
            .into_iter()
            .map(|r| -> DomainResult<TariffRiderRef> {
                Ok(TariffRiderRef {
                    enrollment_status: EnrollmentStatus::from_code(&r.enrollment_status)?,
                    rider_type: r.rider_type,
                    effective_date: r.effective_date,
                })
            })
            .collect::<DomainResult<_>>()?,
        line_items: items
            .into_iter()
            .map(line_item_to_domain)
            .collect::<DomainResult<_>>()?,
        object: identified_object!(m),
    })
}

fn line_item_to_entity(item: &LineItem, usage_summary_id: Uuid) -> line_item::Model {
    let measurement = MeasurementColumns::from(&item.measurement);
    line_item::Model {
        id: 0,
        usage_summary_id,
        amount: item.amount,
        rounding: item.rounding,
        date_time: item.date_time,
        note: item.note.clone(),
        measurement_multiplier: measurement.multiplier,
        measurement_uom: measurement.uom,
        measurement_value: measurement.value,
        measurement_time_stamp: measurement.time_stamp,
        measurement_reading_type_ref: measurement.reading_type_ref,
        item_kind: item.item_kind.map(|k| k.code()),
        unit_cost: item.unit_cost,
        item_period_start: item.item_period.start,
        item_period_duration: item.item_period.duration,
    }
}

fn line_item_to_domain(m: line_item::Model) -> DomainResult<LineItem> {
    let measurement = MeasurementColumns {
        multiplier: m.measurement_multiplier,
        uom: m.measurement_uom,
        value: m.measurement_value,
        time_stamp: m.measurement_time_stamp,
        reading_type_ref: m.measurement_reading_type_ref,
    };
    Ok(LineItem {
        amount: m.amount,
        rounding: m.rounding,
        date_time: m.date_time,
        note: m.note,
        measurement: measurement.into_measurement()?,
        item_kind: m.item_kind.map(ItemKind::from_code).transpose()?,
        unit_cost: m.unit_cost,
        item_period: interval(m.item_period_start, m.item_period_duration),
    })
}

fn power_quality_to_entity(
    s: &ElectricPowerQualitySummary,
    usage_point_id: Uuid,
    index: usize,
) -> electric_power_quality_summary::Model {
    let o = &s.object;
    electric_power_quality_summary::Model {
        id: o.id,
        description: o.description.clone(),
        published: o.published,
        updated: o.updated,
        self_link_href: link_href(&o.self_link),
        self_link_rel: link_rel(&o.self_link),
        up_link_href: link_href(&o.up_link),
        up_link_rel: link_rel(&o.up_link),
        usage_point_id,
        position: position(index),
        summary_interval_start: s.summary_interval.start,
        summary_interval_duration: s.summary_interval.duration,
        flicker_plt: s.flicker_plt,
        flicker_pst: s.flicker_pst,
        harmonic_voltage: s.harmonic_voltage,
        long_interruptions: s.long_interruptions,
        mains_voltage: s.mains_voltage,
        measurement_protocol: s.measurement_protocol,
        power_frequency: s.power_frequency,
        rapid_voltage_changes: s.rapid_voltage_changes,
        short_interruptions: s.short_interruptions,
        supply_voltage_dips: s.supply_voltage_dips,
        supply_voltage_imbalance: s.supply_voltage_imbalance,
        supply_voltage_variations: s.supply_voltage_variations,
        temp_overvoltage: s.temp_overvoltage,
    }
}

fn power_quality_to_domain(m: electric_power_quality_summary::Model) -> ElectricPowerQualitySummary {
    ElectricPowerQualitySummary {
        usage_point_id: Some(m.usage_point_id),
        summary_interval: interval(m.summary_interval_start, m.summary_interval_duration),
        flicker_plt: m.flicker_plt,
        flicker_pst: m.flicker_pst,
        harmonic_voltage: m.harmonic_voltage,
        long_interruptions: m.long_interruptions,
        mains_voltage: m.mains_voltage,
        measurement_protocol: m.measurement_protocol,
        power_frequency: m.power_frequency,
        rapid_voltage_changes: m.rapid_voltage_changes,
        short_interruptions: m.short_interruptions,
        supply_voltage_dips: m.supply_voltage_dips,
        supply_voltage_imbalance: m.supply_voltage_imbalance,
        supply_voltage_variations: m.supply_voltage_variations,
        temp_overvoltage: m.temp_overvoltage,
        object: identified_object!(m),
    }
}

// ── Graph rows ──────────────────────────────────────────────────

/// Every row written for a batch of usage points.
#[derive(Default)]
struct GraphRows {
    usage_points: Vec<usage_point::ActiveModel>,
    meter_readings: Vec<meter_reading::ActiveModel>,
    interval_blocks: Vec<interval_block::ActiveModel>,
    interval_readings: Vec<interval_reading::ActiveModel>,
    reading_qualities: Vec<reading_quality::ActiveModel>,
    usage_summaries: Vec<usage_summary::ActiveModel>,
    tariff_rider_refs: Vec<usage_summary_tariff_rider_ref::ActiveModel>,
    line_items: Vec<line_item::ActiveModel>,
    power_quality: Vec<electric_power_quality_summary::ActiveModel>,
    pnode_refs: Vec<usage_point_pnode_ref::ActiveModel>,
    aggregate_node_refs: Vec<usage_point_aggregate_node_ref::ActiveModel>,
}

/// Ids of identified children in the incoming batch. A child that moved
/// from another usage point is removed from its old owner first.
#[derive(Default)]
struct Claimed {
    meter_readings: Vec<Uuid>,
    interval_blocks: Vec<Uuid>,
    usage_summaries: Vec<Uuid>,
    power_quality: Vec<Uuid>,
}

impl Claimed {
    fn of(items: &[UsagePoint]) -> Self {
        let mut claimed = Self::default();
        for up in items {
            for mr in &up.meter_readings {
                claimed.meter_readings.push(mr.object.id);
                claimed
                    .interval_blocks
                    .extend(mr.interval_blocks.iter().map(|b| b.object.id));
            }
            claimed
                .usage_summaries
                .extend(up.usage_summaries.iter().map(|s| s.object.id));
            claimed
                .power_quality
                .extend(up.electric_power_quality_summaries.iter().map(|s| s.object.id));
        }
        claimed
    }
}

/// Interval readings get explicit keys so their quality rows can point
/// at them within the same batch; `next_reading_id` is the first free one.
fn graph_rows(items: &[UsagePoint], mut next_reading_id: i32) -> DomainResult<GraphRows> {
    let mut rows = GraphRows::default();
    for up in items {
        let up_id = up.object.id;
        rows.usage_points.push(active(usage_point_to_entity(up)));

        for (mr_index, mr) in up.meter_readings.iter().enumerate() {
            rows.meter_readings
                .push(active(meter_reading_to_entity(mr, up_id, mr_index)));
            for (block_index, block) in mr.interval_blocks.iter().enumerate() {
                rows.interval_blocks.push(active(interval_block_to_entity(
                    block,
                    mr.object.id,
                    block_index,
                )));
                for reading in &block.interval_readings {
                    let reading_id = next_reading_id;
                    next_reading_id = next_reading_id.checked_add(1).ok_or_else(|| {
                        DomainError::Storage("Interval reading keys exhausted".into())
                    })?;
                    rows.interval_readings.push(active(interval_reading_to_entity(
                        reading,
                        reading_id,
                        block.object.id,
                    )));
                    for quality in &reading.reading_qualities {
                        rows.reading_qualities
                            .push(active_serial(reading_quality::Model {
                                id: 0,
                                interval_reading_id: reading_id,
                                quality: quality.quality.code(),
                            }));
                    }
                }
            }
        }

        for (index, summary) in up.usage_summaries.iter().enumerate() {
            let summary_id = summary.object.id;
            rows.usage_summaries
                .push(active(usage_summary_to_entity(summary, up_id, index)));
            for rider in &summary.tariff_rider_refs {
                rows.tariff_rider_refs
                    .push(active_serial(usage_summary_tariff_rider_ref::Model {
                        id: 0,
                        usage_summary_id: summary_id,
                        rider_type: rider.rider_type.clone(),
                        enrollment_status: rider.enrollment_status.code().to_string(),
                        effective_date: rider.effective_date,
                    }));
            }
            for item in &summary.line_items {
                rows.line_items
                    .push(active_serial(line_item_to_entity(item, summary_id)));
            }
        }

        for (index, summary) in up.electric_power_quality_summaries.iter().enumerate() {
            rows.power_quality
                .push(active(power_quality_to_entity(summary, up_id, index)));
        }

        for node in &up.pnode_refs {
            rows.pnode_refs.push(active_serial(usage_point_pnode_ref::Model {
                id: 0,
                usage_point_id: up_id,
                apnode_type: node.apnode_type.code().to_string(),
                reference: node.reference.clone(),
                start_effective_date: node.start_effective_date,
                end_effective_date: node.end_effective_date,
            }));
        }
        for node in &up.aggregate_node_refs {
            rows.aggregate_node_refs
                .push(active_serial(usage_point_aggregate_node_ref::Model {
                    id: 0,
                    usage_point_id: up_id,
                    anode_type: node.anode_type.code().to_string(),
                    reference: node.reference.clone(),
                    start_effective_date: node.start_effective_date,
                    end_effective_date: node.end_effective_date,
                }));
        }
    }
    Ok(rows)
}

async fn next_interval_reading_id<C: ConnectionTrait>(conn: &C) -> Result<i32, DbErr> {
    let max: Option<Option<i32>> = interval_reading::Entity::find()
        .select_only()
        .column_as(interval_reading::Column::Id.max(), "max_id")
        .into_tuple()
        .one(conn)
        .await?;
    Ok(max.flatten().unwrap_or(0).saturating_add(1))
}

async fn insert_graph<C: ConnectionTrait>(conn: &C, rows: GraphRows) -> Result<(), DbErr> {
    insert_all(conn, rows.meter_readings).await?;
    insert_all(conn, rows.interval_blocks).await?;
    insert_all(conn, rows.interval_readings).await?;
    insert_all(conn, rows.reading_qualities).await?;
    insert_all(conn, rows.usage_summaries).await?;
    insert_all(conn, rows.tariff_rider_refs).await?;
    insert_all(conn, rows.line_items).await?;
    insert_all(conn, rows.power_quality).await?;
    insert_all(conn, rows.pnode_refs).await?;
    insert_all(conn, rows.aggregate_node_refs).await
}

fn union(owned: impl IntoIterator<Item = Uuid>, claimed: &[Uuid]) -> Vec<Uuid> {
    owned
        .into_iter()
        .chain(claimed.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

async fn delete_meter_readings<C: ConnectionTrait>(
    conn: &C,
    meter_reading_ids: &[Uuid],
    claimed_blocks: &[Uuid],
) -> Result<(), DbErr> {
    let blocks = find_in::<interval_block::Entity, _, _>(
        conn,
        interval_block::Column::MeterReadingId,
        meter_reading_ids,
        interval_block::Column::Id,
    )
    .await?;
    let block_ids = union(blocks.into_iter().map(|b| b.id), claimed_blocks);
    let reading_ids: Vec<i32> = find_in::<interval_reading::Entity, _, _>(
        conn,
        interval_reading::Column::IntervalBlockId,
        &block_ids,
        interval_reading::Column::Id,
    )
    .await?
    .into_iter()
    .map(|r| r.id)
    .collect();

    delete_in::<reading_quality::Entity, _, _>(
        conn,
        reading_quality::Column::IntervalReadingId,
        &reading_ids,
    )
    .await?;
    delete_in::<interval_reading::Entity, _, _>(conn, interval_reading::Column::Id, &reading_ids)
        .await?;
    delete_in::<interval_block::Entity, _, _>(conn, interval_block::Column::Id, &block_ids)
        .await?;
    delete_in::<meter_reading::Entity, _, _>(conn, meter_reading::Column::Id, meter_reading_ids)
        .await?;
    Ok(())
}

/// Remove everything owned by `usage_point_ids`, plus the claimed
/// children wherever they currently live.
async fn delete_owned<C: ConnectionTrait>(
    conn: &C,
    usage_point_ids: &[Uuid],
    claimed: &Claimed,
) -> Result<(), DbErr> {
    let readings = find_in::<meter_reading::Entity, _, _>(
        conn,
        meter_reading::Column::UsagePointId,
        usage_point_ids,
        meter_reading::Column::Id,
    )
    .await?;
    let meter_reading_ids = union(readings.into_iter().map(|r| r.id), &claimed.meter_readings);
    delete_meter_readings(conn, &meter_reading_ids, &claimed.interval_blocks).await?;

    let summaries = find_in::<usage_summary::Entity, _, _>(
        conn,
        usage_summary::Column::UsagePointId,
        usage_point_ids,
        usage_summary::Column::Id,
    )
    .await?;
    let summary_ids = union(summaries.into_iter().map(|s| s.id), &claimed.usage_summaries);
    delete_in::<usage_summary_tariff_rider_ref::Entity, _, _>(
        conn,
        usage_summary_tariff_rider_ref::Column::UsageSummaryId,
        &summary_ids,
    )
    .await?;
    delete_in::<line_item::Entity, _, _>(conn, line_item::Column::UsageSummaryId, &summary_ids)
        .await?;
    delete_in::<usage_summary::Entity, _, _>(conn, usage_summary::Column::Id, &summary_ids)
        .await?;

    delete_in::<electric_power_quality_summary::Entity, _, _>(
        conn,
        electric_power_quality_summary::Column::UsagePointId,
        usage_point_ids,
    )
    .await?;
    delete_in::<electric_power_quality_summary::Entity, _, _>(
        conn,
        electric_power_quality_summary::Column::Id,
        &claimed.power_quality,
    )
    .await?;

    delete_in::<usage_point_pnode_ref::Entity, _, _>(
        conn,
        usage_point_pnode_ref::Column::UsagePointId,
        usage_point_ids,
    )
    .await?;
    delete_in::<usage_point_aggregate_node_ref::Entity, _, _>(
        conn,
        usage_point_aggregate_node_ref::Column::UsagePointId,
        usage_point_ids,
    )
    .await?;
    Ok(())
}

// ── Graph loading ───────────────────────────────────────────────

async fn load_meter_readings<C: ConnectionTrait>(
    conn: &C,
    models: Vec<meter_reading::Model>,
) -> DomainResult<Vec<MeterReading>> {
    let mr_ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
    let blocks = find_in::<interval_block::Entity, _, _>(
        conn,
        interval_block::Column::MeterReadingId,
        &mr_ids,
        interval_block::Column::Position,
    )
    .await
    .map_err(db_err)?;
    let block_ids: Vec<Uuid> = blocks.iter().map(|b| b.id).collect();
    let readings = find_in::<interval_reading::Entity, _, _>(
        conn,
        interval_reading::Column::IntervalBlockId,
        &block_ids,
        interval_reading::Column::Id,
    )
    .await
    .map_err(db_err)?;
    let reading_ids: Vec<i32> = readings.iter().map(|r| r.id).collect();
    let qualities = find_in::<reading_quality::Entity, _, _>(
        conn,
        reading_quality::Column::IntervalReadingId,
        &reading_ids,
        reading_quality::Column::Id,
    )
    .await
    .map_err(db_err)?;

    let mut qualities = group_by(qualities, |q| q.interval_reading_id);
    let mut readings = group_by(readings, |r| r.interval_block_id);
    let mut blocks = group_by(blocks, |b| b.meter_reading_id);

    models
        .into_iter()
        .map(|m| -> DomainResult<MeterReading> {
            let interval_blocks = blocks
                .remove(&m.id)
                .unwrap_or_default()
                .into_iter()
                .map(|b| -> DomainResult<IntervalBlock> {
                    let interval_readings = readings
                        .remove(&b.id)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|r| {
                            let q = qualities.remove(&r.id).unwrap_or_default();
                            interval_reading_to_domain(r, q)
                        })
                        .collect::<DomainResult<Vec<_>>>()?;
                    Ok(IntervalBlock {
                        meter_reading_id: Some(b.meter_reading_id),
                        interval: interval(b.interval_start, b.interval_duration),
                        interval_readings,
                        object: identified_object!(b),
                    })
                })
                .collect::<DomainResult<Vec<_>>>()?;
            Ok(MeterReading {
                usage_point_id: Some(m.usage_point_id),
                reading_type_id: m.reading_type_id,
                interval_blocks,
                object: identified_object!(m),
            })
        })
        .collect()
}

async fn load_graph<C: ConnectionTrait>(
    conn: &C,
    models: Vec<usage_point::Model>,
) -> DomainResult<Vec<UsagePoint>> {
    let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();

    let readings = find_in::<meter_reading::Entity, _, _>(
        conn,
        meter_reading::Column::UsagePointId,
        &ids,
        meter_reading::Column::Position,
    )
    .await
    .map_err(db_err)?;
    let mut readings = group_by(load_meter_readings(conn, readings).await?, |r| {
        r.usage_point_id.unwrap_or_default()
    });

    let summaries = find_in::<usage_summary::Entity, _, _>(
        conn,
        usage_summary::Column::UsagePointId,
        &ids,
        usage_summary::Column::Position,
    )
    .await
    .map_err(db_err)?;
    let summary_ids: Vec<Uuid> = summaries.iter().map(|s| s.id).collect();
    let riders = find_in::<usage_summary_tariff_rider_ref::Entity, _, _>(
        conn,
        usage_summary_tariff_rider_ref::Column::UsageSummaryId,
        &summary_ids,
        usage_summary_tariff_rider_ref::Column::Id,
    )
    .await
    .map_err(db_err)?;
    let items = find_in::<line_item::Entity, _, _>(
        conn,
        line_item::Column::UsageSummaryId,
        &summary_ids,
        line_item::Column::Id,
    )
    .await
    .map_err(db_err)?;
    let mut riders = group_by(riders, |r| r.usage_summary_id);
    let mut items = group_by(items, |i| i.usage_summary_id);
    let summaries = summaries
        .into_iter()
        .map(|s| {
            let id = s.id;
            usage_summary_to_domain(
                s,
                riders.remove(&id).unwrap_or_default(),
                items.remove(&id).unwrap_or_default(),
            )
        })
        .collect::<DomainResult<Vec<_>>>()?;
    let mut summaries = group_by(summaries, |s| s.usage_point_id.unwrap_or_default());

    let power_quality = find_in::<electric_power_quality_summary::Entity, _, _>(
        conn,
        electric_power_quality_summary::Column::UsagePointId,
        &ids,
        electric_power_quality_summary::Column::Position,
    )
    .await
    .map_err(db_err)?;
    let mut power_quality = group_by(
        power_quality.into_iter().map(power_quality_to_domain).collect(),
        |s: &ElectricPowerQualitySummary| s.usage_point_id.unwrap_or_default(),
    );

    let pnodes = find_in::<usage_point_pnode_ref::Entity, _, _>(
        conn,
        usage_point_pnode_ref::Column::UsagePointId,
        &ids,
        usage_point_pnode_ref::Column::Id,
    )
    .await
    .map_err(db_err)?;
    let anodes = find_in::<usage_point_aggregate_node_ref::Entity, _, _>(
        conn,
        usage_point_aggregate_node_ref::Column::UsagePointId,
        &ids,
        usage_point_aggregate_node_ref::Column::Id,
    )
    .await
    .map_err(db_err)?;
    let mut pnodes: HashMap<Uuid, Vec<usage_point_pnode_ref::Model>> =
        group_by(pnodes, |n| n.usage_point_id);
    let mut anodes: HashMap<Uuid, Vec<usage_point_aggregate_node_ref::Model>> =
        group_by(anodes, |n| n.usage_point_id);

    models
        .into_iter()
        .map(|m| -> DomainResult<UsagePoint> {
            let id = m.id;
            let mut up = usage_point_to_domain(m)?;
            up.meter_readings = readings.remove(&id).unwrap_or_default();
            up.usage_summaries = summaries.remove(&id).unwrap_or_default();
            up.electric_power_quality_summaries = power_quality.remove(&id).unwrap_or_default();
            up.pnode_refs = pnodes
                .remove(&id)
                .unwrap_or_default()
                .into_iter()
                .map(|n| -> DomainResult<PnodeRef> {
                    Ok(PnodeRef {
                        apnode_type: ApnodeType::from_code(&n.apnode_type)?,
                        reference: n.reference,
                        start_effective_date: n.start_effective_date,
                        end_effective_date: n.end_effective_date,
                    })
                })
                .collect::<DomainResult<_>>()?;
            up.aggregate_node_refs = anodes
                .remove(&id)
                .unwrap_or_default()
                .into_iter()
                .map(|n| -> DomainResult<AggregateNodeRef> {
                    Ok(AggregateNodeRef {
                        anode_type: AnodeType::from_code(&n.anode_type)?,
                        reference: n.reference,
                        start_effective_date: n.start_effective_date,
                        end_effective_date: n.end_effective_date,
                    })
                })
                .collect::<DomainResult<_>>()?;
            Ok(up)
        })
        .collect()
}

// ── SeaOrmUsagePointRepository ──────────────────────────────────

pub struct SeaOrmUsagePointRepository {
    db: DatabaseConnection,
}

impl SeaOrmUsagePointRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<UsagePoint> for SeaOrmUsagePointRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<UsagePoint>> {
        let model = usage_point::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(model) = model else {
            return Ok(None);
        };
        Ok(load_graph(&self.db, vec![model]).await?.pop())
    }

    async fn find_all(&self) -> DomainResult<Vec<UsagePoint>> {
        let models = usage_point::Entity::find()
            .order_by_asc(usage_point::Column::SelfLinkHref)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        load_graph(&self.db, models).await
    }

    async fn save_all(&self, items: Vec<UsagePoint>) -> DomainResult<Vec<UsagePoint>> {
        let mut items = last_per_id(items);
        for up in &mut items {
            up.attach();
        }
        let ids: Vec<Uuid> = items.iter().map(|up| up.object.id).collect();
        let claimed = Claimed::of(&items);

        let txn = self.db.begin().await.map_err(db_err)?;
        let first_reading_id = next_interval_reading_id(&txn).await.map_err(db_err)?;
        let mut rows = graph_rows(&items, first_reading_id)?;
        let readings = rows.interval_readings.len();

        upsert_all(&txn, std::mem::take(&mut rows.usage_points))
            .await
            .map_err(db_err)?;
        delete_owned(&txn, &ids, &claimed).await.map_err(db_err)?;
        insert_graph(&txn, rows).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        info!(count = items.len(), readings, "Usage points saved");
        Ok(items)
    }

    async fn delete_by_id(&self, id: Uuid) -> DomainResult<bool> {
        let txn = self.db.begin().await.map_err(db_err)?;
        delete_owned(&txn, &[id], &Claimed::default())
            .await
            .map_err(db_err)?;
        subscription_usage_point::Entity::delete_many()
            .filter(subscription_usage_point::Column::UsagePointId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;
        let result = usage_point::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        if result.rows_affected == 0 {
            warn!(%id, "Usage point not found for delete");
            return Ok(false);
        }
        info!(%id, "Usage point deleted");
        Ok(true)
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let txn = self.db.begin().await.map_err(db_err)?;
        reading_quality::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        interval_reading::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        interval_block::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        meter_reading::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        usage_summary_tariff_rider_ref::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        line_item::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        usage_summary::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        electric_power_quality_summary::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        usage_point_pnode_ref::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        usage_point_aggregate_node_ref::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        subscription_usage_point::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        let result = usage_point::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        info!(count = result.rows_affected, "Usage points deleted");
        Ok(result.rows_affected)
    }

    async fn count(&self) -> DomainResult<u64> {
        usage_point::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}

#[async_trait]
impl UsagePointRepository for SeaOrmUsagePointRepository {
    async fn find_all_by_retail_customer(
        &self,
        retail_customer_id: Uuid,
    ) -> DomainResult<Vec<UsagePoint>> {
        let models = usage_point::Entity::find()
            .filter(usage_point::Column::RetailCustomerId.eq(retail_customer_id))
            .order_by_asc(usage_point::Column::SelfLinkHref)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        debug!(%retail_customer_id, count = models.len(), "Usage points for retail customer");
        load_graph(&self.db, models).await
    }

    async fn find_meter_reading(&self, id: Uuid) -> DomainResult<Option<MeterReading>> {
        let model = meter_reading::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(model) = model else {
            return Ok(None);
        };
        Ok(load_meter_readings(&self.db, vec![model]).await?.pop())
    }
}
