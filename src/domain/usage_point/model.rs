//! UsagePoint domain entity
//!
//! The root aggregate of the usage domain. A usage point owns its meter
//! readings, usage summaries, power-quality summaries and node references;
//! it only references its retail customer, service delivery point and
//! local time parameters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::meter_reading::MeterReading;
use super::summary::{ElectricPowerQualitySummary, UsageSummary};
use crate::domain::common::{Identified, IdentifiedObject, SummaryMeasurement};
use crate::domain::kinds::{
    AmiBillingReadyKind, AnodeType, ApnodeType, PhaseCodeKind, ServiceKind,
    UsagePointConnectedKind,
};

/// Pricing node reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PnodeRef {
    pub apnode_type: ApnodeType,
    pub reference: String,
    pub start_effective_date: Option<i64>,
    pub end_effective_date: Option<i64>,
}

/// Aggregate node reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateNodeRef {
    pub anode_type: AnodeType,
    pub reference: String,
    pub start_effective_date: Option<i64>,
    pub end_effective_date: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsagePoint {
    pub object: IdentifiedObject,
    pub role_flags: Option<Vec<u8>>,
    pub service_category: Option<ServiceKind>,
    pub status: Option<i16>,
    pub uri: Option<String>,
    pub ami_billing_ready: Option<AmiBillingReadyKind>,
    pub check_billing: Option<bool>,
    pub connection_state: Option<UsagePointConnectedKind>,
    pub estimated_load: Option<SummaryMeasurement>,
    pub grounded: Option<bool>,
    pub is_sdp: Option<bool>,
    pub is_virtual: Option<bool>,
    pub minimal_usage_expected: Option<bool>,
    pub nominal_service_voltage: Option<SummaryMeasurement>,
    pub outage_region: Option<String>,
    pub phase_code: Option<PhaseCodeKind>,
    pub rated_current: Option<SummaryMeasurement>,
    pub rated_power: Option<SummaryMeasurement>,
    pub read_cycle: Option<String>,
    pub read_route: Option<String>,
    pub service_delivery_remark: Option<String>,
    pub service_priority: Option<String>,

    pub retail_customer_id: Option<Uuid>,
    pub service_delivery_point_id: Option<Uuid>,
    pub local_time_parameters_id: Option<Uuid>,

    pub meter_readings: Vec<MeterReading>,
    pub usage_summaries: Vec<UsageSummary>,
    pub electric_power_quality_summaries: Vec<ElectricPowerQualitySummary>,
    pub pnode_refs: Vec<PnodeRef>,
    pub aggregate_node_refs: Vec<AggregateNodeRef>,
}

impl UsagePoint {
    pub fn new(self_href: &str) -> Self {
        Self {
            object: IdentifiedObject::from_self_href(self_href),
            role_flags: None,
            service_category: None,
            status: None,
            uri: None,
            ami_billing_ready: None,
            check_billing: None,
            connection_state: None,
            estimated_load: None,
            grounded: None,
            is_sdp: None,
            is_virtual: None,
            minimal_usage_expected: None,
            nominal_service_voltage: None,
            outage_region: None,
            phase_code: None,
            rated_current: None,
            rated_power: None,
            read_cycle: None,
            read_route: None,
            service_delivery_remark: None,
            service_priority: None,
            retail_customer_id: None,
            service_delivery_point_id: None,
            local_time_parameters_id: None,
            meter_readings: Vec::new(),
            usage_summaries: Vec::new(),
            electric_power_quality_summaries: Vec::new(),
            pnode_refs: Vec::new(),
            aggregate_node_refs: Vec::new(),
        }
    }

    pub fn of_service(mut self, kind: ServiceKind) -> Self {
        self.service_category = Some(kind);
        self
    }

    pub fn for_retail_customer(mut self, retail_customer_id: Uuid) -> Self {
        self.retail_customer_id = Some(retail_customer_id);
        self
    }

    pub fn with_meter_reading(mut self, reading: MeterReading) -> Self {
        self.meter_readings.push(reading);
        self.attach();
        self
    }

    pub fn with_usage_summary(mut self, summary: UsageSummary) -> Self {
        self.usage_summaries.push(summary);
        self.attach();
        self
    }

    pub fn with_power_quality_summary(mut self, summary: ElectricPowerQualitySummary) -> Self {
        self.electric_power_quality_summaries.push(summary);
        self.attach();
        self
    }

    /// Stamp every owned child (recursively) with its owner's id.
    ///
    /// Repositories call this before writing, so a graph assembled without
    /// back-pointers is still stored consistently.
    pub fn attach(&mut self) {
        let id = self.object.id;
        for reading in &mut self.meter_readings {
            reading.usage_point_id = Some(id);
            reading.attach();
        }
        for summary in &mut self.usage_summaries {
            summary.usage_point_id = Some(id);
        }
        for summary in &mut self.electric_power_quality_summaries {
            summary.usage_point_id = Some(id);
        }
    }

    pub fn meter_reading(&self, id: Uuid) -> Option<&MeterReading> {
        self.meter_readings.iter().find(|r| r.object.id == id)
    }

    pub fn meter_reading_mut(&mut self, id: Uuid) -> Option<&mut MeterReading> {
        self.meter_readings.iter_mut().find(|r| r.object.id == id)
    }

    /// Detach a meter reading; once the usage point is saved again the
    /// reading and everything under it is deleted.
    pub fn remove_meter_reading(&mut self, id: Uuid) -> Option<MeterReading> {
        let index = self.meter_readings.iter().position(|r| r.object.id == id)?;
        Some(self.meter_readings.remove(index))
    }

    pub fn role_flags_hex(&self) -> Option<String> {
        self.role_flags.as_ref().map(hex::encode)
    }
}

impl Identified for UsagePoint {
    fn identified_object(&self) -> &IdentifiedObject {
        &self.object
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::DateTimeInterval;
    use crate::domain::usage_point::{IntervalBlock, IntervalReading};

    fn sample() -> UsagePoint {
        let mut up = UsagePoint::new("https://dc.example/espi/1_1/resource/UsagePoint/1");
        // Children pushed directly, without back-pointers.
        up.meter_readings.push(
            MeterReading::new("https://dc.example/espi/1_1/resource/MeterReading/1").with_block(
                IntervalBlock::new("https://dc.example/espi/1_1/resource/IntervalBlock/1", 0, 900)
                    .with_reading(IntervalReading::new(0, 900, 1)),
            ),
        );
        up.usage_summaries.push(UsageSummary::new(
            "https://dc.example/espi/1_1/resource/UsageSummary/1",
            DateTimeInterval::new(0, 86_400),
        ));
        up.electric_power_quality_summaries
            .push(ElectricPowerQualitySummary::new(
                "https://dc.example/espi/1_1/resource/ElectricPowerQualitySummary/1",
                DateTimeInterval::new(0, 86_400),
            ));
        up
    }

    #[test]
    fn attach_stamps_every_back_pointer() {
        let mut up = sample();
        assert_eq!(up.meter_readings[0].usage_point_id, None);
        up.attach();
        let id = up.object.id;
        assert_eq!(up.meter_readings[0].usage_point_id, Some(id));
        assert_eq!(
            up.meter_readings[0].interval_blocks[0].meter_reading_id,
            Some(up.meter_readings[0].object.id)
        );
        assert_eq!(up.usage_summaries[0].usage_point_id, Some(id));
        assert_eq!(up.electric_power_quality_summaries[0].usage_point_id, Some(id));
    }

    #[test]
    fn remove_meter_reading_detaches_it() {
        let mut up = sample();
        let id = up.meter_readings[0].object.id;
        assert!(up.remove_meter_reading(id).is_some());
        assert!(up.meter_reading(id).is_none());
        assert!(up.remove_meter_reading(id).is_none());
    }

    #[test]
    fn role_flags_render_as_hex() {
        let mut up = sample();
        up.role_flags = Some(vec![0x01, 0x0a]);
        assert_eq!(up.role_flags_hex().as_deref(), Some("010a"));
    }
}
