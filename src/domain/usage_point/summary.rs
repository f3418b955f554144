//! Billing-period and power-quality summaries owned by a usage point

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{DateTimeInterval, Identified, IdentifiedObject, SummaryMeasurement};
use crate::domain::kinds::{CurrencyCode, EnrollmentStatus, ItemKind, QualityOfReading};

/// Agency that raised a bill's charges.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BillingChargeSource {
    pub agency_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffRiderRef {
    pub rider_type: String,
    pub enrollment_status: EnrollmentStatus,
    pub effective_date: i64,
}

/// One line of a bill. Amounts are in hundred-thousandths of the currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub amount: i64,
    pub rounding: Option<i64>,
    pub date_time: i64,
    pub note: String,
    pub measurement: Option<SummaryMeasurement>,
    pub item_kind: Option<ItemKind>,
    pub unit_cost: Option<i64>,
    pub item_period: DateTimeInterval,
}

impl LineItem {
    pub fn new(amount: i64, date_time: i64, note: impl Into<String>) -> Self {
        Self {
            amount,
            rounding: None,
            date_time,
            note: note.into(),
            measurement: None,
            item_kind: None,
            unit_cost: None,
            item_period: DateTimeInterval::default(),
        }
    }

    pub fn of_kind(mut self, kind: ItemKind) -> Self {
        self.item_kind = Some(kind);
        self
    }
}

/// Billing-period rollup for a usage point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSummary {
    pub object: IdentifiedObject,
    pub usage_point_id: Option<Uuid>,
    pub billing_period: DateTimeInterval,
    pub bill_last_period: Option<i64>,
    pub bill_to_date: Option<i64>,
    pub cost_additional_last_period: Option<i64>,
    pub currency: Option<CurrencyCode>,
    pub quality_of_reading: Option<QualityOfReading>,
    pub status_time_stamp: Option<i64>,
    pub ratchet_demand_period: DateTimeInterval,
    pub overall_consumption_last_period: Option<SummaryMeasurement>,
    pub current_billing_period_overall_consumption: Option<SummaryMeasurement>,
    pub current_day_net_consumption: Option<SummaryMeasurement>,
    pub current_day_overall_consumption: Option<SummaryMeasurement>,
    pub peak_demand: Option<SummaryMeasurement>,
    pub ratchet_demand: Option<SummaryMeasurement>,
    pub billing_charge_source: Option<BillingChargeSource>,
    pub tariff_profile: Option<String>,
    pub read_cycle: Option<String>,
    pub tariff_rider_refs: Vec<TariffRiderRef>,
    pub line_items: Vec<LineItem>,
}

impl UsageSummary {
    pub fn new(self_href: &str, billing_period: DateTimeInterval) -> Self {
        Self {
            object: IdentifiedObject::from_self_href(self_href),
            usage_point_id: None,
            billing_period,
            bill_last_period: None,
            bill_to_date: None,
            cost_additional_last_period: None,
            currency: None,
            quality_of_reading: None,
            status_time_stamp: None,
            ratchet_demand_period: DateTimeInterval::default(),
            overall_consumption_last_period: None,
            current_billing_period_overall_consumption: None,
            current_day_net_consumption: None,
            current_day_overall_consumption: None,
            peak_demand: None,
            ratchet_demand: None,
            billing_charge_source: None,
            tariff_profile: None,
            read_cycle: None,
            tariff_rider_refs: Vec::new(),
            line_items: Vec::new(),
        }
    }

    pub fn with_line_item(mut self, item: LineItem) -> Self {
        self.line_items.push(item);
        self
    }

    /// `None` when the amounts overflow an `i64`.
    pub fn line_item_total(&self) -> Option<i64> {
        self.line_items
            .iter()
            .try_fold(0i64, |total, item| total.checked_add(item.amount))
    }
}

impl Identified for UsageSummary {
    fn identified_object(&self) -> &IdentifiedObject {
        &self.object
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricPowerQualitySummary {
    pub object: IdentifiedObject,
    pub usage_point_id: Option<Uuid>,
    pub summary_interval: DateTimeInterval,
    pub flicker_plt: Option<i64>,
    pub flicker_pst: Option<i64>,
    pub harmonic_voltage: Option<i64>,
    pub long_interruptions: Option<i64>,
    pub mains_voltage: Option<i64>,
    pub measurement_protocol: Option<i16>,
    pub power_frequency: Option<i64>,
    pub rapid_voltage_changes: Option<i64>,
    pub short_interruptions: Option<i64>,
    pub supply_voltage_dips: Option<i64>,
    pub supply_voltage_imbalance: Option<i64>,
    pub supply_voltage_variations: Option<i64>,
    pub temp_overvoltage: Option<i64>,
}

impl ElectricPowerQualitySummary {
    pub fn new(self_href: &str, summary_interval: DateTimeInterval) -> Self {
        Self {
            object: IdentifiedObject::from_self_href(self_href),
            usage_point_id: None,
            summary_interval,
            flicker_plt: None,
            flicker_pst: None,
            harmonic_voltage: None,
            long_interruptions: None,
            mains_voltage: None,
            measurement_protocol: None,
            power_frequency: None,
            rapid_voltage_changes: None,
            short_interruptions: None,
            supply_voltage_dips: None,
            supply_voltage_imbalance: None,
            supply_voltage_variations: None,
            temp_overvoltage: None,
        }
    }
}

impl Identified for ElectricPowerQualitySummary {
    fn identified_object(&self) -> &IdentifiedObject {
        &self.object
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_item_total_sums_amounts() {
        let summary = UsageSummary::new("us", DateTimeInterval::new(0, 2_592_000))
            .with_line_item(LineItem::new(1_000, 0, "energy").of_kind(ItemKind::EnergyUsageFee))
            .with_line_item(LineItem::new(250, 0, "tax").of_kind(ItemKind::Tax));
        assert_eq!(summary.line_item_total(), Some(1_250));
    }

    #[test]
    fn overflowing_line_items_have_no_total() {
        let summary = UsageSummary::new("us", DateTimeInterval::new(0, 2_592_000))
            .with_line_item(LineItem::new(i64::MAX, 0, "energy"))
            .with_line_item(LineItem::new(1, 0, "tax"));
        assert_eq!(summary.line_item_total(), None);
    }
}
