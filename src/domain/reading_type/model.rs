//! ReadingType domain entity

use serde::{Deserialize, Serialize};

use crate::domain::common::{Identified, IdentifiedObject};
use crate::domain::kinds::{
    AccumulationKind, CommodityKind, CurrencyCode, DataQualifierKind, FlowDirectionKind,
    MeasurementKind, PhaseCodeKind, QualityOfReading, TimeAttributeKind, UnitMultiplierKind,
    UnitSymbolKind,
};

/// Numerator/denominator pair (interharmonics, phase arguments).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rational {
    pub numerator: i64,
    pub denominator: i64,
}

/// Semantics of the values carried by a meter reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingType {
    pub object: IdentifiedObject,
    pub accumulation_behaviour: Option<AccumulationKind>,
    pub commodity: Option<CommodityKind>,
    pub consumption_tier: Option<i32>,
    pub currency: Option<CurrencyCode>,
    pub data_qualifier: Option<DataQualifierKind>,
    pub default_quality: Option<QualityOfReading>,
    pub flow_direction: Option<FlowDirectionKind>,
    /// Length of each interval in seconds.
    pub interval_length: Option<i64>,
    pub kind: Option<MeasurementKind>,
    pub phase: Option<PhaseCodeKind>,
    pub power_of_ten_multiplier: Option<UnitMultiplierKind>,
    pub time_attribute: Option<TimeAttributeKind>,
    pub tou: Option<i32>,
    pub uom: Option<UnitSymbolKind>,
    pub cpp: Option<i32>,
    pub interharmonic: Option<Rational>,
    pub measuring_period: Option<TimeAttributeKind>,
    pub argument: Option<Rational>,
}

impl ReadingType {
    pub fn new(self_href: &str) -> Self {
        Self {
            object: IdentifiedObject::from_self_href(self_href),
            accumulation_behaviour: None,
            commodity: None,
            consumption_tier: None,
            currency: None,
            data_qualifier: None,
            default_quality: None,
            flow_direction: None,
            interval_length: None,
            kind: None,
            phase: None,
            power_of_ten_multiplier: None,
            time_attribute: None,
            tou: None,
            uom: None,
            cpp: None,
            interharmonic: None,
            measuring_period: None,
            argument: None,
        }
    }

    /// Typical electricity interval-energy reading type (Wh, forward flow).
    pub fn interval_energy(self_href: &str, interval_length: i64) -> Self {
        Self {
            accumulation_behaviour: Some(AccumulationKind::DeltaData),
            commodity: Some(CommodityKind::ElectricitySecondaryMetered),
            currency: Some(CurrencyCode::Usd),
            data_qualifier: Some(DataQualifierKind::Normal),
            default_quality: Some(QualityOfReading::Valid),
            flow_direction: Some(FlowDirectionKind::Forward),
            interval_length: Some(interval_length),
            kind: Some(MeasurementKind::Energy),
            phase: Some(PhaseCodeKind::S12N),
            power_of_ten_multiplier: Some(UnitMultiplierKind::None),
            time_attribute: Some(TimeAttributeKind::None),
            uom: Some(UnitSymbolKind::WattHours),
            ..Self::new(self_href)
        }
    }

    /// Apply the power-of-ten multiplier to a raw reading value.
    pub fn scale(&self, raw: i64) -> f64 {
        let exponent = self.power_of_ten_multiplier.map_or(0, |m| m.code());
        raw as f64 * 10f64.powi(exponent)
    }
}

impl Identified for ReadingType {
    fn identified_object(&self) -> &IdentifiedObject {
        &self.object
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::identity::derive_id;

    #[test]
    fn interval_energy_defaults() {
        let href = "https://dc.example/espi/1_1/resource/ReadingType/1";
        let rt = ReadingType::interval_energy(href, 900);
        assert_eq!(rt.id(), derive_id(href));
        assert_eq!(rt.kind, Some(MeasurementKind::Energy));
        assert_eq!(rt.uom, Some(UnitSymbolKind::WattHours));
        assert_eq!(rt.interval_length, Some(900));
    }

    #[test]
    fn scale_uses_multiplier() {
        let mut rt = ReadingType::new("rt");
        assert_eq!(rt.scale(250), 250.0);
        rt.power_of_ten_multiplier = Some(UnitMultiplierKind::Milli);
        assert!((rt.scale(250) - 0.25).abs() < f64::EPSILON);
    }
}
